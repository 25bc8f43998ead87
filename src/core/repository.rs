use crate::core::memory_store::InMemoryStore;
use crate::core::{Course, CourseId, CourseMut, CourseRepository, CourseStore, RepositoryId};
use crate::utils::error::{CatalogError, MembershipViolation, Result, Scope};
use std::collections::HashSet;

/// Applies membership and uniqueness rules on top of a [`CourseStore`].
///
/// Every concrete store gets the same checks: a course joins at most one
/// repository, and names are unique within a repository. The store only sees
/// requests that already passed them.
#[derive(Debug)]
pub struct Repository<S: CourseStore = InMemoryStore> {
    id: RepositoryId,
    store: S,
}

impl Repository<InMemoryStore> {
    pub fn new() -> Self {
        Self {
            id: RepositoryId::new(),
            store: InMemoryStore::new(),
        }
    }
}

impl Default for Repository<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CourseStore> Repository<S> {
    /// Wraps a store that may already hold courses.
    ///
    /// Stored courses and their modules are bound to the new repository without
    /// touching `modified`. Fails, leaving the store untouched, if stored courses
    /// or the modules of one course share an id or a name.
    pub fn open(mut store: S) -> Result<Self> {
        {
            let mut ids = HashSet::new();
            let mut seen = HashSet::new();
            for course in store.courses() {
                if !ids.insert(course.id()) {
                    return Err(MembershipViolation::AlreadyMember {
                        entity: "course",
                        owner: Scope::Repository,
                    }
                    .into());
                }
                if !seen.insert(course.name()) {
                    return Err(CatalogError::DuplicateName {
                        entity: "course",
                        scope: Scope::Repository,
                        name: course.name().to_string(),
                    });
                }
                course.check_modules()?;
            }
        }

        let id = RepositoryId::new();
        let mut count = 0;
        for course in store.courses_mut() {
            course.materialize(id);
            count += 1;
        }
        tracing::debug!("Opened repository {} holding {} courses", id, count);
        Ok(Self { id, store })
    }

    pub fn id(&self) -> RepositoryId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.store.courses().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.store.courses().into_iter().find(|c| c.id() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Course> {
        self.store.courses().into_iter().find(|c| c.name() == name)
    }

    /// Checked mutable access to a member course.
    pub fn course_mut(&mut self, id: CourseId) -> Option<CourseMut<'_>> {
        let sibling_names = self
            .store
            .courses()
            .into_iter()
            .filter(|c| c.id() != id)
            .map(|c| c.name().to_string())
            .collect();
        let course = self
            .store
            .courses_mut()
            .into_iter()
            .find(|c| c.id() == id)?;
        Some(CourseMut::new(course, sibling_names))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives up the store. Courses keep pointing at this repository until the
    /// store is opened again.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: CourseStore> CourseRepository for Repository<S> {
    fn all(&self) -> Vec<&Course> {
        self.store.courses()
    }

    fn add(&mut self, mut course: Course) -> Result<CourseId> {
        match course.repository() {
            Some(owner) if owner != self.id => {
                tracing::debug!(
                    "Rejected course '{}': owned by repository {}",
                    course.name(),
                    owner
                );
                return Err(MembershipViolation::AlreadyOwned {
                    entity: "course",
                    owner: Scope::Repository,
                }
                .into());
            }
            Some(_) => {
                return Err(MembershipViolation::AlreadyMember {
                    entity: "course",
                    owner: Scope::Repository,
                }
                .into());
            }
            // A detached snapshot of a member still carries the member's id.
            None if self.get(course.id()).is_some() => {
                tracing::debug!(
                    "Rejected course '{}': id {} already in repository {}",
                    course.name(),
                    course.id(),
                    self.id
                );
                return Err(MembershipViolation::AlreadyMember {
                    entity: "course",
                    owner: Scope::Repository,
                }
                .into());
            }
            None => {}
        }
        if self.find_by_name(course.name()).is_some() {
            tracing::debug!("Rejected course '{}': name taken", course.name());
            return Err(CatalogError::DuplicateName {
                entity: "course",
                scope: Scope::Repository,
                name: course.name().to_string(),
            });
        }

        let id = course.id();
        course.bind_repository(self.id);
        tracing::debug!("Adding course '{}' to repository {}", course.name(), self.id);
        self.store.insert(course)?;
        Ok(id)
    }

    fn remove(&mut self, id: CourseId) -> Result<Course> {
        let is_member = self
            .get(id)
            .is_some_and(|c| c.repository() == Some(self.id));
        if !is_member {
            tracing::debug!("Rejected removal of course {}: not a member", id);
            return Err(MembershipViolation::NotAMember {
                entity: "course",
                owner: Scope::Repository,
            }
            .into());
        }

        let mut course = self.store.remove(id)?;
        course.unbind_repository();
        tracing::debug!(
            "Removed course '{}' from repository {}",
            course.name(),
            self.id
        );
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Module;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_open_binds_stored_courses() {
        let mut course = Course::new("AA").unwrap();
        course.add_module(Module::new("m1").unwrap()).unwrap();
        let modified = course.modified();

        let repo = Repository::open(InMemoryStore::from_courses(vec![course])).unwrap();
        let stored = repo.find_by_name("AA").unwrap();
        assert_eq!(stored.repository(), Some(repo.id()));
        assert_eq!(stored.modified(), modified);
        assert_eq!(stored.modules()[0].course(), Some(stored.id()));
    }

    #[test]
    fn test_open_rejects_duplicate_names() {
        let store = InMemoryStore::from_courses(vec![
            Course::new("AA").unwrap(),
            Course::new("AA").unwrap(),
        ]);
        let err = Repository::open(store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
    }

    #[test]
    fn test_open_rejects_duplicate_ids() {
        let course = Course::new("AA").unwrap();
        let mut twin = course.clone();
        twin.set_name("BB").unwrap();

        let err = Repository::open(InMemoryStore::from_courses(vec![course, twin])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMembership);
    }

    #[test]
    fn test_rejected_add_never_reaches_store() {
        let mut repo = Repository::new();
        repo.add(Course::new("AA").unwrap()).unwrap();
        repo.add(Course::new("AA").unwrap()).unwrap_err();
        assert_eq!(repo.store().courses().len(), 1);
    }

    #[test]
    fn test_reopened_store_rebinds_to_new_repository() {
        let mut first = Repository::new();
        let id = first.add(Course::new("AA").unwrap()).unwrap();
        let first_id = first.id();

        let second = Repository::open(first.into_store()).unwrap();
        assert_ne!(second.id(), first_id);
        assert_eq!(second.get(id).unwrap().repository(), Some(second.id()));
    }
}
