use crate::domain::module::{Module, ModuleMut};
use crate::domain::ports::EditCourse;
use crate::domain::{validate_name, Cost, CourseId, ModuleId, RepositoryId};
use crate::utils::error::{CatalogError, MembershipViolation, Result, Scope};
use crate::utils::text::normalize_newlines;
use crate::utils::validation::validate_range;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::ops::Deref;

/// An ordered collection of [`Module`]s with a name, description and cost.
///
/// A course owns its modules. Each member module refers back to the course by
/// id; only [`Course::add_module`] and [`Course::remove_module`] change that
/// reference. Like modules, a clone is a snapshot that keeps identity and
/// repository reference.
#[derive(Debug, Clone)]
pub struct Course {
    id: CourseId,
    name: String,
    description: String,
    cost: Cost,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    modules: Vec<Module>,
    repository: Option<RepositoryId>,
}

impl Course {
    pub const DEFAULT_NAME: &'static str = "A New Course";
    pub const DEFAULT_DESCRIPTION: &'static str = "";
    pub const DEFAULT_COST: Cost = Cost::ZERO;
    pub const MIN_COST: Cost = Cost::ZERO;
    pub const MAX_COST: Cost = Cost::from_whole(100_000);

    pub fn new(name: &str) -> Result<Self> {
        validate_name("name", name)?;
        Ok(Self::with_valid_name(name))
    }

    fn with_valid_name(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: CourseId::new(),
            name: name.to_string(),
            description: Self::DEFAULT_DESCRIPTION.to_string(),
            cost: Self::DEFAULT_COST,
            created: now,
            modified: now,
            modules: Vec::new(),
            repository: None,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Total duration in days, summed over the current modules.
    pub fn duration(&self) -> u32 {
        self.modules.iter().map(Module::duration).sum()
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// The repository this course belongs to, if any.
    pub fn repository(&self) -> Option<RepositoryId> {
        self.repository
    }

    /// Modules in insertion order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == id)
    }

    pub fn module_by_name(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name() == name)
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.apply_name(value, &[])
    }

    pub fn set_description(&mut self, value: &str) -> Result<()> {
        let normalized = normalize_newlines(value);
        if normalized == self.description {
            return Ok(());
        }
        self.description = normalized.into_owned();
        self.touch();
        Ok(())
    }

    pub fn set_cost(&mut self, value: Cost) -> Result<()> {
        validate_range("cost", value, Self::MIN_COST, Self::MAX_COST)?;
        if value == self.cost {
            return Ok(());
        }
        self.cost = value;
        self.touch();
        Ok(())
    }

    pub fn add_module(&mut self, mut module: Module) -> Result<ModuleId> {
        match module.course() {
            Some(owner) if owner != self.id => {
                tracing::debug!(
                    "Rejected module '{}': owned by course {}",
                    module.name(),
                    owner
                );
                return Err(MembershipViolation::AlreadyOwned {
                    entity: "module",
                    owner: Scope::Course,
                }
                .into());
            }
            Some(_) => {
                return Err(MembershipViolation::AlreadyMember {
                    entity: "module",
                    owner: Scope::Course,
                }
                .into());
            }
            // A detached snapshot of a member still carries the member's id.
            None if self.module(module.id()).is_some() => {
                tracing::debug!(
                    "Rejected module '{}': id {} already in course '{}'",
                    module.name(),
                    module.id(),
                    self.name
                );
                return Err(MembershipViolation::AlreadyMember {
                    entity: "module",
                    owner: Scope::Course,
                }
                .into());
            }
            None => {}
        }
        if self.module_by_name(module.name()).is_some() {
            return Err(CatalogError::DuplicateName {
                entity: "module",
                scope: Scope::Course,
                name: module.name().to_string(),
            });
        }

        let id = module.id();
        module.bind_course(self.id);
        tracing::debug!("Added module '{}' to course '{}'", module.name(), self.name);
        self.modules.push(module);
        Ok(id)
    }

    pub fn remove_module(&mut self, id: ModuleId) -> Result<Module> {
        let index = self
            .modules
            .iter()
            .position(|m| m.id() == id)
            .ok_or(MembershipViolation::NotAMember {
                entity: "module",
                owner: Scope::Course,
            })?;

        let mut module = self.modules.remove(index);
        module.unbind_course();
        tracing::debug!(
            "Removed module '{}' from course '{}'",
            module.name(),
            self.name
        );
        Ok(module)
    }

    /// Checked mutable access to a member module.
    pub fn module_mut(&mut self, id: ModuleId) -> Option<ModuleMut<'_>> {
        let sibling_names = self
            .modules
            .iter()
            .filter(|m| m.id() != id)
            .map(|m| m.name().to_string())
            .collect();
        let module = self.modules.iter_mut().find(|m| m.id() == id)?;
        Some(ModuleMut::new(module, sibling_names))
    }

    /// Copies name, description and cost onto `target`. Modules are not copied.
    pub fn copy_shallow_to<'t, T: EditCourse>(&self, target: &'t mut T) -> Result<&'t mut T> {
        target.set_name(&self.name)?;
        target.set_description(&self.description)?;
        target.set_cost(self.cost)?;
        Ok(target)
    }

    fn apply_name(&mut self, value: &str, sibling_names: &[String]) -> Result<()> {
        validate_name("name", value)?;
        if value == self.name {
            return Ok(());
        }
        if sibling_names.iter().any(|name| name == value) {
            return Err(CatalogError::DuplicateName {
                entity: "course",
                scope: Scope::Repository,
                name: value.to_string(),
            });
        }
        self.name = value.to_string();
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.modified = Utc::now().max(self.modified);
    }

    pub(crate) fn bind_repository(&mut self, repository: RepositoryId) {
        self.repository = Some(repository);
    }

    pub(crate) fn unbind_repository(&mut self) {
        self.repository = None;
    }

    /// Fails if two member modules share an id or a name.
    pub(crate) fn check_modules(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut seen = HashSet::new();
        for module in &self.modules {
            if !ids.insert(module.id()) {
                return Err(MembershipViolation::AlreadyMember {
                    entity: "module",
                    owner: Scope::Course,
                }
                .into());
            }
            if !seen.insert(module.name()) {
                return Err(CatalogError::DuplicateName {
                    entity: "module",
                    scope: Scope::Course,
                    name: module.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Points this course and its modules at their owners after being loaded from
    /// storage. Not a value change, so `modified` is kept.
    pub(crate) fn materialize(&mut self, repository: RepositoryId) {
        self.repository = Some(repository);
        for module in &mut self.modules {
            module.bind_course(self.id);
        }
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::with_valid_name(Self::DEFAULT_NAME)
    }
}

impl EditCourse for Course {
    fn set_name(&mut self, value: &str) -> Result<()> {
        Course::set_name(self, value)
    }

    fn set_description(&mut self, value: &str) -> Result<()> {
        Course::set_description(self, value)
    }

    fn set_cost(&mut self, value: Cost) -> Result<()> {
        Course::set_cost(self, value)
    }
}

/// Mutable access to a course that belongs to a repository.
///
/// Renames are checked against the other courses of that repository.
#[derive(Debug)]
pub struct CourseMut<'a> {
    course: &'a mut Course,
    sibling_names: Vec<String>,
}

impl<'a> CourseMut<'a> {
    pub(crate) fn new(course: &'a mut Course, sibling_names: Vec<String>) -> Self {
        Self {
            course,
            sibling_names,
        }
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.course.apply_name(value, &self.sibling_names)
    }

    pub fn set_description(&mut self, value: &str) -> Result<()> {
        self.course.set_description(value)
    }

    pub fn set_cost(&mut self, value: Cost) -> Result<()> {
        self.course.set_cost(value)
    }

    pub fn add_module(&mut self, module: Module) -> Result<ModuleId> {
        self.course.add_module(module)
    }

    pub fn remove_module(&mut self, id: ModuleId) -> Result<Module> {
        self.course.remove_module(id)
    }

    pub fn module_mut(&mut self, id: ModuleId) -> Option<ModuleMut<'_>> {
        self.course.module_mut(id)
    }
}

impl Deref for CourseMut<'_> {
    type Target = Course;

    fn deref(&self) -> &Course {
        &*self.course
    }
}

impl EditCourse for CourseMut<'_> {
    fn set_name(&mut self, value: &str) -> Result<()> {
        CourseMut::set_name(self, value)
    }

    fn set_description(&mut self, value: &str) -> Result<()> {
        CourseMut::set_description(self, value)
    }

    fn set_cost(&mut self, value: Cost) -> Result<()> {
        CourseMut::set_cost(self, value)
    }
}
