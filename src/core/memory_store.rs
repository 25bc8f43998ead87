use crate::core::{Course, CourseId, CourseStore};
use crate::utils::error::{CatalogError, Result};

/// Keeps courses in a `Vec`, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    courses: Vec<Course>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds courses, e.g. handed over from another
    /// repository. Open it with [`Repository::open`](crate::Repository::open).
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl CourseStore for InMemoryStore {
    fn courses(&self) -> Vec<&Course> {
        self.courses.iter().collect()
    }

    fn courses_mut(&mut self) -> Vec<&mut Course> {
        self.courses.iter_mut().collect()
    }

    fn insert(&mut self, course: Course) -> Result<()> {
        self.courses.push(course);
        Ok(())
    }

    fn remove(&mut self, id: CourseId) -> Result<Course> {
        let index = self
            .courses
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| CatalogError::StorageError {
                message: format!("course {} is not stored", id),
            })?;
        Ok(self.courses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut store = InMemoryStore::new();
        store.insert(Course::new("AA").unwrap()).unwrap();
        store.insert(Course::new("BB").unwrap()).unwrap();

        let names: Vec<&str> = store.courses().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["AA", "BB"]);
    }

    #[test]
    fn test_remove_unknown_course_fails() {
        let mut store = InMemoryStore::new();
        assert!(store.remove(CourseId::new()).is_err());
    }
}
