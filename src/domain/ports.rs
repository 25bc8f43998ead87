use crate::domain::{Cost, Course, CourseId};
use crate::utils::error::Result;

/// Validated setters shared by a free [`Module`](crate::domain::Module) and a
/// [`ModuleMut`](crate::domain::ModuleMut) handle onto a course member.
pub trait EditModule {
    fn set_name(&mut self, value: &str) -> Result<()>;
    fn set_description(&mut self, value: &str) -> Result<()>;
    fn set_duration(&mut self, value: u32) -> Result<()>;
}

/// Validated setters shared by a free [`Course`] and a
/// [`CourseMut`](crate::domain::CourseMut) handle onto a repository member.
pub trait EditCourse {
    fn set_name(&mut self, value: &str) -> Result<()>;
    fn set_description(&mut self, value: &str) -> Result<()>;
    fn set_cost(&mut self, value: Cost) -> Result<()>;
}

/// Physical storage behind a repository.
///
/// The hooks only store and fetch; membership and uniqueness rules are applied by
/// the repository before a hook runs. A durable implementation performs its write
/// inside `insert`/`remove` and reports failure as a storage error.
pub trait CourseStore {
    fn courses(&self) -> Vec<&Course>;
    fn courses_mut(&mut self) -> Vec<&mut Course>;
    fn insert(&mut self, course: Course) -> Result<()>;
    fn remove(&mut self, id: CourseId) -> Result<Course>;
}

/// The owning collection of courses.
pub trait CourseRepository {
    /// Current members, read-only.
    fn all(&self) -> Vec<&Course>;

    /// Takes ownership of `course` and returns its id.
    ///
    /// Fails if the course already belongs to a repository or its name is taken.
    fn add(&mut self, course: Course) -> Result<CourseId>;

    /// Hands the course back with its repository reference cleared.
    fn remove(&mut self, id: CourseId) -> Result<Course>;
}
