pub mod memory_store;
pub mod repository;
pub mod summary;

pub use crate::domain::ports::{CourseRepository, CourseStore, EditCourse, EditModule};
pub use crate::domain::{Cost, Course, CourseId, CourseMut, Module, ModuleId, ModuleMut, RepositoryId};
pub use crate::utils::error::Result;
pub use repository::Repository;
