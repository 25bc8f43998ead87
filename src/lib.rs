pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, OutputFormat};

pub use crate::config::CatalogConfig;
pub use crate::core::{memory_store::InMemoryStore, repository::Repository, summary::CatalogSummary};
pub use domain::ports::{CourseRepository, CourseStore, EditCourse, EditModule};
pub use domain::{Cost, Course, CourseId, CourseMut, Module, ModuleId, ModuleMut, RepositoryId};
pub use utils::error::{CatalogError, ErrorKind, MembershipViolation, Result, Scope};
