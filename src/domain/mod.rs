// Domain layer: entities, value types and ports (interfaces).

pub mod cost;
pub mod course;
pub mod ids;
pub mod module;
pub mod ports;

pub use cost::Cost;
pub use course::{Course, CourseMut};
pub use ids::{CourseId, ModuleId, RepositoryId};
pub use module::{Module, ModuleMut};

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_length, validate_no_leading_or_trailing_whitespace, validate_not_empty,
    validate_not_whitespace_only,
};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;

/// Rules shared by course and module names.
pub(crate) fn validate_name(field_name: &str, value: &str) -> Result<()> {
    validate_not_empty(field_name, value)?;
    validate_not_whitespace_only(field_name, value)?;
    validate_no_leading_or_trailing_whitespace(field_name, value)?;
    validate_length(field_name, value, NAME_MIN_LENGTH, NAME_MAX_LENGTH)
}
