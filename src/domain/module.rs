use crate::domain::ports::EditModule;
use crate::domain::{validate_name, CourseId, ModuleId};
use crate::utils::error::{CatalogError, Result, Scope};
use crate::utils::text::normalize_newlines;
use crate::utils::validation::validate_range;
use chrono::{DateTime, Utc};
use std::ops::Deref;

/// A unit of a [`Course`](crate::domain::Course), measured in days.
///
/// A clone is a snapshot: it keeps the id and the course reference, so
/// membership operations treat it as the same module.
#[derive(Debug, Clone)]
pub struct Module {
    id: ModuleId,
    name: String,
    description: String,
    duration: u32,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    course: Option<CourseId>,
}

impl Module {
    pub const DEFAULT_NAME: &'static str = "A New Module";
    pub const DEFAULT_DESCRIPTION: &'static str = "";
    pub const DEFAULT_DURATION: u32 = 1;
    pub const MIN_DURATION: u32 = 1;
    pub const MAX_DURATION: u32 = 365;

    pub fn new(name: &str) -> Result<Self> {
        validate_name("name", name)?;
        Ok(Self::with_valid_name(name))
    }

    fn with_valid_name(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: ModuleId::new(),
            name: name.to_string(),
            description: Self::DEFAULT_DESCRIPTION.to_string(),
            duration: Self::DEFAULT_DURATION,
            created: now,
            modified: now,
            course: None,
        }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Duration in days.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// The course this module belongs to, if any.
    pub fn course(&self) -> Option<CourseId> {
        self.course
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

    pub fn set_duration(&mut self, value: u32) -> Result<()> {
        validate_range("duration", value, Self::MIN_DURATION, Self::MAX_DURATION)?;
        if value == self.duration {
            return Ok(());
        }
        self.duration = value;
        self.touch();
        Ok(())
    }

    /// Copies name, description and duration onto `target` through its own
    /// validated setters. Identity, timestamps and membership are left alone.
    pub fn copy_shallow_to<'t, T: EditModule>(&self, target: &'t mut T) -> Result<&'t mut T> {
        target.set_name(&self.name)?;
        target.set_description(&self.description)?;
        target.set_duration(self.duration)?;
        Ok(target)
    }

    /// `sibling_names` are the names of the other modules in the same course.
    fn apply_name(&mut self, value: &str, sibling_names: &[String]) -> Result<()> {
        validate_name("name", value)?;
        if value == self.name {
            return Ok(());
        }
        if sibling_names.iter().any(|name| name == value) {
            return Err(CatalogError::DuplicateName {
                entity: "module",
                scope: Scope::Course,
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

    pub(crate) fn bind_course(&mut self, course: CourseId) {
        self.course = Some(course);
    }

    pub(crate) fn unbind_course(&mut self) {
        self.course = None;
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::with_valid_name(Self::DEFAULT_NAME)
    }
}

impl EditModule for Module {
    fn set_name(&mut self, value: &str) -> Result<()> {
        Module::set_name(self, value)
    }

    fn set_description(&mut self, value: &str) -> Result<()> {
        Module::set_description(self, value)
    }

    fn set_duration(&mut self, value: u32) -> Result<()> {
        Module::set_duration(self, value)
    }
}

/// Mutable access to a module that belongs to a course.
///
/// Renames are checked against the names of the other modules in that course.
#[derive(Debug)]
pub struct ModuleMut<'a> {
    module: &'a mut Module,
    sibling_names: Vec<String>,
}

impl<'a> ModuleMut<'a> {
    pub(crate) fn new(module: &'a mut Module, sibling_names: Vec<String>) -> Self {
        Self {
            module,
            sibling_names,
        }
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.module.apply_name(value, &self.sibling_names)
    }

    pub fn set_description(&mut self, value: &str) -> Result<()> {
        self.module.set_description(value)
    }

    pub fn set_duration(&mut self, value: u32) -> Result<()> {
        self.module.set_duration(value)
    }
}

impl Deref for ModuleMut<'_> {
    type Target = Module;

    fn deref(&self) -> &Module {
        &*self.module
    }
}

impl EditModule for ModuleMut<'_> {
    fn set_name(&mut self, value: &str) -> Result<()> {
        ModuleMut::set_name(self, value)
    }

    fn set_description(&mut self, value: &str) -> Result<()> {
        ModuleMut::set_description(self, value)
    }

    fn set_duration(&mut self, value: u32) -> Result<()> {
        ModuleMut::set_duration(self, value)
    }
}
