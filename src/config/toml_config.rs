use crate::core::{Cost, Course, CourseRepository, Module, Repository};
use crate::utils::error::{CatalogError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_required, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A catalog seed file plus logging settings.
///
/// ```toml
/// [logging]
/// level = "debug"
/// format = "json"
///
/// [[courses]]
/// name = "Intro to Rust"
/// cost = "250.00"
///
/// [[courses.modules]]
/// name = "Ownership"
/// duration = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseSeed {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<CostValue>,
    #[serde(default)]
    pub modules: Vec<ModuleSeed>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleSeed {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u32>,
}

/// Cost as written in the file: `"99.50"` or a whole number such as `250`.
///
/// TOML floats are read so they can be rejected with a readable message;
/// binary floating point cannot hold every cent value exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostValue {
    Whole(i64),
    Text(String),
    Float(f64),
}

impl CostValue {
    pub fn to_cost(&self) -> Result<Cost> {
        match self {
            CostValue::Whole(units) => Ok(Cost::from_whole(*units)),
            CostValue::Text(text) => Cost::parse(text),
            CostValue::Float(value) => Err(CatalogError::ConfigError {
                message: format!(
                    "cost {} must be quoted (\"{}\") or a whole number",
                    value, value
                ),
            }),
        }
    }
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Parses `content`, resolving `${VAR}` placeholders through `lookup`.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the looked-up value. Unknown variables are left
    /// as written.
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format
    }

    /// Builds an in-memory repository from the seed through the validated
    /// constructors and membership operations.
    pub fn build_repository(&self) -> Result<Repository> {
        let mut repository = Repository::new();
        for (index, seed) in self.courses.iter().enumerate() {
            let course = seed.build(index)?;
            repository.add(course)?;
        }
        tracing::debug!(
            "Built repository {} from {} seeded courses",
            repository.id(),
            self.courses.len()
        );
        Ok(repository)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(CatalogError::ConfigError {
                    message: format!(
                        "unsupported logging.level '{}'. Valid levels: {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ),
                });
            }
        }

        // A dry build runs exactly the rules the real one does.
        self.build_repository().map(|_| ())
    }
}

impl CourseSeed {
    pub fn build(&self, index: usize) -> Result<Course> {
        let name = validate_required(&format!("courses[{}].name", index), &self.name)?;
        let mut course = Course::new(name)?;
        if let Some(description) = &self.description {
            course.set_description(description)?;
        }
        if let Some(cost) = &self.cost {
            course.set_cost(cost.to_cost()?)?;
        }
        for (module_index, seed) in self.modules.iter().enumerate() {
            course.add_module(seed.build(index, module_index)?)?;
        }
        Ok(course)
    }
}

impl ModuleSeed {
    pub fn build(&self, course_index: usize, index: usize) -> Result<Module> {
        let name = validate_required(
            &format!("courses[{}].modules[{}].name", course_index, index),
            &self.name,
        )?;
        let mut module = Module::new(name)?;
        if let Some(description) = &self.description {
            module.set_description(description)?;
        }
        if let Some(duration) = self.duration {
            module.set_duration(duration)?;
        }
        Ok(module)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
