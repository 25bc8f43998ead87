use crate::core::{Course, CourseRepository};
use crate::utils::error::Result;
use crate::utils::text::to_url_slug;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub duration_days: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub cost: String,
    pub cost_cents: i64,
    pub duration_days: u32,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub modules: Vec<ModuleSummary>,
}

/// Read-only view of a repository for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub total_courses: usize,
    pub total_modules: usize,
    pub total_duration_days: u32,
    pub courses: Vec<CourseSummary>,
}

impl CourseSummary {
    pub fn from_course(course: &Course) -> Result<Self> {
        Ok(Self {
            id: course.id().to_string(),
            name: course.name().to_string(),
            slug: to_url_slug(course.name())?,
            description: course.description().to_string(),
            cost: course.cost().to_string(),
            cost_cents: course.cost().cents(),
            duration_days: course.duration(),
            created: course.created(),
            modified: course.modified(),
            modules: course
                .modules()
                .iter()
                .map(|m| ModuleSummary {
                    name: m.name().to_string(),
                    duration_days: m.duration(),
                })
                .collect(),
        })
    }
}

impl CatalogSummary {
    pub fn from_repository<R: CourseRepository>(repository: &R) -> Result<Self> {
        let courses = repository
            .all()
            .into_iter()
            .map(CourseSummary::from_course)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            total_courses: courses.len(),
            total_modules: courses.iter().map(|c| c.modules.len()).sum(),
            total_duration_days: courses.iter().map(|c| c.duration_days).sum(),
            courses,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for course in &self.courses {
            let _ = writeln!(
                out,
                "{} [{}] cost {} / {} days",
                course.name, course.slug, course.cost, course.duration_days
            );
            for module in &course.modules {
                let _ = writeln!(out, "  - {} ({} days)", module.name, module.duration_days);
            }
        }
        let _ = write!(
            out,
            "{} courses, {} modules, {} days in total",
            self.total_courses, self.total_modules, self.total_duration_days
        );
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
