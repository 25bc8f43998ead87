use std::io::Write;

use course_catalog::utils::validation::Validate;
use course_catalog::{CatalogConfig, CatalogSummary, Cost, CourseRepository, ErrorKind};
use tempfile::NamedTempFile;

const CATALOG: &str = r#"
[[courses]]
name = "Intro to Rust"
cost = "99.50"

[[courses.modules]]
name = "Ownership"
duration = 3

[[courses.modules]]
name = "Borrowing"
duration = 2

[[courses]]
name = "Async Rust"
cost = 150
"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_seed_file_builds_repository() {
    let file = write_config(CATALOG);
    let config = CatalogConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let repo = config.build_repository().unwrap();
    let courses = repo.all();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].cost(), Cost::from_cents(9950));
    assert_eq!(courses[0].duration(), 5);
    assert_eq!(courses[1].cost(), Cost::from_whole(150));
    assert!(courses.iter().all(|c| c.repository() == Some(repo.id())));
}

#[test]
fn test_summary_of_seeded_repository() {
    let config = CatalogConfig::from_toml_str(CATALOG).unwrap();
    let repo = config.build_repository().unwrap();
    let summary = CatalogSummary::from_repository(&repo).unwrap();

    assert_eq!(summary.total_courses, 2);
    assert_eq!(summary.total_modules, 2);
    assert_eq!(summary.total_duration_days, 5);
    assert_eq!(summary.courses[0].slug, "intro-to-rust");
    assert_eq!(summary.courses[0].cost, "99.50");
    assert_eq!(summary.courses[0].cost_cents, 9950);

    let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
    assert_eq!(json["courses"][1]["name"], "Async Rust");
}

#[test]
fn test_seed_with_three_decimal_cost_is_rejected() {
    let config = CatalogConfig::from_toml_str(
        r#"
[[courses]]
name = "Intro to Rust"
cost = "1.125"
"#,
    )
    .unwrap();
    assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::InvalidRange);
}

#[test]
fn test_seed_with_out_of_range_duration_is_rejected() {
    let config = CatalogConfig::from_toml_str(
        r#"
[[courses]]
name = "Intro to Rust"

[[courses.modules]]
name = "Forever"
duration = 366
"#,
    )
    .unwrap();
    assert_eq!(
        config.build_repository().unwrap_err().kind(),
        ErrorKind::InvalidRange
    );
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_config("[[courses]\nname = ");
    let err = CatalogConfig::from_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}
