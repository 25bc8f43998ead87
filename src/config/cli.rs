use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Load a course catalog seed and summarize it")]
pub struct CliArgs {
    /// Path to the TOML catalog file
    #[arg(short, long, default_value = "catalog.toml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only validate the catalog, print nothing on success
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["course-catalog"]);
        assert_eq!(args.config, PathBuf::from("catalog.toml"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.verbose);
        assert!(!args.check);
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::parse_from([
            "course-catalog",
            "--config",
            "seed.toml",
            "--format",
            "json",
            "-v",
            "--check",
        ]);
        assert_eq!(args.config, PathBuf::from("seed.toml"));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
        assert!(args.check);
    }
}
