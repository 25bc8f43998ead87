use anyhow::Context;
use clap::Parser;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{CatalogConfig, CatalogError, CatalogSummary, CliArgs, ErrorKind, OutputFormat};

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = run(&args) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let config = CatalogConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config.display()))?;

    logger::init_logger(args.verbose, config.log_level(), config.log_format());
    tracing::info!("Loaded catalog from {}", args.config.display());
    if args.verbose {
        tracing::debug!("Catalog config: {:?}", config);
    }

    if args.check {
        config.validate()?;
        tracing::info!("✅ Catalog is valid ({} courses)", config.courses.len());
        return Ok(());
    }

    let repository = config.build_repository()?;
    let summary = CatalogSummary::from_repository(&repository)?;
    tracing::info!("Built catalog with {} courses", summary.total_courses);

    match args.format {
        OutputFormat::Text => println!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", summary.to_json()?),
    }

    Ok(())
}

/// 1 for unexpected failures, 2 for rejected catalog contents, 3 for unreadable
/// configuration.
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CatalogError>().map(CatalogError::kind) {
        Some(ErrorKind::Config) => 3,
        Some(
            ErrorKind::NullArgument
            | ErrorKind::InvalidRange
            | ErrorKind::DuplicateName
            | ErrorKind::InvalidMembership,
        ) => 2,
        _ => 1,
    }
}
