//! The `intake` batch command surface.
//!
//! Subcommands: `init` (seed a pattern repository), `analyze`
//! (unlabeled-corpus statistics), `validate` (labeled-corpus accuracy,
//! exit status reflects the verdict), `calibrate` (bounded weight
//! adjustment with backup).

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use intake_batch::analyze::run_analysis;
use intake_batch::calibrate::{read_validation_summary, run_calibration};
use intake_batch::validate::run_validation;
use intake_batch::{BatchConfig, FileTextSource, ValidationConfig};
use intake_core::models::SectionType;
use intake_patterns::defaults::default_repository;
use intake_patterns::PatternRepository;

#[derive(Parser, Debug)]
#[clap(name = "intake")]
#[clap(about = "Section detection and confidence calibration for referral documents")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the built-in default pattern repository
    Init {
        /// Pattern repository path
        #[clap(long, value_name = "FILE", default_value = "patterns.json")]
        patterns: PathBuf,

        /// Overwrite an existing repository
        #[clap(long)]
        force: bool,
    },

    /// Run section detection over an unlabeled corpus
    Analyze {
        /// Corpus directory of extracted document text
        #[clap(long, value_name = "DIR")]
        corpus: PathBuf,

        /// Output directory for per-document and summary artifacts
        #[clap(long, value_name = "DIR")]
        output: PathBuf,

        /// Pattern repository path
        #[clap(long, value_name = "FILE", default_value = "patterns.json")]
        patterns: PathBuf,

        /// Bounded worker pool size
        #[clap(long, default_value = "4")]
        concurrency: usize,

        /// Per-document text extraction timeout (seconds)
        #[clap(long, default_value = "30")]
        timeout: u64,
    },

    /// Validate detection against a labeled corpus
    Validate {
        /// Corpus directory of extracted document text
        #[clap(long, value_name = "DIR")]
        corpus: PathBuf,

        /// Output directory for validation artifacts
        #[clap(long, value_name = "DIR")]
        output: PathBuf,

        /// Pattern repository path
        #[clap(long, value_name = "FILE", default_value = "patterns.json")]
        patterns: PathBuf,

        /// Expected sections (defaults to all known sections)
        #[clap(long, value_name = "SECTION", value_delimiter = ',')]
        expected: Vec<String>,

        /// Cap on the number of validated documents
        #[clap(long, value_name = "N")]
        max_documents: Option<usize>,

        /// Per-document pass threshold (found / expected)
        #[clap(long, default_value = "0.6")]
        document_threshold: f64,

        /// Aggregate pass threshold (passed / validated)
        #[clap(long, default_value = "0.7")]
        aggregate_threshold: f64,

        /// Bounded worker pool size
        #[clap(long, default_value = "4")]
        concurrency: usize,

        /// Per-document text extraction timeout (seconds)
        #[clap(long, default_value = "30")]
        timeout: u64,
    },

    /// Adjust pattern weights from a validation summary
    Calibrate {
        /// Pattern repository path
        #[clap(long, value_name = "FILE", default_value = "patterns.json")]
        patterns: PathBuf,

        /// Validation summary to calibrate from
        #[clap(long, value_name = "FILE")]
        summary: PathBuf,

        /// Directory for timestamped repository backups
        #[clap(long, value_name = "DIR", default_value = "pattern_backups")]
        backup_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> eyre::Result<ExitCode> {
    match cli.command {
        Command::Init { patterns, force } => {
            if patterns.exists() && !force {
                eyre::bail!(
                    "{} already exists (use --force to overwrite)",
                    patterns.display()
                );
            }
            let repository = PatternRepository::new(&patterns, patterns_backup_dir(&patterns));
            repository.save(&default_repository())?;
            println!("wrote default pattern repository to {}", patterns.display());
            Ok(ExitCode::SUCCESS)
        }

        Command::Analyze {
            corpus,
            output,
            patterns,
            concurrency,
            timeout,
        } => {
            let repository = PatternRepository::new(&patterns, patterns_backup_dir(&patterns));
            let state = repository.load()?;

            let mut config = BatchConfig::new(corpus, output);
            config.concurrency = concurrency;
            config.extraction_timeout = Duration::from_secs(timeout);

            let summary = run_analysis(&config, &state, Arc::new(FileTextSource)).await?;

            println!(
                "analyzed {} of {} documents ({} failed)",
                summary.documents.processed, summary.documents.total, summary.documents.failed
            );
            for (section, stats) in &summary.sections {
                println!(
                    "  {:<24} found in {:>3}, missing in {:>3}, confidence {:.2}",
                    section.to_string(),
                    stats.found,
                    stats.not_found,
                    stats.confidence
                );
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Validate {
            corpus,
            output,
            patterns,
            expected,
            max_documents,
            document_threshold,
            aggregate_threshold,
            concurrency,
            timeout,
        } => {
            let repository = PatternRepository::new(&patterns, patterns_backup_dir(&patterns));
            let state = repository.load()?;

            let mut batch = BatchConfig::new(corpus, output);
            batch.concurrency = concurrency;
            batch.extraction_timeout = Duration::from_secs(timeout);

            let mut config = ValidationConfig::new(batch);
            config.document_pass_threshold = document_threshold;
            config.aggregate_pass_threshold = aggregate_threshold;
            config.max_documents = max_documents;
            if !expected.is_empty() {
                config.expected_sections = expected
                    .iter()
                    .map(|s| SectionType::from_str(s))
                    .collect::<Result<Vec<_>, _>>()?;
            }

            let report = run_validation(&config, &state, Arc::new(FileTextSource)).await?;

            println!(
                "validation: {}/{} documents passed — {}",
                report.summary.passed_documents,
                report.summary.total_documents,
                if report.passed { "PASS" } else { "FAIL" }
            );
            for (section, stats) in &report.summary.sections {
                println!(
                    "  {:<24} detection {:>5.1}%  avg confidence {:.2}",
                    section.to_string(),
                    stats.detection_rate * 100.0,
                    stats.avg_confidence
                );
            }

            Ok(if report.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Calibrate {
            patterns,
            summary,
            backup_dir,
        } => {
            let repository = PatternRepository::new(&patterns, backup_dir);
            let summary = read_validation_summary(&summary)?;

            let outcome = run_calibration(&repository, &summary)?;

            for adjustment in &outcome.adjustments {
                println!(
                    "  {:<24} factor {:.2} (detection {:.2}, confidence {:.2})",
                    adjustment.section_type.to_string(),
                    adjustment.factor,
                    adjustment.detection_rate,
                    adjustment.avg_confidence
                );
            }
            println!("previous repository backed up to {}", outcome.backup_path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Default backup directory: `pattern_backups` beside the repository.
fn patterns_backup_dir(patterns: &std::path::Path) -> PathBuf {
    patterns
        .parent()
        .map(|p| p.join("pattern_backups"))
        .unwrap_or_else(|| PathBuf::from("pattern_backups"))
}
