use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use algebra_laws::law::CheckConfig;
use algebra_laws::runner::{ReportFormat, builtin_suites, render_report, run_suites};

#[derive(Debug, Parser)]
#[command(name = "lawcheck")]
#[command(about = "Run algebraic law suites against the built-in instances")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Execute every registered suite and render a report.
    Run {
        /// Samples drawn per law case.
        #[arg(long, default_value_t = 100)]
        samples: u32,
        /// Seed for the sample stream; defaults to the crate seed.
        #[arg(long)]
        seed: Option<u64>,
        /// Output format.
        #[arg(long, value_enum, default_value = "md")]
        format: OutputFormat,
    },
    /// List registered suites and their laws.
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Markdown
    Md,
    /// JSON
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Md => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            samples,
            seed,
            format,
        } => {
            let mut config = CheckConfig::default().with_samples(samples);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let report = run_suites(&builtin_suites(), &config);
            println!("{}", render_report(&report, format.into()));
            if !report.summary.is_clean() {
                std::process::exit(1);
            }
        }
        Command::List => {
            for suite in builtin_suites() {
                println!("{}", suite.subject());
                for property in suite.properties() {
                    println!("  {}", property.name());
                }
            }
        }
    }
    Ok(())
}
