use crate::core::extractor::ExtractionPolicy;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "attr-init")]
#[command(about = "Inject schema attribute defaults as field initializers into a generated-class model")]
pub struct CliConfig {
    /// Path to the class model (JSON)
    pub input: Option<String>,

    /// Where to write the updated model; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable the initializer pass
    #[arg(long = "Xattrinit")]
    pub enable: bool,

    /// Where initializer values come from
    #[arg(long, value_enum)]
    pub policy: Option<ExtractionPolicy>,

    /// Pretty-print the output model
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// List the fields that would be processed without changing anything
    #[arg(long)]
    pub dry_run: bool,
}
