//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for schemashield-ci
#[derive(Parser, Debug)]
#[command(name = "schemashield-ci")]
#[command(author, version, about = "Pair schemas with prompts and run them through SchemaShield CI")]
#[command(long_about = r#"
SchemaShield CI pairs JSON schema files with prompt files by base name and
submits every pair as one batch run to the SchemaShield API.

A case is formed for each base name present in both directories:
  schemas/invoice.json  +  prompts/invoice.txt   ->  case "invoice"

Settings are read from INPUT_* environment variables (as set by CI action
runners), then from the optional --config file, then from defaults:
  INPUT_TOKEN          bearer token for the API
  INPUT_PROVIDER       provider identifier
  INPUT_MODEL          model identifier
  INPUT_SCHEMAS_DIR    schema directory         (default ./schemas)
  INPUT_PROMPTS_DIR    prompt directory         (default ./prompts)
  INPUT_SEEDS          seeds per case           (default 1)
  INPUT_MODE           run mode                 (default validate)
  INPUT_API_URL        API base URL             (default https://schemashield.ai)

Exit status is 0 when the remote run passes and 1 otherwise.
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file (environment variables take precedence)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Build and print the payload without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Show the resolved configuration and exit
    #[arg(long)]
    pub show_config: bool,
}
