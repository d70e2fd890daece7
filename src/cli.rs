use crate::config::DEFAULT_LOG_FILTER;
use crate::device::{DEFAULT_DEVICE, DEFAULT_INPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Echo mouse device movement and button events.
/// Helps diagnose input devices posing as mice, like trackballs and rotary spinners.
/// Reads 3-byte mouse records from the device node and prints one line per record to stdout.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Device node name, relative to the input directory (e.g. `mice`, `mouse0`).
    #[arg(default_value = DEFAULT_DEVICE, value_name = "DEVICE")]
    pub device: String,

    /// Directory holding the input device nodes.
    #[arg(long, env = "MICE_INPUT_DIR", default_value = DEFAULT_INPUT_DIR, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Enable verbose logging to stderr (log targets and debug-level messages).
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Log filter directives for stderr output (tracing EnvFilter syntax).
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER, value_name = "FILTER")]
    pub log_filter: String,
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
