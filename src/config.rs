use crate::device::{self, DeviceError};
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "mice_input=info";

#[derive(Clone, Debug)]
pub struct Config {
    pub device:     String,
    pub input_dir:  PathBuf,
    pub verbose:    bool,
    pub log_filter: String,
}

impl Config {
    /// Path of the device node to read, validated against traversal.
    pub fn device_path(&self) -> Result<PathBuf, DeviceError> {
        device::resolve(&self.input_dir, &self.device)
    }

    /// Filter actually installed: `--verbose` raises the default level to debug.
    pub fn effective_log_filter(&self) -> String {
        if self.verbose && self.log_filter == DEFAULT_LOG_FILTER {
            "mice_input=debug".to_string()
        } else {
            self.log_filter.clone()
        }
    }
}

impl From<&crate::cli::Args> for Config {
    fn from(a: &crate::cli::Args) -> Self {
        Self {
            device:     a.device.clone(),
            input_dir:  a.input_dir.clone(),
            verbose:    a.verbose,
            log_filter: a.log_filter.clone(),
        }
    }
}
