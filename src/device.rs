//! Resolution of device identifiers to device node paths.

use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Aggregate node the kernel exposes for all mice.
pub const DEFAULT_DEVICE: &str = "mice";

/// Base directory for input device nodes.
pub const DEFAULT_INPUT_DIR: &str = "/dev/input";

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("invalid device identifier {0:?}: must be a relative path below the input directory")]
    InvalidIdentifier(String),
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Joins `device` onto `input_dir`.
///
/// Identifiers may name subdirectories (`by-id/...`) but must stay below
/// `input_dir`: absolute paths, `.` and `..` components are rejected.
pub fn resolve(input_dir: &Path, device: &str) -> Result<PathBuf, DeviceError> {
    let rel = Path::new(device);
    let mut components = rel.components().peekable();
    if components.peek().is_none() {
        return Err(DeviceError::InvalidIdentifier(device.to_owned()));
    }
    if !components.all(|c| matches!(c, Component::Normal(_))) {
        return Err(DeviceError::InvalidIdentifier(device.to_owned()));
    }
    Ok(input_dir.join(rel))
}

/// Opens a device node for reading.
pub fn open(path: &Path) -> Result<File, DeviceError> {
    File::open(path).map_err(|source| DeviceError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> &'static Path {
        Path::new(DEFAULT_INPUT_DIR)
    }

    #[test]
    fn default_device_resolves_under_dev_input() {
        let path = resolve(dir(), DEFAULT_DEVICE).unwrap();
        assert_eq!(path, PathBuf::from("/dev/input/mice"));
    }

    #[test]
    fn subdirectories_are_allowed() {
        let path = resolve(dir(), "by-id/usb-Logitech-event-mouse").unwrap();
        assert_eq!(path, PathBuf::from("/dev/input/by-id/usb-Logitech-event-mouse"));
    }

    #[test]
    fn traversal_is_rejected() {
        for bad in ["../../etc/passwd", "by-id/../../etc/shadow", "..", "./mice", "/etc/passwd", ""] {
            assert!(
                matches!(resolve(dir(), bad), Err(DeviceError::InvalidIdentifier(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn open_missing_node_reports_path() {
        let path = Path::new("/nonexistent-mice-input-dir/mouse0");
        let err = open(path).unwrap_err();
        match err {
            DeviceError::Open { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
