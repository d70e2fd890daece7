//! Common helper functions for tests.
use std::fs;
use std::path::{Path, PathBuf};

// --- Records used across the test suites ---
pub const RIGHT_5: [u8; 3] = [0x00, 0x05, 0x00];
pub const LEFT_BUTTON_DOWN_LEFT: [u8; 3] = [0x01, 0xFB, 0x03];
pub const MIDDLE_BUTTON_UP: [u8; 3] = [0x04, 0x00, 0xFE];

/// Builds a raw record from its button mask and deltas.
pub fn record(buttons: u8, dx: i8, dy: i8) -> [u8; 3] {
    [buttons, dx as u8, dy as u8]
}

/// Concatenates records into the byte stream a device node would deliver.
pub fn records_to_bytes(records: &[[u8; 3]]) -> Vec<u8> {
    records.iter().flatten().copied().collect()
}

/// Creates a fresh directory standing in for `/dev/input` under `base`.
/// `base` is normally `env!("CARGO_TARGET_TMPDIR")` of the calling test crate.
pub fn device_dir(base: &Path, test_name: &str) -> PathBuf {
    let dir = base.join("mice-input-tests").join(test_name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fake input directory");
    dir
}

/// Writes `bytes` as a device node named `device` inside `dir`.
pub fn write_device(dir: &Path, device: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(device);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create device subdirectory");
    }
    fs::write(&path, bytes).expect("Failed to write fake device node");
    path
}
