// Module declarations for the library crate.

pub mod cli;
pub mod config;
pub mod device;
pub mod event;
pub mod monitor;
pub mod telemetry;
pub mod util;

pub use event::{read_event, MouseEvent, ReadError};
pub use monitor::{Monitor, RunError};
