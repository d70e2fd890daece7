// Main application entry point.
// Parses arguments, sets up logging and signal handling, opens the device node
// and runs the event loop until it fails.

use mice_input::config::Config;
use mice_input::monitor::{Monitor, RunError};
use mice_input::{cli, device, telemetry, util};
use signal_hook::consts::signal::*;
use signal_hook::iterator::Signals;
use std::io;
use std::process::exit;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

// Exit codes. There is no zero-status path: the loop only ends on failure.
const EXIT_DEVICE: i32 = 2;
const EXIT_READ: i32 = 3;
const EXIT_WRITE: i32 = 4;

/// Spawns a thread that exits the process on SIGINT/SIGTERM/SIGQUIT,
/// logging how many events were printed first. The event loop itself
/// stays single-threaded and may be blocked in `read` at that moment.
fn install_signal_handler(printed: Arc<AtomicU64>, started: Instant) -> io::Result<()> {
    let mut signals = Signals::new([SIGTERM, SIGINT, SIGQUIT])?;
    std::thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            info!(
                signal = sig,
                events = printed.load(Ordering::Relaxed),
                runtime = %util::format_duration(started.elapsed()),
                "Received signal, exiting"
            );
            exit(128 + sig); // Standard exit code for signals
        }
    });
    Ok(())
}

fn main() {
    let started = Instant::now();
    let args = cli::parse_args();
    let cfg = Config::from(&args);
    telemetry::init_tracing(&cfg);

    let path = match cfg.device_path() {
        Ok(path) => path,
        Err(e) => {
            error!(error = %e, "Rejecting device identifier");
            exit(EXIT_DEVICE);
        }
    };

    let mut source = match device::open(&path) {
        Ok(file) => file,
        Err(e) => {
            error!(error = %e, "Unable to open input device (reading device nodes usually requires root or the input group)");
            exit(EXIT_DEVICE);
        }
    };

    let monitor = Monitor::new();
    if let Err(e) = install_signal_handler(monitor.printed_counter(), started) {
        warn!(error = %e, "Failed to install signal handler; interrupts use the default action");
    }

    info!(path = %path.display(), "Reading mouse events");
    let mut stdout = io::stdout().lock();

    let err = match monitor.run(&mut source, &mut stdout) {
        Ok(never) => match never {},
        Err(e) => e,
    };

    let runtime = util::format_duration(started.elapsed());
    match err {
        RunError::Read(e) => {
            error!(
                error = %e,
                kind = ?e.kind(),
                eof = e.is_eof(),
                events = monitor.printed(),
                runtime = %runtime,
                "Error reading input event"
            );
            exit(EXIT_READ);
        }
        RunError::Write(e) => {
            error!(error = %e, events = monitor.printed(), runtime = %runtime, "Error writing output line");
            exit(EXIT_WRITE);
        }
    }
}
