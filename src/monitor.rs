// The read-decode-print loop. Runs until the source or the sink fails.

use crate::event::{read_event, MouseEvent, ReadError};
use std::convert::Infallible;
use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::trace;

/// Why the event loop stopped. There is no successful exit.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("failed to write event line: {0}")]
    Write(#[source] io::Error),
}

/// Echoes events from a source to a sink, counting the lines printed.
///
/// The counter is shared so the signal thread can report progress
/// while the loop is parked in a blocking read.
#[derive(Debug, Default)]
pub struct Monitor {
    printed: Arc<AtomicU64>,
}

impl Monitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the number of event lines written so far.
    pub fn printed_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.printed)
    }

    pub fn printed(&self) -> u64 {
        self.printed.load(Ordering::Relaxed)
    }

    /// Reads records forever, printing one line per record.
    ///
    /// Every line is flushed right away so the output stays live when
    /// stdout is a pipe. Returns only when reading or writing fails.
    pub fn run(
        &self,
        reader: &mut impl Read,
        writer: &mut impl Write,
    ) -> Result<Infallible, RunError> {
        loop {
            let event = read_event(reader)?;
            log_event(&event);
            writeln!(writer, "{event}").map_err(RunError::Write)?;
            writer.flush().map_err(RunError::Write)?;
            self.printed.fetch_add(1, Ordering::Relaxed);
        }
    }
}

fn log_event(event: &MouseEvent) {
    trace!(
        buttons = ?event.buttons(),
        dx = event.delta_x,
        dy = event.delta_y,
        "Mouse event"
    );
}
