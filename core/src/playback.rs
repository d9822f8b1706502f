//! Canned build log playback
//!
//! The deployments view does not stream logs from a real build. It replays
//! one of two fixed scripts, one line at a time, into an append-only buffer
//! the view snapshots on each render.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::debug;

use crate::models::build_log::{LogLine, LogMode, LogSeverity};
use crate::timer::TimerHandle;

/// Playback options
#[derive(Debug, Clone)]
pub struct PlaybackOptions {
    /// Spacing between emitted log lines
    pub interval: Duration,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1200),
        }
    }
}

const GIT_SCRIPT: &[(&str, &str, LogSeverity)] = &[
    ("14:20:01", "Cloning repository from GitHub...", LogSeverity::Info),
    ("14:20:05", "Validating workflow configuration...", LogSeverity::Info),
    ("14:20:08", "Installing dependencies (cached)...", LogSeverity::Info),
    ("14:20:15", "Generating static optimized chunks...", LogSeverity::Info),
    ("14:20:25", "Build completed. Bundle: 1.4 MB", LogSeverity::Success),
    ("14:20:30", "Deploying to edge nodes (24 regions)...", LogSeverity::Info),
];

const MANUAL_SCRIPT: &[(&str, &str, LogSeverity)] = &[
    ("14:20:01", "Receiving build artifacts...", LogSeverity::Info),
    ("14:20:03", "Analyzing directory structure...", LogSeverity::Info),
    ("14:20:05", "Checksum verification passed.", LogSeverity::Success),
    ("14:20:07", "Compressing assets for CDN edge...", LogSeverity::Info),
    ("14:20:10", "Propagating to 24 regions...", LogSeverity::Info),
    ("14:20:12", "Deployment live!", LogSeverity::Success),
];

/// The fixed script for a playback mode
pub fn script(mode: LogMode) -> Vec<LogLine> {
    let entries = match mode {
        LogMode::Git => GIT_SCRIPT,
        LogMode::Manual => MANUAL_SCRIPT,
    };
    entries
        .iter()
        .map(|(time, msg, severity)| LogLine::new(*time, *msg, *severity))
        .collect()
}

struct BufferInner {
    generation: u64,
    lines: Vec<LogLine>,
}

/// Append-only log buffer, reset at the start of each playback run.
///
/// Every run gets a fresh generation; appends stamped with a stale
/// generation are dropped, so a run that was replaced mid-flight can never
/// leak lines into its successor's output.
pub struct LogBuffer {
    inner: RwLock<BufferInner>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BufferInner {
                generation: 0,
                lines: Vec::new(),
            }),
        }
    }

    /// Snapshot of the emitted lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.lines.clone()
    }

    /// Number of emitted lines
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the buffer and start a new generation
    fn begin(&self) -> u64 {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.generation += 1;
        inner.lines.clear();
        inner.generation
    }

    /// Append `line` only if `generation` is still current
    fn append_if(&self, generation: u64, line: LogLine) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if inner.generation != generation {
            debug!("Dropping stale log line: {}", line.message);
            return false;
        }
        inner.lines.push(line);
        true
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct PlayState {
    current: Option<AbortHandle>,
    script_len: usize,
}

/// Receipt for a started playback run
#[derive(Debug)]
pub struct PlaybackTicket {
    /// Mode the run replays
    pub mode: LogMode,

    /// Handle to the emission task
    pub timer: TimerHandle,
}

/// Plays canned build scripts into a [`LogBuffer`].
///
/// Starting a new run aborts whatever the previous run had not yet
/// delivered; two scripts never interleave.
pub struct LogSequencer {
    buffer: Arc<LogBuffer>,
    options: PlaybackOptions,
    state: Mutex<PlayState>,
}

impl LogSequencer {
    pub fn new(options: PlaybackOptions) -> Self {
        Self {
            buffer: Arc::new(LogBuffer::new()),
            options,
            state: Mutex::new(PlayState::default()),
        }
    }

    /// The buffer this sequencer emits into
    pub fn buffer(&self) -> Arc<LogBuffer> {
        self.buffer.clone()
    }

    /// Whether a run is still emitting lines.
    ///
    /// The view shows its animated "in progress" indicator while this is
    /// true.
    pub fn is_replaying(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.script_len > 0 && self.buffer.len() < state.script_len
    }

    /// Start replaying the script for `mode`.
    ///
    /// Resets the buffer, cancels any unfinished prior run, then emits the
    /// script's entries in order: the first immediately, each subsequent
    /// one after `options.interval`. Must be called within a tokio runtime.
    pub fn play(&self, mode: LogMode) -> PlaybackTicket {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(previous) = state.current.take() {
            previous.abort();
        }

        let generation = self.buffer.begin();
        let lines = script(mode);
        state.script_len = lines.len();

        debug!("Replaying {:?} build script ({} lines)", mode, lines.len());

        let buffer = self.buffer.clone();
        let interval = self.options.interval;
        let handle = tokio::spawn(async move {
            for (i, line) in lines.into_iter().enumerate() {
                if i > 0 {
                    tokio::time::sleep(interval).await;
                }
                if !buffer.append_if(generation, line) {
                    return;
                }
            }
        });

        state.current = Some(handle.abort_handle());

        PlaybackTicket {
            mode,
            timer: TimerHandle::new(handle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_have_six_entries() {
        assert_eq!(script(LogMode::Git).len(), 6);
        assert_eq!(script(LogMode::Manual).len(), 6);
    }

    #[test]
    fn test_stale_generation_append_dropped() {
        let buffer = LogBuffer::new();
        let old = buffer.begin();
        let current = buffer.begin();

        assert!(!buffer.append_if(old, LogLine::new("14:20:01", "stale", LogSeverity::Info)));
        assert!(buffer.append_if(current, LogLine::new("14:20:01", "fresh", LogSeverity::Info)));

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "fresh");
    }
}
