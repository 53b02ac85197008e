//! Command scheduling and debounce.
//!
//! UI events arrive as explicit [`Command`]s consumed by a single-threaded
//! loop, not as ad hoc callbacks: source loads apply immediately (image
//! decode completion is the one entry point allowed to replace the source),
//! while render requests pass through a trailing-edge debounce window so a
//! slider drag produces one render, not dozens.
//!
//! All timing is explicit (`submit` and `tick` take `Instant`s), so the
//! scheduler can be driven and tested without sleeping.

use std::time::{Duration, Instant};

use mangrove_dither::Raster;

use crate::error::RenderError;
use crate::models::config::StudioConfig;
use crate::models::params::ParameterSet;

use super::pipeline::{RenderOutput, RenderSession};

/// An event for the scheduler loop.
#[derive(Debug, Clone)]
pub enum Command {
    /// A decoded source image is ready.
    SourceLoaded(Raster),
    /// Parameters changed; render once the debounce window closes.
    RenderRequested(ParameterSet),
}

/// Trailing-edge debouncer: only the latest submission survives, and it
/// fires once the window has elapsed with no newer submission.
pub struct Debouncer {
    window: Duration,
    pending: Option<ParameterSet>,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            deadline: None,
        }
    }

    /// Replace any pending request and restart the window.
    pub fn submit(&mut self, params: ParameterSet, now: Instant) {
        self.pending = Some(params);
        self.deadline = Some(now + self.window);
    }

    /// Take the pending request if its window has closed.
    pub fn poll(&mut self, now: Instant) -> Option<ParameterSet> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Whether nothing is waiting.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

/// Single-threaded scheduler owning the session and the debounce stage.
pub struct RenderScheduler {
    session: RenderSession,
    debouncer: Debouncer,
}

impl RenderScheduler {
    pub fn new(config: StudioConfig) -> Self {
        let debouncer = Debouncer::new(config.debounce_window());
        Self {
            session: RenderSession::new(config),
            debouncer,
        }
    }

    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    /// Feed one command into the loop.
    pub fn submit(&mut self, command: Command, now: Instant) {
        match command {
            Command::SourceLoaded(raster) => self.session.load_source(raster),
            Command::RenderRequested(params) => self.debouncer.submit(params, now),
        }
    }

    /// Advance the loop: runs at most one render, and only when a request's
    /// debounce window has closed. A render rejected by the busy guard is
    /// re-queued behind a fresh window rather than lost.
    pub fn tick(&mut self, now: Instant) -> Option<Result<RenderOutput, RenderError>> {
        let params = self.debouncer.poll(now)?;
        match self.session.render(&params) {
            Err(RenderError::Busy) => {
                self.debouncer.submit(params, now);
                None
            }
            outcome => Some(outcome),
        }
    }
}
