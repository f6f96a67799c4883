//! Fixed-interval driver for a session
//!
//! Input is queued as it arrives and applied in order right before the next
//! tick, so commands and ticks never interleave.

use std::collections::VecDeque;
use std::time::Duration;

use super::render::{RenderSink, RenderView};
use super::session::{Session, TickReport};
use super::types::Command;

/// Owns a session and the commands waiting for the next tick
pub struct GameLoop {
    pub session: Session,
    commands: VecDeque<Command>,
}

impl GameLoop {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            commands: VecDeque::new(),
        }
    }

    /// Queue a command for the next step
    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    pub fn tick_interval(&self) -> Duration {
        self.session.config.tick_interval
    }

    /// Apply queued commands, advance one tick, then redraw once
    pub fn step<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> TickReport {
        while let Some(command) = self.commands.pop_front() {
            self.session.apply_command(command);
        }
        let report = self.session.tick();
        sink.present(&RenderView::capture(&self.session));
        report
    }

    /// Run `ticks` steps back to back
    pub fn run<S: RenderSink + ?Sized>(&mut self, ticks: u32, sink: &mut S) {
        for _ in 0..ticks {
            self.step(sink);
        }
    }
}
