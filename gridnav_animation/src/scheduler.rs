// Copyright 2025 the Gridnav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling abstraction and a manually driven implementation.

/// Handle for one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickToken(pub u64);

/// Source of time and per-frame callbacks.
///
/// Hosts implement this over their display-frame mechanism. When a scheduled
/// tick fires, the host calls
/// [`AnimationController::tick`](crate::AnimationController::tick) with its
/// token.
pub trait FrameScheduler {
    /// Current time in milliseconds. Only differences are used.
    fn now(&self) -> f64;

    /// Requests one tick on the next frame.
    fn schedule_next_tick(&mut self) -> TickToken;

    /// Cancels a tick that has not fired yet. Unknown tokens are ignored.
    fn cancel_tick(&mut self, token: TickToken);
}

/// A [`FrameScheduler`] driven explicitly by the caller.
///
/// Time only moves through [`ManualScheduler::advance`] /
/// [`ManualScheduler::set_now`], and pending ticks are handed out by
/// [`ManualScheduler::take_pending`].
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: f64,
    next_token: u64,
    pending: Vec<TickToken>,
}

impl ManualScheduler {
    /// Creates a scheduler at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `ms`.
    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }

    /// Sets the current time.
    pub fn set_now(&mut self, now: f64) {
        self.now = now;
    }

    /// Number of ticks scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if `token` is still pending.
    #[must_use]
    pub fn is_pending(&self, token: TickToken) -> bool {
        self.pending.contains(&token)
    }

    /// Fires every pending tick, returning their tokens in scheduling order.
    pub fn take_pending(&mut self) -> Vec<TickToken> {
        core::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now
    }

    fn schedule_next_tick(&mut self) -> TickToken {
        let token = TickToken(self.next_token);
        self.next_token += 1;
        self.pending.push(token);
        token
    }

    fn cancel_tick(&mut self, token: TickToken) {
        self.pending.retain(|t| *t != token);
    }
}
