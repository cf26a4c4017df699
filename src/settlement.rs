use rand::Rng;

use crate::records::{Tip, TipOutcome};

/// Chance that the demo resolver settles a still-pending tip at all.
pub const RESOLVE_CHANCE: f64 = 0.70;
/// Demo win rate for tips settled in the current reporting window.
pub const WIN_RATE_CURRENT: f64 = 0.65;
/// Demo win rate for tips settled in the previous window.
pub const WIN_RATE_PREVIOUS: f64 = 0.60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Current,
    Previous,
}

/// Final outcome of a tip for accuracy purposes. Real settlement results
/// arrive through the recorded outcome; the demo resolver only exists so the
/// dashboard shows plausible numbers before that feed is wired in.
pub trait Settlement {
    fn settle(&mut self, tip: &Tip, window: WindowKind) -> TipOutcome;
}

/// Production model: the recorded outcome is the outcome. Deterministic, so
/// repeated aggregations over the same records agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recorded;

impl Settlement for Recorded {
    fn settle(&mut self, tip: &Tip, _window: WindowKind) -> TipOutcome {
        tip.outcome
    }
}

/// Demo-only model: probabilistically settles pending tips. Never use this
/// where recorded settlement results exist.
#[derive(Debug)]
pub struct DemoResolver<R: Rng> {
    rng: R,
}

impl<R: Rng> DemoResolver<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Settlement for DemoResolver<R> {
    fn settle(&mut self, tip: &Tip, window: WindowKind) -> TipOutcome {
        if tip.outcome != TipOutcome::Pending {
            return tip.outcome;
        }
        if !self.rng.gen_bool(RESOLVE_CHANCE) {
            return TipOutcome::Pending;
        }
        let win_rate = match window {
            WindowKind::Current => WIN_RATE_CURRENT,
            WindowKind::Previous => WIN_RATE_PREVIOUS,
        };
        if self.rng.gen_bool(win_rate) {
            TipOutcome::Won
        } else {
            TipOutcome::Lost
        }
    }
}
