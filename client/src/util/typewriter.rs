//! Typewriter rotation for the hero headline.
//!
//! DESIGN
//! ======
//! A pure state machine. Each `tick` advances one step and returns how long
//! to wait before the next one, so the component only needs a timer loop:
//! type a character every 100 ms, hold the full role, delete a character
//! every 50 ms, then move to the next role and wrap around.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    roles: &'static [&'static str],
    role: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    #[must_use]
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self { roles, role: 0, shown: 0, phase: Phase::Typing }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn role_index(&self) -> usize {
        self.role
    }

    /// Visible prefix of the current role.
    #[must_use]
    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    fn current(&self) -> &'static str {
        self.roles.get(self.role).copied().unwrap_or_default()
    }

    /// Advance one step; returns the delay before the next tick.
    pub fn tick(&mut self) -> Duration {
        let len = self.current().chars().count();
        if len == 0 {
            return HOLD_DELAY;
        }
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Holding;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.delete_one()
            }
            Phase::Deleting => self.delete_one(),
        }
    }

    fn delete_one(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown > 0 {
            return DELETE_DELAY;
        }
        self.role = (self.role + 1) % self.roles.len();
        self.phase = Phase::Typing;
        TYPE_DELAY
    }
}
