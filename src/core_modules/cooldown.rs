// THEORY:
// The `cooldown` module is the last gate before a spell event leaves the
// pipeline. After an accepted cast, the wand's return swing traces a mirror
// stroke that would classify as the opposite spell; the gate silences the
// whole catalogue for a short interval so one physical gesture produces one
// event.
//
// Key architectural principles:
// 1.  **Global, Not Per-Spell**: One deadline covers every spell type. The
//     return swing has a different shape than the cast, so a per-type
//     cooldown would not stop it.
// 2.  **Replace, Never Stack**: An accepted event always re-arms the deadline
//     to `now + cooldown`; at most one deadline is ever active.
// 3.  **Monotonic Time**: Comparisons use `Instant`, injected by the caller,
//     so wall-clock adjustments cannot reopen or extend the window and tests
//     control time directly.
// 4.  **Observable Suppression**: Suppression is silent downstream but
//     counted and logged, so the logging collaborator can diagnose a gate
//     that is eating casts.

use log::debug;
use std::time::{Duration, Instant};

/// Suppresses spell events for a configured interval after each accepted one.
pub struct CooldownGate {
    cooldown: Duration,
    deadline: Option<Instant>,
    suppressed_count: u64,
}

impl CooldownGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            deadline: None,
            suppressed_count: 0,
        }
    }

    /// Decides whether an event at `now` passes the gate.
    ///
    /// Passing re-arms the deadline to `now + cooldown`. An event strictly
    /// before the active deadline is suppressed; one at or after it passes.
    pub fn admit(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.deadline {
            if now < deadline {
                self.suppressed_count += 1;
                debug!(
                    "spell suppressed: cooldown active for another {:.2}s",
                    (deadline - now).as_secs_f64()
                );
                return false;
            }
        }
        self.deadline = Some(now + self.cooldown);
        true
    }

    /// Number of events suppressed since construction.
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed_count
    }
}
