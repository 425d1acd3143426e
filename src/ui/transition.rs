//! The fade between maps.
//!
//! A transition walks through a fixed sequence of phases:
//!
//! ```text
//! Idle -> FadingOut -> Swapping -> FadingIn -> Locked -> Idle
//! ```
//!
//! The map swap is handed back to the caller exactly once, when the fade-out completes, and the
//! movement unlock exactly once, when the buffer after the fade-in runs out. Each call to
//! [`Transition::advance`] moves through at most one phase boundary; leftover time is dropped.

use std::time::Duration;

use glam::UVec2;
use tracing::{debug, trace};

use crate::constants::transition::{FADE_IN, FADE_OUT, SETTLE_DELAY, UNLOCK_BUFFER};
use crate::error::RenderError;
use crate::map::MapId;
use crate::render::{Color, RenderContext};
use crate::ui::dim_screen;

/// Where a transition is taking the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapChange {
    pub map: MapId,
    /// Destination tile; `None` uses the map's initial position.
    pub destination: Option<UVec2>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    FadingOut {
        elapsed: Duration,
    },
    /// Screen fully dark, new map in place, waiting for it to settle.
    Swapping {
        elapsed: Duration,
    },
    FadingIn {
        elapsed: Duration,
    },
    /// Fade finished, player still locked for a short buffer.
    Locked {
        elapsed: Duration,
    },
}

/// Something the caller has to apply as the transition progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Swap the current map and reposition the player.
    Swap(MapChange),
    /// Release the player's movement lock.
    Unlock,
}

#[derive(Debug, Default)]
pub struct Transition {
    phase: TransitionPhase,
    pending: Option<MapChange>,
}

impl Transition {
    /// Starts a transition toward `change`. Returns false, changing nothing, unless idle.
    pub fn begin(&mut self, change: MapChange) -> bool {
        if self.phase != TransitionPhase::Idle {
            return false;
        }

        debug!(map = %change.map, "Transition started");
        self.phase = TransitionPhase::FadingOut { elapsed: Duration::ZERO };
        self.pending = Some(change);
        true
    }

    pub fn advance(&mut self, dt: Duration) -> Option<TransitionStep> {
        let (phase, step) = match self.phase {
            TransitionPhase::Idle => return None,
            TransitionPhase::FadingOut { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= FADE_OUT {
                    let step = self.pending.take().map(TransitionStep::Swap);
                    (TransitionPhase::Swapping { elapsed: Duration::ZERO }, step)
                } else {
                    (TransitionPhase::FadingOut { elapsed }, None)
                }
            }
            TransitionPhase::Swapping { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= SETTLE_DELAY {
                    (TransitionPhase::FadingIn { elapsed: Duration::ZERO }, None)
                } else {
                    (TransitionPhase::Swapping { elapsed }, None)
                }
            }
            TransitionPhase::FadingIn { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= FADE_IN {
                    (TransitionPhase::Locked { elapsed: Duration::ZERO }, None)
                } else {
                    (TransitionPhase::FadingIn { elapsed }, None)
                }
            }
            TransitionPhase::Locked { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= UNLOCK_BUFFER {
                    debug!("Transition finished");
                    (TransitionPhase::Idle, Some(TransitionStep::Unlock))
                } else {
                    (TransitionPhase::Locked { elapsed }, None)
                }
            }
        };

        if std::mem::discriminant(&phase) != std::mem::discriminant(&self.phase) {
            trace!(from = ?self.phase, to = ?phase, "Transition phase changed");
        }
        self.phase = phase;
        step
    }

    /// Drops any transition in progress without applying it.
    pub fn cancel(&mut self) {
        self.phase = TransitionPhase::Idle;
        self.pending = None;
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True while the screen is fading or dark.
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::FadingOut { .. } | TransitionPhase::Swapping { .. } | TransitionPhase::FadingIn { .. }
        )
    }

    /// True until the transition has fully finished, including the unlock buffer.
    pub fn is_busy(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Opacity of the black overlay, from 0.0 (clear) to 1.0 (black).
    pub fn fade_alpha(&self) -> f32 {
        match self.phase {
            TransitionPhase::Idle | TransitionPhase::Locked { .. } => 0.0,
            TransitionPhase::FadingOut { elapsed } => (elapsed.as_secs_f32() / FADE_OUT.as_secs_f32()).min(1.0),
            TransitionPhase::Swapping { .. } => 1.0,
            TransitionPhase::FadingIn { elapsed } => 1.0 - (elapsed.as_secs_f32() / FADE_IN.as_secs_f32()).min(1.0),
        }
    }

    pub fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        let alpha = self.fade_alpha();
        if alpha <= 0.0 {
            return Ok(());
        }
        dim_screen(ctx, Color::BLACK.with_alpha(alpha).a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_alpha_follows_phases() {
        let mut transition = Transition::default();
        assert_eq!(transition.fade_alpha(), 0.0);

        transition.begin(MapChange {
            map: MapId::DarkForest,
            destination: None,
        });
        transition.advance(FADE_OUT / 2);
        assert!((transition.fade_alpha() - 0.5).abs() < 1e-6);

        transition.advance(FADE_OUT);
        assert_eq!(transition.fade_alpha(), 1.0);
    }
}
