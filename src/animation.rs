//! Timeline reveal and parallax
//!
//! The reveal strategy is a tagged variant selected once at setup from the
//! reduced-motion capability: either targets are visible immediately, or a
//! target reveals when enough of it intersects the viewport. Both variants
//! share the attach/observe contract; detaching is dropping the handle.

use crate::constants::motion;

/// How timeline items enter the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStrategy {
    /// Everything is visible from the start
    ReducedMotion,
    /// An item reveals once `threshold` of its height intersects the viewport
    OnIntersect { threshold: f32 },
}

impl RevealStrategy {
    /// Capability check, done once at setup
    pub fn select(reduced_motion: bool) -> Self {
        if reduced_motion {
            RevealStrategy::ReducedMotion
        } else {
            RevealStrategy::OnIntersect {
                threshold: motion::REVEAL_THRESHOLD,
            }
        }
    }
}

/// Per-target reveal state attached to one timeline item
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    strategy: RevealStrategy,
    visible: bool,
}

impl Reveal {
    pub fn attach(strategy: RevealStrategy) -> Self {
        Self {
            strategy,
            visible: matches!(strategy, RevealStrategy::ReducedMotion),
        }
    }

    /// Feed the fraction of the target currently intersecting the viewport.
    /// Returns true exactly when the target newly became visible.
    /// Visibility latches: a revealed target never hides again.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if self.visible {
            return false;
        }
        match self.strategy {
            RevealStrategy::ReducedMotion => false,
            RevealStrategy::OnIntersect { threshold } => {
                if visible_fraction >= threshold {
                    self.visible = true;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Parallax shift and scale for a revealed item.
///
/// `distance` is how far the item center sits from the viewport center.
/// The shift is proportional to that distance, clamped to ±14; the scale
/// shrinks slightly as the item leaves the center, clamped to 1 ± 0.02.
/// Disabled entirely below the viewport-width breakpoint (callers check).
pub fn parallax(viewport_height: f32, item_center_y: f32) -> (f32, f32) {
    let center = viewport_height / 2.0;
    let distance = item_center_y - center;

    let shift = ((distance / center) * motion::PARALLAX_MAX_SHIFT)
        .clamp(-motion::PARALLAX_MAX_SHIFT, motion::PARALLAX_MAX_SHIFT);
    let scale = 1.0
        + ((-distance.abs() / viewport_height) * 0.04).clamp(
            -motion::PARALLAX_MAX_SCALE_DELTA,
            motion::PARALLAX_MAX_SCALE_DELTA,
        );
    (shift, scale)
}
