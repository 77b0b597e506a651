//! Hover state machine and pointer hit testing.
//!
//! The chart has exactly one piece of mutable state: which month arc, if
//! any, is under the pointer. The selected month name is always derived from
//! the index, never stored beside it.

use crate::geometry::{normalize_degrees, Point};
use crate::layout::{ChartLayout, RingBand};

/// Pointer events delivered by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the month arc at this flattened index.
    Enter(usize),
    /// Pointer left the month ring.
    Leave,
}

/// Which month arc is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverState {
    /// Nothing hovered.
    #[default]
    Idle,
    /// The month arc at this flattened index is hovered.
    Hovering(usize),
}

impl HoverState {
    /// Active month index, if any.
    #[must_use]
    pub const fn active(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Hovering(i) => Some(i),
        }
    }

    /// Whether nothing is hovered.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Apply a pointer event for a ring of `month_count` arcs.
    ///
    /// An enter always replaces whatever was hovered before, so a late leave
    /// for the previous arc can never be observed as two active arcs. Enter
    /// indices outside `0..month_count` are ignored.
    ///
    /// Returns `true` if the state changed.
    pub fn apply(&mut self, event: PointerEvent, month_count: usize) -> bool {
        let next = match event {
            PointerEvent::Enter(index) if index < month_count => Self::Hovering(index),
            PointerEvent::Enter(index) => {
                tracing::debug!(index, month_count, "ignoring enter outside month ring");
                return false;
            }
            PointerEvent::Leave => Self::Idle,
        };

        if next == *self {
            return false;
        }
        tracing::debug!(from = ?*self, to = ?next, "hover transition");
        *self = next;
        true
    }
}

/// Month arc under `point`, if any.
///
/// The hovered arc keeps its enlarged outer radius for hit testing so the
/// pointer does not flicker off the extra band it just revealed.
#[must_use]
pub fn hit_test(
    layout: &ChartLayout,
    month_count: usize,
    state: HoverState,
    point: Point,
) -> Option<usize> {
    if month_count == 0 {
        return None;
    }

    let (radius, angle) = point.to_polar(layout.center);
    let slice = 360.0 / month_count as f32;
    let index = ((normalize_degrees(angle) / slice) as usize).min(month_count - 1);

    let outer = layout.month_outer(state.active() == Some(index));
    RingBand::new(layout.month_ring.inner, outer)
        .contains(radius)
        .then_some(index)
}

/// Event a pointer move at `point` produces, or `None` if nothing changes.
#[must_use]
pub fn event_for_move(
    layout: &ChartLayout,
    month_count: usize,
    state: HoverState,
    point: Point,
) -> Option<PointerEvent> {
    match (hit_test(layout, month_count, state, point), state) {
        (Some(i), HoverState::Hovering(j)) if i == j => None,
        (Some(i), _) => Some(PointerEvent::Enter(i)),
        (None, HoverState::Hovering(_)) => Some(PointerEvent::Leave),
        (None, HoverState::Idle) => None,
    }
}
