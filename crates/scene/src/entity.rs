use std::time::{Duration, Instant};

use crate::grid::PixelPos;
use crate::style::AgentStyle;
use crate::tween::Tween;

/// Status label shown when the backend reports none.
pub const IDLE_STATUS: &str = "idle";

/// One rendered agent, owned exclusively by the scene arena.
///
/// Everything the draw pass needs for this agent hangs off the entity, so
/// removing it from the arena releases the sprite, label, and status bubble
/// in one synchronous step. No other component may hold a reference past a
/// reconciliation pass.
#[derive(Debug, Clone)]
pub struct VisualEntity {
    pub id: String,
    pub label: String,
    pub status: String,
    pub style: AgentStyle,
    position: PixelPos,
    tween: Option<Tween>,
}

impl VisualEntity {
    /// Spawn at the target position with no motion. New agents appear in
    /// place; only position changes of existing agents animate.
    pub(crate) fn spawn(id: String, at: PixelPos, label: String, status: String, style: AgentStyle) -> Self {
        Self {
            id,
            label,
            status,
            style,
            position: at,
            tween: None,
        }
    }

    /// Rendered position at `now`.
    pub fn position_at(&self, now: Instant) -> PixelPos {
        match &self.tween {
            Some(tween) => tween.sample(now),
            None => self.position,
        }
    }

    /// The position the entity is headed to, or resting at.
    pub fn target(&self) -> PixelPos {
        match &self.tween {
            Some(tween) => tween.to,
            None => self.position,
        }
    }

    pub fn is_moving(&self, now: Instant) -> bool {
        self.tween.as_ref().is_some_and(|t| !t.finished(now))
    }

    /// Begin gliding toward `to`. A no-op when `to` is already the target,
    /// so identical feeds never restart an animation. In-flight motion is
    /// superseded, not queued: the new tween starts from the currently
    /// rendered position.
    pub(crate) fn retarget(&mut self, to: PixelPos, now: Instant, duration: Duration) {
        if self.target() == to {
            return;
        }
        let from = self.position_at(now);
        self.position = to;
        self.tween = Some(Tween::new(from, to, now, duration));
    }
}
