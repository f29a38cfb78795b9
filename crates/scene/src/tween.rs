use std::time::{Duration, Instant};

use crate::grid::PixelPos;

/// Time-based interpolation of a position from `from` to `to`.
///
/// A tween is sampled, never stepped: `sample` is a pure function of `now`,
/// so the render pass can read it at any rate without mutating the scene.
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: PixelPos,
    pub to: PixelPos,
    pub started: Instant,
    pub duration: Duration,
}

impl Tween {
    pub fn new(from: PixelPos, to: PixelPos, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Interpolated position at `now`, clamped to the endpoints.
    pub fn sample(&self, now: Instant) -> PixelPos {
        if self.finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let k = ease_in_out_quad(t.clamp(0.0, 1.0));
        PixelPos {
            x: self.from.x + (self.to.x - self.from.x) * k,
            y: self.from.y + (self.to.y - self.from.y) * k,
        }
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Quadratic ease in/out over `t` in `[0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
