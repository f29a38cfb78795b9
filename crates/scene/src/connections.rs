use gridwatch_protocol::AgentRecord;
use serde::Serialize;

use crate::grid::{cell_center, PixelPos};

/// Curvature magnitude for connection arcs.
pub const ARC_CURVATURE: f32 = 0.25;

/// A visual link between two agents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connection {
    pub from: PixelPos,
    pub to: PixelPos,
    pub curvature: f32,
}

/// Link each consecutive pair of agents in feed order.
///
/// Produces `n - 1` links for `n` agents, none for fewer than two. The
/// curvature sign alternates by index parity so arcs starting near the same
/// point do not overlap; the tie-break is positional in the list, not
/// geometric. Chaining by feed order is a placeholder policy and does not
/// encode real agent-to-agent relationships.
pub fn compute_connections(agents: &[AgentRecord]) -> Vec<Connection> {
    if agents.len() < 2 {
        return Vec::new();
    }
    agents
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Connection {
            from: cell_center(pair[0].x, pair[0].y),
            to: cell_center(pair[1].x, pair[1].y),
            curvature: if i % 2 == 0 {
                ARC_CURVATURE
            } else {
                -ARC_CURVATURE
            },
        })
        .collect()
}
