//! Scene reconciliation core for the gridwatch dashboard.
//!
//! The [`Scene`] owns the mapping from agent identity to visual entity and is
//! the single source of truth for what the render shell shows. Each incoming
//! feed is diffed against the arena: vanished agents are released, new agents
//! spawn at their target tile, surviving agents glide there through a tween.
//! The draw pass never touches the arena directly; it reads [`Frame`]
//! projections, which are rebuildable at any time.

mod connections;
mod entity;
mod grid;
mod scene;
mod style;
mod tween;

pub use connections::{compute_connections, Connection, ARC_CURVATURE};
pub use entity::{VisualEntity, IDLE_STATUS};
pub use grid::{cell_center, PixelPos, TILE_SIZE};
pub use scene::{Frame, Scene, SceneConfig, Sprite};
pub use style::{AgentStyle, StyleTable, DEFAULT_STYLE};
pub use tween::{ease_in_out_quad, Tween};
