use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use gridwatch_protocol::{AgentFeed, AgentRecord};
use serde::Serialize;
use tracing::{debug, warn};

use crate::connections::{compute_connections, Connection};
use crate::entity::{VisualEntity, IDLE_STATUS};
use crate::grid::cell_center;
use crate::style::StyleTable;

#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Duration of the glide when an existing agent changes cell.
    pub tween_duration: Duration,
    pub styles: StyleTable,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tween_duration: Duration::from_millis(450),
            styles: StyleTable::builtin(),
        }
    }
}

/// The entity arena plus everything derived from the last applied feed.
///
/// Constructed on mount, dropped (or [`Scene::clear`]ed) on unmount. All
/// mutation happens through `update_agents`/`apply_feed` on the owning task;
/// the render side reads [`Frame`] values instead of holding references into
/// the arena.
pub struct Scene {
    config: SceneConfig,
    entities: BTreeMap<String, VisualEntity>,
    connections: Vec<Connection>,
    last_rev: Option<i64>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            entities: BTreeMap::new(),
            connections: Vec::new(),
            last_rev: None,
        }
    }

    /// Reconcile the arena against one immutable snapshot. Callable at any
    /// time after construction; runs to completion with no suspension.
    ///
    /// Vanished ids are released immediately, new ids spawn at their target
    /// tile, surviving ids get label/status rewritten in place and their
    /// position retargeted through a tween. An id that reappears after an
    /// absence is brand-new: absence means deletion, not pause, so it gets
    /// no continuity with its previous incarnation. Should a feed repeat an
    /// id, the last occurrence wins; the arena never holds duplicates.
    pub fn update_agents(&mut self, agents: &[AgentRecord], now: Instant) {
        let before = self.entities.len();
        let mut seen = BTreeSet::new();
        let mut added = 0usize;

        for rec in agents {
            let target = cell_center(rec.x, rec.y);
            let status = rec
                .status
                .clone()
                .unwrap_or_else(|| IDLE_STATUS.to_string());
            match self.entities.entry(rec.id.clone()) {
                Entry::Occupied(mut slot) => {
                    let entity = slot.get_mut();
                    entity.label = rec.name.clone();
                    entity.status = status;
                    entity.retarget(target, now, self.config.tween_duration);
                }
                Entry::Vacant(slot) => {
                    let style = self.config.styles.resolve(&rec.name);
                    slot.insert(VisualEntity::spawn(
                        rec.id.clone(),
                        target,
                        rec.name.clone(),
                        status,
                        style,
                    ));
                    added += 1;
                }
            }
            seen.insert(rec.id.as_str());
        }

        // Releasing the entity drops its tween, label, and status state with
        // it; nothing else holds a handle.
        self.entities.retain(|id, _| seen.contains(id.as_str()));

        let removed = (before + added).saturating_sub(self.entities.len());
        let updated = seen.len().saturating_sub(added);
        if added + removed > 0 {
            debug!(added, removed, updated, "scene reconciled");
        }

        self.connections = compute_connections(agents);
    }

    /// Apply one fetched feed: sanitize the batch, enforce revision
    /// ordering, then reconcile. Returns `false` when the feed was rejected
    /// as stale.
    ///
    /// A slow fetch can complete after a faster, newer one; feeds carrying a
    /// revision older than the last applied are dropped so the late result
    /// cannot stomp the scene. Feeds without a revision are always applied.
    pub fn apply_feed(&mut self, feed: &AgentFeed, now: Instant) -> bool {
        let (records, dropped) = feed.records();
        if dropped > 0 {
            warn!(dropped, "dropped malformed agent entries from feed");
        }
        if let (Some(rev), Some(last)) = (feed.rev, self.last_rev) {
            if rev < last {
                debug!(rev, last, "rejected stale feed");
                return false;
            }
        }
        if feed.rev.is_some() {
            self.last_rev = feed.rev;
        }
        self.update_agents(&records, now);
        true
    }

    /// Read-only projection for the draw pass, sampled at `now`.
    pub fn frame(&self, now: Instant) -> Frame {
        Frame {
            sprites: self
                .entities
                .values()
                .map(|entity| {
                    let pos = entity.position_at(now);
                    Sprite {
                        id: entity.id.clone(),
                        x: pos.x,
                        y: pos.y,
                        label: entity.label.clone(),
                        status: entity.status.clone(),
                        class: entity.style.class,
                        tint: entity.style.tint,
                    }
                })
                .collect(),
            links: self.connections.clone(),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.entities.values().any(|e| e.is_moving(now))
    }

    pub fn get(&self, id: &str) -> Option<&VisualEntity> {
        self.entities.get(id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &VisualEntity> {
        self.entities.values()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn last_rev(&self) -> Option<i64> {
        self.last_rev
    }

    /// Unmount: release every entity and derived visual synchronously and
    /// forget the revision watermark.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.connections.clear();
        self.last_rev = None;
    }
}

/// One rendered frame. Serializable so a shell can consume it as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub sprites: Vec<Sprite>,
    pub links: Vec<Connection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sprite {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub status: String,
    pub class: &'static str,
    pub tint: &'static str,
}
