use serde::{Deserialize, Serialize};

/// One agent row as the backend reports it. `x`/`y` are grid cells, not
/// pixels. `id` is the stable identity key across feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub x: i64,
    pub y: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One full point-in-time listing of all agents.
///
/// `rev` is the backend's monotonic revision for this listing; consumers use
/// it to reject a slow fetch that completes after a newer one. Agents are
/// kept as raw JSON values so a single malformed element never poisons the
/// whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentFeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<i64>,
    #[serde(default)]
    pub observed_at_ms: i64,
    #[serde(default)]
    pub agents: Vec<serde_json::Value>,
}

impl AgentFeed {
    /// Decode the raw agent values, dropping malformed entries (missing id
    /// or position). Returns the surviving records in feed order plus the
    /// number of entries dropped, so callers can log the loss.
    pub fn records(&self) -> (Vec<AgentRecord>, usize) {
        parse_agents(&self.agents)
    }
}

/// Per-entry decode of a raw agent batch. A value that fails to decode is
/// dropped; the rest of the batch is processed normally.
pub fn parse_agents(values: &[serde_json::Value]) -> (Vec<AgentRecord>, usize) {
    let mut records = Vec::with_capacity(values.len());
    let mut dropped = 0usize;
    for value in values {
        match serde_json::from_value::<AgentRecord>(value.clone()) {
            Ok(rec) if !rec.id.is_empty() => records.push(rec),
            _ => dropped += 1,
        }
    }
    (records, dropped)
}
