use serde::Serialize;

/// Visual style assigned to an agent: a sprite class for the texture atlas
/// and a tint for labels and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentStyle {
    pub class: &'static str,
    pub tint: &'static str,
}

/// Style used when no keyword in the table matches the agent name.
pub const DEFAULT_STYLE: AgentStyle = AgentStyle {
    class: "drone",
    tint: "#8aa3be",
};

/// Ordered keyword-to-style mapping with first-match-wins semantics.
///
/// Resolution is a pure function of the agent name; two agents whose names
/// contain the same first-matching keyword always render identically. Table
/// order decides ties, so rows are kept in a `Vec`, not a map.
#[derive(Debug, Clone)]
pub struct StyleTable {
    rows: Vec<(&'static str, AgentStyle)>,
    fallback: AgentStyle,
}

impl StyleTable {
    pub fn new(rows: Vec<(&'static str, AgentStyle)>, fallback: AgentStyle) -> Self {
        Self { rows, fallback }
    }

    /// The built-in table shipped with the dashboard.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                ("echo", AgentStyle { class: "scout", tint: "#6ff8ff" }),
                ("forge", AgentStyle { class: "builder", tint: "#ffd06b" }),
                ("warden", AgentStyle { class: "guard", tint: "#ff7198" }),
                ("relay", AgentStyle { class: "courier", tint: "#68c7ff" }),
                ("sage", AgentStyle { class: "analyst", tint: "#4df5bf" }),
            ],
            DEFAULT_STYLE,
        )
    }

    /// Style of the first row whose keyword appears in `name`
    /// (case-insensitive), or the fallback style.
    pub fn resolve(&self, name: &str) -> AgentStyle {
        let name = name.to_ascii_lowercase();
        self.rows
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, style)| *style)
            .unwrap_or(self.fallback)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
