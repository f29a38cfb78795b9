//! Feed poller and scene driver for the gridwatch dashboard.
//!
//! One task owns the [`gridwatch_scene::Scene`] and drives it from an
//! [`AgentSource`]: a fixed poll interval and push-triggered refreshes both
//! funnel into the same debounced re-query, fetched feeds are reconciled
//! into the scene, and render shells observe the result as published
//! [`gridwatch_scene::Frame`]s.

mod dashboard;
mod http;
mod source;

pub use dashboard::{Dashboard, DashboardConfig, RefreshHandle};
pub use http::HttpSource;
pub use source::AgentSource;
