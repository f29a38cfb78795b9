//! Umbrella crate for gridwatch.
//!
//! This crate is intentionally small: it re-exports the protocol, scene, and
//! client crates so downstream code can depend on a single crate name
//! (`gridwatch`).

pub use gridwatch_client as client;
pub use gridwatch_protocol as protocol;
pub use gridwatch_scene as scene;
