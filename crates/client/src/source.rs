use std::future::Future;

use gridwatch_protocol::AgentFeed;

/// A backend that can produce the current agent listing.
///
/// `fetch` is the only suspending operation in the pipeline; everything
/// downstream of it runs to completion against one immutable feed.
pub trait AgentSource: Send {
    fn fetch(&self) -> impl Future<Output = anyhow::Result<AgentFeed>> + Send;
}
