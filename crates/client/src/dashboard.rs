use std::future::Future;
use std::time::{Duration, Instant};

use gridwatch_scene::{Frame, Scene, SceneConfig};
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::source::AgentSource;

/// Tuning for the poll/refresh loop.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Fixed re-query interval.
    pub poll_interval: Duration,
    /// Quiet window after a push notification before the re-query fires, so
    /// a burst of notifications collapses into one fetch.
    pub refresh_debounce: Duration,
    /// Frame publish rate while entities are animating.
    pub frame_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(2000),
            refresh_debounce: Duration::from_millis(150),
            frame_interval: Duration::from_millis(100),
        }
    }
}

/// Clonable handle that requests an immediate re-query of the feed.
///
/// Push notifications from the backend do not deliver deltas; they funnel
/// through here into the same debounced path as the poll timer, so fetches
/// never stack up.
#[derive(Debug, Clone)]
pub struct RefreshHandle(mpsc::UnboundedSender<()>);

impl RefreshHandle {
    pub fn request_refresh(&self) {
        let _ = self.0.send(());
    }
}

/// Owns the scene and the data source, and keeps one consistent with the
/// other for as long as the loop runs.
pub struct Dashboard<S> {
    scene: Scene,
    source: S,
    config: DashboardConfig,
    refresh_tx: mpsc::UnboundedSender<()>,
    refresh_rx: mpsc::UnboundedReceiver<()>,
    frames: watch::Sender<Frame>,
}

impl<S: AgentSource> Dashboard<S> {
    pub fn new(
        source: S,
        scene_config: SceneConfig,
        config: DashboardConfig,
    ) -> (Self, watch::Receiver<Frame>) {
        let scene = Scene::new(scene_config);
        let (frames, receiver) = watch::channel(scene.frame(Instant::now()));
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        let dashboard = Self {
            scene,
            source,
            config,
            refresh_tx,
            refresh_rx,
            frames,
        };
        (dashboard, receiver)
    }

    pub fn refresh_handle(&self) -> RefreshHandle {
        RefreshHandle(self.refresh_tx.clone())
    }

    /// Drive the poll loop until `shutdown` resolves, then hand back the
    /// scene. The scene lives on this task only; render shells observe it
    /// through the frame channel, never by reference.
    pub async fn run_until(self, shutdown: impl Future<Output = ()>) -> Scene {
        let Self {
            mut scene,
            source,
            config,
            refresh_tx,
            mut refresh_rx,
            frames,
        } = self;
        // Held so the refresh channel never reports closed, even when every
        // external handle is gone.
        let _keepalive = refresh_tx;

        tokio::pin!(shutdown);

        let mut poll = tokio::time::interval(config.poll_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut frame_tick = tokio::time::interval(config.frame_interval);
        frame_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            poll_ms = config.poll_interval.as_millis() as u64,
            "agent feed poller started"
        );

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = frame_tick.tick(), if scene.is_animating(Instant::now()) => {
                    let _ = frames.send(scene.frame(Instant::now()));
                }
                _ = poll.tick() => {
                    refetch(&source, &mut scene, &frames).await;
                }
                Some(()) = refresh_rx.recv() => {
                    tokio::time::sleep(config.refresh_debounce).await;
                    // Requests that piled up during the quiet window are all
                    // answered by this single re-query.
                    while refresh_rx.try_recv().is_ok() {}
                    // The push-triggered query also counts as the next
                    // scheduled poll.
                    poll.reset();
                    refetch(&source, &mut scene, &frames).await;
                }
            }
        }

        scene
    }
}

async fn refetch<S: AgentSource>(source: &S, scene: &mut Scene, frames: &watch::Sender<Frame>) {
    match source.fetch().await {
        Ok(feed) => {
            if scene.apply_feed(&feed, Instant::now()) {
                let _ = frames.send(scene.frame(Instant::now()));
            }
        }
        Err(err) => {
            // Keep the previous entities; a stale scene beats a blank one.
            warn!(error = %err, "agent feed fetch failed");
        }
    }
}
