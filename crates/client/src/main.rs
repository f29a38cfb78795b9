use std::time::Duration;

use clap::Parser;
use gridwatch_client::{Dashboard, DashboardConfig, HttpSource};
use gridwatch_scene::SceneConfig;

/// Polls an agent feed and reconciles it into a renderable scene.
#[derive(Debug, Parser)]
#[command(name = "gridwatch", version)]
struct Args {
    /// Base URL of the agent feed backend.
    #[arg(long, default_value = "http://127.0.0.1:39333")]
    url: String,

    /// Poll interval in milliseconds.
    #[arg(long, default_value_t = 2000)]
    interval_ms: u64,

    /// Debounce window for push-triggered refreshes, in milliseconds.
    #[arg(long, default_value_t = 150)]
    debounce_ms: u64,

    /// Frame publish interval while animating, in milliseconds.
    #[arg(long, default_value_t = 100)]
    frame_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = DashboardConfig {
        poll_interval: Duration::from_millis(args.interval_ms),
        refresh_debounce: Duration::from_millis(args.debounce_ms),
        frame_interval: Duration::from_millis(args.frame_ms),
    };

    let source = HttpSource::new(&args.url);
    let (dashboard, mut frames) = Dashboard::new(source, SceneConfig::default(), config);

    tokio::spawn(async move {
        while frames.changed().await.is_ok() {
            let frame = frames.borrow_and_update().clone();
            tracing::info!(
                agents = frame.sprites.len(),
                links = frame.links.len(),
                "frame"
            );
        }
    });

    tracing::info!(url = %args.url, "gridwatch connecting");
    let _scene = dashboard
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;
    Ok(())
}
