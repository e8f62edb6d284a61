use crate::abstract_trait::product::service::DynProductCommandService;
use tokio::sync::broadcast;
use tokio::time::{Duration, interval};
use tracing::{error, info};

/// Periodic trigger for the archive sweep. Fires every `interval_secs`
/// (24 hours in production); sweep failures are logged only and never stop
/// the schedule.
pub fn spawn_purge_scheduler(
    service: DynProductCommandService,
    interval_secs: u64,
    shutdown_tx: broadcast::Sender<()>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut shutdown_rx = shutdown_tx.subscribe();
        let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));

        // The first tick completes immediately; the schedule starts one full
        // interval after boot.
        ticker.tick().await;

        info!("⏰ Purge scheduler running every {interval_secs}s");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    info!("⏰ Purge schedule fired");
                    match service.sweep_expired().await {
                        Ok(purged) => info!("🧹 Sweep complete, purged {purged} product(s)"),
                        Err(err) => error!("❌ Scheduled sweep failed: {err}"),
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("🛑 Purge scheduler shutting down...");
                    break;
                }
            }
        }
    })
}
