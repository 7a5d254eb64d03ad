use crate::services::MatchPipeline;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Handle to the daily matching task.
///
/// Dropping the handle does not stop the task; call `cancel` (or
/// `shutdown` to also wait for it to finish).
pub struct SchedulerHandle {
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signal the task to stop after its current iteration.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    /// Cancel and wait for the task to finish.
    pub async fn shutdown(self) {
        self.cancel_token.cancel();
        let _ = self.handle.await;
    }
}

/// Spawn the daily matching task.
///
/// Fires once per day at the given local time, running the same batch the
/// manual trigger uses. The returned handle cancels it.
pub fn spawn_daily(pipeline: Arc<MatchPipeline>, hour: u32, minute: u32) -> SchedulerHandle {
    let cancel_token = CancellationToken::new();
    let task_token = cancel_token.clone();

    let handle = tokio::spawn(async move {
        info!(
            "Daily matching scheduled at {:02}:{:02} local time",
            hour, minute
        );

        loop {
            let wait = duration_until_next(chrono::Local::now().naive_local(), hour, minute);
            info!("Next scheduled matching run in {:?}", wait);

            tokio::select! {
                _ = tokio::time::sleep(wait) => {
                    info!("Scheduled matching run starting");
                    let report = pipeline.run_for_all_users().await;
                    for line in &report {
                        info!("Scheduled run: {}", line);
                    }
                }
                _ = task_token.cancelled() => {
                    info!("Scheduler received shutdown signal");
                    break;
                }
            }
        }
    });

    SchedulerHandle {
        cancel_token,
        handle,
    }
}

/// Time until the next occurrence of `hour:minute`, today or tomorrow.
fn duration_until_next(now: chrono::NaiveDateTime, hour: u32, minute: u32) -> Duration {
    let target_time = chrono::NaiveTime::from_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap());

    let mut target = now.date().and_time(target_time);
    if target <= now {
        target = target + chrono::Duration::days(1);
    }

    (target - now).to_std().unwrap_or(Duration::from_secs(0))
}
