use std::time::Duration;
use tokio::time::interval;

use crate::common::AppState;
use crate::poll::worker;

/// Run the readings poll task on a schedule.
///
/// The first poll fires immediately; subsequent polls fire every
/// `poll_interval_seconds`. Failures retry within the cycle up to
/// `poll_retry_max` times, then the snapshot is marked stale and the
/// ticker keeps running. Nothing short of process shutdown stops the loop.
pub async fn run_readings_poll(state: AppState) {
    let interval_secs = state.config.poll_interval_seconds;
    let retry_delay_secs = state.config.poll_retry_delay_seconds;
    let max_retries = state.config.poll_retry_max;

    tracing::info!(interval_secs, "Starting readings poll scheduler");

    let mut ticker = interval(Duration::from_secs(interval_secs));

    // Run initial poll immediately
    ticker.tick().await;

    loop {
        tracing::debug!("Running readings poll...");

        let mut retries = 0;
        let mut poll_succeeded = false;

        loop {
            match worker::poll_readings(&state).await {
                Ok(()) => {
                    poll_succeeded = true;
                    tracing::debug!("Readings poll completed successfully");
                    break;
                }
                Err(e) => {
                    retries += 1;
                    if e.to_string().contains("Rate limited") && retries <= max_retries {
                        tracing::warn!(
                            retry = retries,
                            max_retries,
                            delay_secs = retry_delay_secs,
                            "Readings poll rate limited, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(retry_delay_secs)).await;
                    } else if retries <= max_retries {
                        tracing::error!(
                            error = %e,
                            retry = retries,
                            max_retries,
                            "Readings poll failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(retry_delay_secs)).await;
                    } else {
                        tracing::error!(
                            error = %e,
                            max_retries,
                            "Readings poll failed after max retries"
                        );
                        break;
                    }
                }
            }
        }

        if !poll_succeeded {
            worker::mark_stale(&state).await;
        }

        // Wait for next tick
        ticker.tick().await;
    }
}
