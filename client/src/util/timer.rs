//! Simulated latency and background ticks.
//!
//! Browser builds sleep on `gloo-timers`. Host tests sleep on tokio's clock so
//! `start_paused` tests can auto-advance through the mocked latencies. Other
//! host builds return immediately.

use std::time::Duration;

pub async fn sleep_ms(ms: u64) {
    let duration = Duration::from_millis(ms);
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(all(not(feature = "csr"), test))]
    {
        tokio::time::sleep(duration).await;
    }
    #[cfg(all(not(feature = "csr"), not(test)))]
    {
        let _ = duration;
    }
}

/// Run `tick` every `period_ms` until the owning reactive scope is cleaned
/// up. Must be called inside a component.
pub fn spawn_interval(period_ms: u64, tick: impl Fn() + 'static) {
    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                sleep_ms(period_ms).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (period_ms, tick);
    }
}
