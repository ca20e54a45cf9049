use std::time::Duration;

use tokio::task::JoinHandle;

/// A repeating task on the tokio runtime. The owner keeps the handle for as
/// long as the ticking view is alive and calls [`Ticker::stop`] on teardown,
/// after which no further ticks run.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawns `tick` to run once immediately and then once per `period`
    pub fn every<F>(period: Duration, mut tick: F) -> Ticker
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                tick();
            }
        });
        Ticker { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}
