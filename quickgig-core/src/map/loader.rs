use std::{future::Future, time::Duration};

/// Interval between two checks whether the map widget has been loaded.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Access to an asynchronously loaded map widget API.
pub trait MapLoader {
    type Provider;

    /// Returns `None` as long as the API is not available.
    fn try_load(&self) -> Option<Self::Provider>;
}

/// Resolves as soon as the widget API is available.
///
/// `pause` is awaited between two unsuccessful attempts. The polling
/// stops when the returned future is dropped, e.g. by wrapping it
/// into [`futures::future::Abortable`](https://docs.rs/futures).
pub async fn wait_for_provider<L, F, Fut>(loader: &L, mut pause: F) -> L::Provider
where
    L: MapLoader,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut attempts = 0_usize;
    loop {
        if let Some(provider) = loader.try_load() {
            log::debug!("Map provider available after {attempts} attempt(s)");
            return provider;
        }
        attempts += 1;
        if attempts == 1 {
            log::debug!("Waiting for the map provider");
        }
        pause().await;
    }
}
