use anyhow::Result;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::api::{ApiClient, Transport};

/// What a polled endpoint looks like to the views.
#[derive(Debug, Clone, PartialEq)]
pub struct PollState<T> {
    /// Last good payload; survives later failures.
    pub data: Option<T>,
    /// True until the first attempt settles, whatever its outcome.
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for PollState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> PollState<T> {
    pub fn record(&mut self, outcome: Result<T>) {
        match outcome {
            Ok(v) => {
                self.data = Some(v);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }
}

/// Handle returned by [`use_api_data`].
pub struct ApiData<T: 'static> {
    state: Signal<PollState<T>>,
    fetch: Callback<()>,
}

impl<T: 'static> Clone for ApiData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ApiData<T> {}

impl<T: 'static> PartialEq for ApiData<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T: Clone + 'static> ApiData<T> {
    pub fn snapshot(&self) -> PollState<T> {
        self.state.read().clone()
    }

    /// Issues one more request now, outside the ticker. Requests already in
    /// flight are left to finish.
    pub fn refetch(&self) {
        self.fetch.call(());
    }
}

/// GETs `endpoint` on mount and then every `refresh_ms` until the calling
/// component is dropped. Each request runs as its own task owned by the
/// component, so a slow response never holds back or cancels the next one.
pub fn use_api_data<T, C>(endpoint: &'static str, refresh_ms: u32) -> ApiData<T>
where
    T: DeserializeOwned + 'static,
    C: Transport,
{
    let client = use_context::<ApiClient<C>>();
    let mut state = use_signal(PollState::<T>::default);

    let fetch = use_callback(move |()| {
        let client = client.clone();
        spawn(async move {
            let outcome = client.fetch_json::<T>(endpoint).await;
            if let Err(e) = &outcome {
                warn!("[poll] {endpoint}: {e:#}");
            }
            state.write().record(outcome);
        });
    });

    use_hook(move || fetch.call(()));
    use_interval(refresh_ms, move || fetch.call(()));

    ApiData { state, fetch }
}

/// Runs `on_tick` every `period_ms`. The ticker task is owned by the calling
/// component and cancelled when it is dropped.
pub fn use_interval(period_ms: u32, mut on_tick: impl FnMut() + 'static) {
    let ticker = use_hook(move || {
        spawn(async move {
            loop {
                sleep_ms(period_ms).await;
                on_tick();
            }
        })
    });
    use_drop(move || ticker.cancel());
}

#[cfg(feature = "web")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(feature = "web"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Runs `dom` for `ms`, re-rendering whenever a signal changes.
#[cfg(test)]
pub(crate) async fn drive(dom: &mut VirtualDom, ms: u64) {
    let _ = tokio::time::timeout(std::time::Duration::from_millis(ms), async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate_to_vec();
        }
    })
    .await;
}
