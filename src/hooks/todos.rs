use dioxus::prelude::*;

use crate::api::{ApiClient, HttpTransport, Transport, TODOS_PATH};
use crate::config::DashboardConfig;
use crate::hooks::poll::{use_api_data, ApiData, PollState};
use crate::shared::types::{Todo, TodoUpdate};

/// Polled todo collection plus the mutations that act on it. Every
/// successful mutation is followed by a refetch; nothing is applied locally.
pub struct UseTodos<C: Transport = HttpTransport> {
    poll: ApiData<Vec<Todo>>,
    client: CopyValue<ApiClient<C>>,
}

impl<C: Transport> Clone for UseTodos<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Transport> Copy for UseTodos<C> {}

impl<C: Transport> PartialEq for UseTodos<C> {
    fn eq(&self, other: &Self) -> bool {
        self.poll == other.poll
    }
}

pub fn use_todos() -> UseTodos {
    use_todos_on::<HttpTransport>()
}

/// [`use_todos`] over whichever transport the provided [`ApiClient`] uses.
pub fn use_todos_on<C: Transport>() -> UseTodos<C> {
    let config = use_context::<DashboardConfig>();
    let client = use_context::<ApiClient<C>>();
    let poll = use_api_data::<Vec<Todo>, C>(TODOS_PATH, config.refresh_ms);
    let client = use_hook(move || CopyValue::new(client));
    UseTodos { poll, client }
}

impl<C: Transport> UseTodos<C> {
    pub fn state(&self) -> PollState<Vec<Todo>> {
        self.poll.snapshot()
    }

    /// Current list; empty until the first successful load.
    pub fn todos(&self) -> Vec<Todo> {
        self.state().data.unwrap_or_default()
    }

    pub fn refetch(&self) {
        self.poll.refetch();
    }

    pub async fn create_todo(&self, title: &str) -> bool {
        let ok = self.client.cloned().create_todo(title).await;
        self.settle(ok)
    }

    pub async fn update_todo(&self, id: i64, update: TodoUpdate) -> bool {
        let ok = self.client.cloned().update_todo(id, &update).await;
        self.settle(ok)
    }

    pub async fn delete_todo(&self, id: i64) -> bool {
        let ok = self.client.cloned().delete_todo(id).await;
        self.settle(ok)
    }

    pub async fn toggle_complete(&self, id: i64, current: bool) -> bool {
        let ok = self.client.cloned().toggle_complete(id, current).await;
        self.settle(ok)
    }

    fn settle(&self, ok: bool) -> bool {
        if ok {
            self.refetch();
        }
        ok
    }
}
