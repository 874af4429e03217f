use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{debug, error};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::shared::types::{HealthDto, TodoCreate, TodoUpdate};

pub const TODOS_PATH: &str = "/todos";
pub const CALENDAR_EVENTS_PATH: &str = "/calendar/events";
pub const CALENDAR_TODAY_PATH: &str = "/calendar/today";

/// Origin label stamped on todos created from the dashboard.
pub const WEB_CREATOR: &str = "web";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request over the wire. Status handling and decoding live in [`ApiClient`].
#[allow(async_fn_in_trait)]
pub trait Transport: Clone + 'static {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method_s = request.method.as_str().to_string();
        let mut req = self.client.request(request.method, &request.url);
        if let Some(b) = request.body {
            req = req.json(&b);
        }
        let res = req
            .send()
            .await
            .map_err(|e| anyhow!("sending {} {}: {}", method_s, request.url, e))?;
        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .with_context(|| format!("reading body from {} {}", method_s, request.url))?;
        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    api_base: String,
    health_url: String,
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_transport(HttpTransport::default(), config)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T, config: &DashboardConfig) -> Self {
        Self {
            transport,
            api_base: config.api_base(),
            health_url: config.health_url(),
        }
    }

    /// GET `{api_base}{path}` and decode the JSON body.
    pub async fn fetch_json<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        let url = format!("{}{}", self.api_base, path);
        self.get_url(&url).await
    }

    pub async fn health(&self) -> Result<HealthDto> {
        let url = self.health_url.clone();
        self.get_url(&url).await
    }

    pub async fn create_todo(&self, title: &str) -> bool {
        if title.trim().is_empty() {
            debug!("[todos] refusing to create a todo with a blank title");
            return false;
        }
        let body = TodoCreate {
            title: title.to_string(),
            created_by: WEB_CREATOR.to_string(),
        };
        let outcome = match serde_json::to_value(&body) {
            Ok(v) => self.mutate(Method::POST, TODOS_PATH.to_string(), Some(v)).await,
            Err(e) => Err(e.into()),
        };
        report("create", outcome)
    }

    pub async fn update_todo(&self, id: i64, update: &TodoUpdate) -> bool {
        let outcome = match serde_json::to_value(update) {
            Ok(v) => self.mutate(Method::PUT, todo_path(id), Some(v)).await,
            Err(e) => Err(e.into()),
        };
        report("update", outcome)
    }

    pub async fn delete_todo(&self, id: i64) -> bool {
        let outcome = self.mutate(Method::DELETE, todo_path(id), None).await;
        report("delete", outcome)
    }

    pub async fn toggle_complete(&self, id: i64, current: bool) -> bool {
        let update = TodoUpdate {
            completed: Some(!current),
            ..Default::default()
        };
        self.update_todo(id, &update).await
    }

    async fn get_url<D: DeserializeOwned>(&self, url: &str) -> Result<D> {
        let res = self
            .transport
            .send(ApiRequest {
                method: Method::GET,
                url: url.to_string(),
                body: None,
            })
            .await?;
        if !res.is_success() {
            return Err(anyhow!("GET {} failed with status {}", url, res.status));
        }
        serde_json::from_slice(&res.body).map_err(|e| {
            let snip = String::from_utf8_lossy(&res.body);
            let snip = snip.chars().take(120).collect::<String>();
            anyhow!("decoding JSON from GET {} failed: {} (body: {})", url, e, snip)
        })
    }

    async fn mutate(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        let url = format!("{}{}", self.api_base, path);
        let method_s = method.as_str().to_string();
        let res = self.transport.send(ApiRequest { method, url: url.clone(), body }).await?;
        if !res.is_success() {
            return Err(anyhow!("{} {} failed with status {}", method_s, url, res.status));
        }
        Ok(())
    }
}

fn todo_path(id: i64) -> String {
    format!("{}/{}", TODOS_PATH, id)
}

fn report(op: &str, outcome: Result<()>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            error!("[todos] {op} failed: {e:#}");
            false
        }
    }
}
