// HTTP transport for store channels.
//
// Purpose
// - Let a composite instance hand events to stores hosted by another instance.
//
// Responsibilities
// - Outbound: POST the event envelope as JSON; anything but a 2xx is an unavailable channel.
// - Inbound: accept an envelope and enqueue it on the local channel feeding the store applier.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::shared::core::event::Event;
use crate::shared::core::http_error_info::error_response;
use crate::shared::infrastructure::event_channel::{ChannelError, EventChannel};

pub struct HttpEventChannel<K, T> {
    name: String,
    url: String,
    client: reqwest::Client,
    _payload: PhantomData<fn(K, T)>,
}

impl<K, T> HttpEventChannel<K, T> {
    /// Events go to `{base_url}/events/{name}`.
    pub fn new(name: impl Into<String>, base_url: &str, client: reqwest::Client) -> Self {
        let name = name.into();
        Self {
            url: format!("{}/events/{name}", base_url.trim_end_matches('/')),
            name,
            client,
            _payload: PhantomData,
        }
    }

    fn unavailable(&self, reason: impl Into<String>) -> ChannelError {
        ChannelError::Unavailable {
            channel: self.name.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl<K, T> EventChannel<K, T> for HttpEventChannel<K, T>
where
    K: Serialize + Send + Sync + 'static,
    T: Serialize + Send + Sync + 'static,
{
    async fn send(&self, event: Event<K, T>) -> Result<(), ChannelError> {
        let response = self
            .client
            .post(&self.url)
            .json(&event)
            .send()
            .await
            .map_err(|error| self.unavailable(error.to_string()))?;

        if !response.status().is_success() {
            return Err(self.unavailable(format!("{} from POST {}", response.status(), self.url)));
        }
        Ok(())
    }
}

/// Accepts events for one store at `/events/{name}` and forwards them to `channel`.
pub fn event_router<K, T>(name: &str, channel: Arc<dyn EventChannel<K, T>>) -> Router
where
    K: DeserializeOwned + Send + 'static,
    T: DeserializeOwned + Send + 'static,
{
    Router::new()
        .route(&format!("/events/{name}"), post(accept::<K, T>))
        .with_state(channel)
}

async fn accept<K, T>(
    State(channel): State<Arc<dyn EventChannel<K, T>>>,
    uri: Uri,
    body: Result<axum::Json<Event<K, T>>, JsonRejection>,
) -> Response
where
    K: DeserializeOwned + Send + 'static,
    T: DeserializeOwned + Send + 'static,
{
    let axum::Json(event) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, uri.path(), rejection.body_text());
        }
    };

    match channel.send(event).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(error) => error_response(StatusCode::SERVICE_UNAVAILABLE, uri.path(), error.to_string()),
    }
}
