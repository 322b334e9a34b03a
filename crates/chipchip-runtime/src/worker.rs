//! Off-thread execution of remote calls.
//!
//! Interactive front ends must not block their event loop on the network.
//! They turn state transitions into [`ApiRequest`]s, hand them to an
//! [`ApiWorker`] and feed the [`ApiResponse`]s that come back over the
//! channel into [`ChipChip::apply`](crate::ChipChip::apply).

use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;

use chipchip_client::ChirpApi;
use chipchip_types::{CurrentUser, Post, PostPage};
use uuid::Uuid;

use crate::query::FetchTicket;
use crate::timeline::{Feed, SubmitTicket};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub enum ApiRequest {
    CurrentUser,
    Fetch { ticket: FetchTicket, feed: Feed },
    Submit { ticket: SubmitTicket },
    Delete { id: Uuid },
}

/// Settled request. Errors are carried as display strings.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    CurrentUser(std::result::Result<Option<CurrentUser>, String>),
    Fetched {
        ticket: FetchTicket,
        result: std::result::Result<PostPage, String>,
    },
    Submitted {
        ticket: SubmitTicket,
        result: std::result::Result<Post, String>,
    },
    Deleted {
        id: Uuid,
        result: std::result::Result<(), String>,
    },
}

/// Run `request` on the calling thread.
pub fn execute_request(api: &dyn ChirpApi, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::CurrentUser => {
            ApiResponse::CurrentUser(api.current_user().map_err(|e| e.to_string()))
        }
        ApiRequest::Fetch { ticket, feed } => ApiResponse::Fetched {
            result: feed.fetch(api).map_err(|e| e.to_string()),
            ticket,
        },
        ApiRequest::Submit { ticket } => ApiResponse::Submitted {
            result: api.create_post(ticket.content()).map_err(|e| e.to_string()),
            ticket,
        },
        ApiRequest::Delete { id } => ApiResponse::Deleted {
            id,
            result: api.delete_post(id).map_err(|e| e.to_string()),
        },
    }
}

/// Background thread that executes requests one at a time, in order.
pub struct ApiWorker {
    requests: Sender<ApiRequest>,
}

impl ApiWorker {
    /// Start the worker. Each response is passed through `wrap` and sent on
    /// `events`; the thread exits once either side of the channel is gone.
    pub fn spawn<E, F>(api: Arc<dyn ChirpApi>, events: Sender<E>, wrap: F) -> Result<Self>
    where
        E: Send + 'static,
        F: Fn(ApiResponse) -> E + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<ApiRequest>();

        thread::Builder::new()
            .name("chipchip-api".to_string())
            .spawn(move || {
                for request in rx {
                    tracing::debug!(backend = api.id(), "executing {}", request_label(&request));
                    let response = execute_request(api.as_ref(), request);
                    if events.send(wrap(response)).is_err() {
                        break;
                    }
                }
                tracing::debug!("api worker stopped");
            })?;

        Ok(Self { requests: tx })
    }

    pub fn send(&self, request: ApiRequest) -> Result<()> {
        self.requests
            .send(request)
            .map_err(|_| Error::InvalidOperation("api worker has stopped".to_string()))
    }
}

fn request_label(request: &ApiRequest) -> &'static str {
    match request {
        ApiRequest::CurrentUser => "current_user",
        ApiRequest::Fetch { .. } => "fetch",
        ApiRequest::Submit { .. } => "submit",
        ApiRequest::Delete { .. } => "delete",
    }
}
