//! Action handlers: UpdateAction dispatch and background fetches
//!
//! Fetches run as tokio tasks and report back through the message channel.
//! They are never cancelled; request ids decide which result is applied.

use tokio::sync::mpsc;

use storefront_api::ProductApi;
use storefront_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: &A)
where
    A: ProductApi + Clone + Sync + 'static,
{
    let api = api.clone();
    tokio::spawn(async move {
        let message = execute_action(action, &api).await;
        if msg_tx.send(message).await.is_err() {
            debug!("Message channel closed, dropping fetch result");
        }
    });
}

/// Run an action to completion and produce the message reporting its result
pub async fn execute_action<A: ProductApi>(action: UpdateAction, api: &A) -> Message {
    match action {
        UpdateAction::FetchProducts { request_id, query } => {
            debug!("Fetching products {} {:?}", request_id, query);
            match api.fetch_products(query).await {
                Ok(response) => Message::ProductsLoaded {
                    request_id,
                    response,
                },
                Err(e) => {
                    log_fetch_failure(&format!("Product list fetch {request_id}"), &e);
                    Message::ProductsFailed {
                        request_id,
                        error: e.to_string(),
                    }
                }
            }
        }

        UpdateAction::FetchProduct { request_id, slug } => {
            debug!("Fetching product {} {:?}", request_id, slug);
            match api.fetch_product_by_slug(&slug).await {
                Ok(product) => Message::ProductLoaded {
                    request_id,
                    product: Box::new(product),
                },
                Err(e) => {
                    log_fetch_failure(&format!("Product fetch {request_id} for {slug:?}"), &e);
                    Message::ProductFailed {
                        request_id,
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}

/// Remote failures are expected and the user can retry; anything else is a bug
fn log_fetch_failure(what: &str, e: &Error) {
    if e.is_recoverable() {
        warn!("{} failed: {}", what, e);
    } else {
        error!("{} failed: {:?}", what, e);
    }
}
