//! # Mock Framework
//!
//! Utilities for testing handlers and clients without a running store actor.
//!
//! Use [`create_mock_store_client`] to get a client and a receiver, then
//! helpers like [`expect_append`] to assert which requests were sent and
//! to script the store's replies deterministically.

use tokio::sync::{mpsc, oneshot};

use crate::clients::OrderStoreClient;
use crate::domain::{Order, OrderDraft};
use crate::store_actor::StoreRequest;

pub fn create_mock_store_client(
    buffer_size: usize,
) -> (OrderStoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderStoreClient::new(sender), receiver)
}

/// Asserts that the next message is an Append and returns its parts.
pub async fn expect_append(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(OrderDraft, oneshot::Sender<Order>)> {
    match receiver.recv().await {
        Some(StoreRequest::Append { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Asserts that the next message is a Get and returns its parts.
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(u64, oneshot::Sender<Option<Order>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::normalizer::normalize;

    #[tokio::test]
    async fn mock_client_round_trips_an_append() {
        let (client, mut receiver) = create_mock_store_client(10);

        let draft = normalize(&json!({
            "customer_name": "Test",
            "customer_phone": "555",
            "items": [{"name": "Soup"}]
        }))
        .unwrap();

        let append_task = tokio::spawn(async move { client.append(draft).await });

        let (payload, responder) = expect_append(&mut receiver)
            .await
            .expect("Expected Append request");
        assert_eq!(payload.customer_name, "Test");

        let order = Order::from_draft(1, payload, chrono::Utc::now());
        responder.send(order.clone()).unwrap();

        let result = append_task.await.unwrap();
        assert_eq!(result, Ok(order));
    }

    #[tokio::test]
    async fn mock_client_round_trips_a_get() {
        let (client, mut receiver) = create_mock_store_client(10);

        let get_task = tokio::spawn(async move { client.get(7).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, 7);
        responder.send(None).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result, Ok(None));
    }
}
