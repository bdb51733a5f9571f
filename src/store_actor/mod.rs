//! Single-writer store actor owning all created orders.
//!
//! Id assignment and append happen inside one message, so ids stay
//! strictly increasing and never duplicate even under concurrent
//! request handlers.

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::clients::OrderStoreClient;
use crate::domain::{Order, OrderDraft};

pub type StoreResponse<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum StoreRequest {
    Append {
        draft: OrderDraft,
        respond_to: StoreResponse<Order>,
    },
    Get {
        id: u64,
        respond_to: StoreResponse<Option<Order>>,
    },
    List {
        respond_to: StoreResponse<Vec<Order>>,
    },
    Count {
        respond_to: StoreResponse<usize>,
    },
}

pub struct OrderStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    orders: Vec<Order>,
    next_id: u64,
}

impl OrderStoreActor {
    pub fn new(buffer_size: usize) -> (Self, OrderStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            orders: Vec::new(),
            next_id: 1,
        };
        (actor, OrderStoreClient::new(sender))
    }

    pub async fn run(mut self) {
        info!("Order store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Append { draft, respond_to } => {
                    let order = self.append(draft);
                    let _ = respond_to.send(order);
                }
                StoreRequest::Get { id, respond_to } => {
                    let order = self.orders.iter().find(|o| o.id == id).cloned();
                    match &order {
                        Some(order) => debug!(order_id = order.id, "Order found"),
                        None => debug!(order_id = id, "Order not found"),
                    }
                    let _ = respond_to.send(order);
                }
                StoreRequest::List { respond_to } => {
                    let _ = respond_to.send(self.orders.clone());
                }
                StoreRequest::Count { respond_to } => {
                    let _ = respond_to.send(self.orders.len());
                }
            }
        }
        info!("Order store stopped");
    }

    fn append(&mut self, draft: OrderDraft) -> Order {
        // Both timestamps come from the same reading; estimated_ready_time
        // intentionally equals created_at.
        let order = Order::from_draft(self.next_id, draft, Utc::now());
        self.next_id += 1;
        self.orders.push(order.clone());
        info!(
            order_id = order.id,
            items = order.items.len(),
            total = order.total,
            "Order stored"
        );
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::normalizer::normalize;

    fn draft(name: &str) -> OrderDraft {
        normalize(&json!({
            "customer_name": name,
            "customer_phone": "555",
            "items": [{"name": "Soup", "basePrice": 3.5}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn assigns_sequential_ids_starting_at_one() {
        let (actor, client) = OrderStoreActor::new(8);
        tokio::spawn(actor.run());

        let mut ids = Vec::new();
        for i in 0..5 {
            let order = client.append(draft(&format!("Customer {i}"))).await.unwrap();
            ids.push(order.id);
        }
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn get_returns_the_stored_order_unchanged() {
        let (actor, client) = OrderStoreActor::new(8);
        tokio::spawn(actor.run());

        let stored = client.append(draft("Alice")).await.unwrap();
        assert_eq!(stored.status, "pending");
        assert_eq!(stored.estimated_ready_time, stored.created_at);

        let fetched = client.get(stored.id).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let (actor, client) = OrderStoreActor::new(8);
        tokio::spawn(actor.run());

        assert_eq!(client.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let (actor, client) = OrderStoreActor::new(8);
        tokio::spawn(actor.run());

        let first = client.append(draft("First")).await.unwrap();
        let second = client.append(draft("Second")).await.unwrap();

        let orders = client.list().await.unwrap();
        assert_eq!(orders, vec![first, second]);
        assert_eq!(client.count().await.unwrap(), 2);
    }
}
