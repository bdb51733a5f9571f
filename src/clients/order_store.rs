use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{Order, OrderDraft};
use crate::error::OrderError;
use crate::store_actor::StoreRequest;

/// Client for interacting with the order store actor.
///
/// Cheap to clone; every request handler holds one. Channel failures
/// surface as `OrderError::Internal` since they mean the store task is
/// gone, which no caller can fix.
#[derive(Clone)]
pub struct OrderStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl OrderStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self, draft))]
    pub async fn append(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Append { draft, respond_to })
            .await
            .map_err(|_| OrderError::Internal("order store closed".to_string()))?;
        response
            .await
            .map_err(|_| OrderError::Internal("order store dropped".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| OrderError::Internal("order store closed".to_string()))?;
        response
            .await
            .map_err(|_| OrderError::Internal("order store dropped".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| OrderError::Internal("order store closed".to_string()))?;
        response
            .await
            .map_err(|_| OrderError::Internal("order store dropped".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, OrderError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Count { respond_to })
            .await
            .map_err(|_| OrderError::Internal("order store closed".to_string()))?;
        response
            .await
            .map_err(|_| OrderError::Internal("order store dropped".to_string()))
    }
}
