use anyhow::Context;
use tracing::info;

use crate::clients::OrderStoreClient;
use crate::store_actor::OrderStoreActor;

/// The running order system.
///
/// Responsible for starting the store actor, handing out its client,
/// and joining the task on shutdown.
pub struct OrderSystem {
    pub store_client: OrderStoreClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new() -> Self {
        let (store_actor, store_client) = OrderStoreActor::new(32);
        let store_handle = tokio::spawn(store_actor.run());

        Self {
            store_client,
            handles: vec![store_handle],
        }
    }

    /// Drops the clients (closing the mailboxes) and waits for the
    /// actors to drain and stop.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        info!("Shutting down system...");

        drop(self.store_client);

        for handle in self.handles {
            handle.await.context("actor task failed")?;
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
