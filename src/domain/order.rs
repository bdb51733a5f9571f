use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One line entry within an order, referencing a menu item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: i64,
    pub base_price: f64,
    pub final_price: f64,
    /// Opaque customization payload, stored exactly as received.
    pub customizations: Value,
    pub special_instructions: String,
}

/// A validated order as produced by the normalizer, before the store
/// has assigned identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub email: String,
    pub order_type: String,
    pub payment_method: String,
    pub special_instructions: String,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub items: Vec<OrderItem>,
}

/// The canonical record of a customer's purchase request.
///
/// Created exactly once via the normalizer + store pipeline; never
/// updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub customer_phone: String,
    pub email: String,
    pub order_type: String,
    pub payment_method: String,
    pub special_instructions: String,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub estimated_ready_time: DateTime<Utc>,
}

impl Order {
    /// Materializes a stored order from a draft.
    ///
    /// # Notes
    /// `estimated_ready_time` is deliberately set equal to `created_at`;
    /// there is no preparation-time model.
    pub fn from_draft(id: u64, draft: OrderDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            customer_phone: draft.customer_phone,
            email: draft.email,
            order_type: draft.order_type,
            payment_method: draft.payment_method,
            special_instructions: draft.special_instructions,
            subtotal: draft.subtotal,
            tax: draft.tax,
            delivery_fee: draft.delivery_fee,
            total: draft.total,
            items: draft.items,
            status: "pending".to_string(),
            created_at,
            estimated_ready_time: created_at,
        }
    }
}
