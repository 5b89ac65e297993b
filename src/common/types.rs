use serde::{Deserialize, Serialize};

/// Saved delivery/location entry. Created and deleted, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub detail: String,
    pub created_at: i64,
}

/// Conversation summary. `last_message_text`/`last_message_time` are a
/// denormalized cache refreshed on every send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    #[serde(default)]
    pub id: String,
    pub partner_id: String,
    #[serde(default)]
    pub partner_name: String,
    #[serde(default)]
    pub last_message_text: String,
    #[serde(default)]
    pub last_message_time: i64,
}

/// Immutable chat message, ordered by `timestamp` ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub sender_id: String,
    pub timestamp: i64,
}

/// Menu item as served by the delivery backend (Spanish wire names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
}

/// Restaurant listing shown on the delivery screen.
#[derive(Debug, Clone)]
pub struct Store {
    pub name: String,
    pub cuisine: String,
}

/// Transport request handed to the driver-search screen.
#[derive(Debug, Clone)]
pub struct RideDetails {
    pub origin: String,
    pub destination: String,
    pub fare: f64,
}

/// Payload for the order-tracking screen.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub store_name: String,
    pub destination: String,
    pub total: f64,
}

/// Order submission payload for `POST /domicilio/api/pedidos/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub cliente_id: u32,
    pub items: Vec<u32>,
    pub monto_total: f64,
    pub estado: String,
}
