use crate::common::types::OrderRequest;
use crate::storage::paths::Collection;

/// Commands the UI sends down to the backend task. Writes are
/// fire-and-forget: failures are logged, never retried.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Open a live snapshot subscription for a collection.
    Subscribe(Collection),
    /// Tear a subscription down, whether or not it ever delivered.
    Unsubscribe(Collection),
    CreateAddress {
        name: String,
        detail: String,
    },
    DeleteAddress {
        id: String,
    },
    /// Ensure a chat summary document exists for a partner.
    StartChat {
        partner_id: String,
        partner_name: String,
    },
    /// Message insert followed by a chat-summary merge. The two writes
    /// are independent; a failed merge leaves the summary stale.
    SendMessage {
        chat_id: String,
        partner_id: String,
        partner_name: String,
        text: String,
    },
    FetchMenu,
    PlaceOrder(OrderRequest),
}
