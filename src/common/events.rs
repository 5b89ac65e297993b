use crate::common::types::{Address, Chat, Message, Product};

/// Events from the backend task up to the UI. Snapshot events carry the
/// full current member set of a collection, never a diff.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Addresses(Vec<Address>),
    Chats(Vec<Chat>),
    Messages { chat_id: String, messages: Vec<Message> },
    MenuLoaded(Vec<Product>),
    OrderAccepted,
    OrderRejected,
}
