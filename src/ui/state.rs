use crate::cart::Cart;
use crate::common::types::{Address, Chat, Message, Product};
use crate::session::Session;
use crate::sim::{DeliveryTrip, DriverSearch, PaymentProcessing};

/// Local UI state. Collections are replaced wholesale on every snapshot
/// delivery; there is no optimistic local apply.
pub struct AppState {
    pub session: Session,
    pub addresses: Vec<Address>,
    pub addresses_loaded: bool,
    pub chats: Vec<Chat>,
    pub chats_loaded: bool,
    /// Messages of the currently open chat.
    pub messages: Vec<Message>,
    /// `None` while the menu fetch is in flight.
    pub menu: Option<Vec<Product>>,
    pub cart: Cart,
    pub notice: Option<String>,

    // Compose/input state. Cleared only when the snapshot confirming
    // the write arrives; a failed write redelivers nothing, leaving the
    // text in place for manual resubmission.
    pub new_address_name: String,
    pub new_address_detail: String,
    pub message_input: String,
    pub message_write_pending: bool,
    pub address_write_pending: bool,
    pub origin_input: String,
    pub destination_input: String,
    pub delivery_address: String,

    // Simulated processes. Not cleared on navigation; a machine left
    // behind by an abandoned screen just stops being read.
    pub driver_search: Option<DriverSearch>,
    pub trip: Option<DeliveryTrip>,
    pub payment: Option<PaymentProcessing>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            addresses: Vec::new(),
            addresses_loaded: false,
            chats: Vec::new(),
            chats_loaded: false,
            messages: Vec::new(),
            menu: None,
            cart: Cart::default(),
            notice: None,
            new_address_name: String::new(),
            new_address_detail: String::new(),
            message_input: String::new(),
            message_write_pending: false,
            address_write_pending: false,
            origin_input: String::new(),
            destination_input: String::new(),
            delivery_address: "Av. Principal #123, Torre Oeste, Apt. 5A".to_string(),
            driver_search: None,
            trip: None,
            payment: None,
        }
    }

    pub fn apply_addresses(&mut self, addresses: Vec<Address>) {
        self.addresses = addresses;
        self.addresses_loaded = true;
    }

    /// Replace the chat list: resolve display names, then sort by last
    /// message time, newest first.
    pub fn apply_chats(&mut self, mut chats: Vec<Chat>) {
        for chat in &mut chats {
            chat.partner_name =
                display_partner_name(&chat.partner_id, &chat.partner_name, &self.session.user_id);
        }
        chats.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));
        self.chats = chats;
        self.chats_loaded = true;
    }

    /// Replace the open chat's messages, ascending by timestamp. The
    /// sort is stable, so delivery order survives equal timestamps.
    pub fn apply_messages(&mut self, mut messages: Vec<Message>) {
        messages.sort_by_key(|message| message.timestamp);
        self.messages = messages;
    }
}

/// Derived display name: the caller chatting with themselves sees
/// "Tú mismo"; an unnamed partner gets the generic label.
pub fn display_partner_name(partner_id: &str, partner_name: &str, user_id: &str) -> String {
    if partner_id == user_id {
        "Tú mismo".to_string()
    } else if partner_name.trim().is_empty() {
        "Usuario SuperApp".to_string()
    } else {
        partner_name.to_string()
    }
}
