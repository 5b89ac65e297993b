use crate::common::types::{OrderSummary, RideDetails, Store};
use crate::storage::paths::Collection;

/// Target of an open conversation screen.
#[derive(Debug, Clone)]
pub struct ChatTarget {
    pub chat_id: String,
    pub partner_id: String,
    pub partner_name: String,
}

/// Current screen plus its payload. Navigation replaces the whole
/// variant atomically; there is no history stack, each screen carries
/// its own explicit parent action.
#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    Transporte,
    FindDriver(RideDetails),
    Domicilios,
    StoreDetail(Store),
    Checkout(Store),
    OrderTracking(OrderSummary),
    ChatList,
    Chat(ChatTarget),
    Profile,
    Addresses,
}

impl Screen {
    /// Collections this screen keeps live while active. Leaving the
    /// screen tears them down unconditionally.
    pub fn subscriptions(&self) -> Vec<Collection> {
        match self {
            Screen::Addresses => vec![Collection::Addresses],
            Screen::ChatList => vec![Collection::Chats],
            Screen::Chat(target) => vec![Collection::Messages {
                chat_id: target.chat_id.clone(),
            }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_screens_declare_their_collections() {
        assert_eq!(Screen::Addresses.subscriptions(), vec![Collection::Addresses]);
        assert_eq!(Screen::ChatList.subscriptions(), vec![Collection::Chats]);
        let chat = Screen::Chat(ChatTarget {
            chat_id: "c1".to_string(),
            partner_id: "p".to_string(),
            partner_name: "P".to_string(),
        });
        assert_eq!(
            chat.subscriptions(),
            vec![Collection::Messages {
                chat_id: "c1".to_string()
            }]
        );
    }

    #[test]
    fn static_screens_subscribe_to_nothing() {
        assert!(Screen::Home.subscriptions().is_empty());
        assert!(Screen::Transporte.subscriptions().is_empty());
        assert!(Screen::Domicilios.subscriptions().is_empty());
    }
}
