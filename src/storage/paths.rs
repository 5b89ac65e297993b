//! Namespace-scoped collection paths. Every read/write goes through one
//! of these builders, so no cross-user path is constructible from a
//! session.

pub fn addresses_path(app_id: &str, user_id: &str) -> String {
    format!("{app_id}/users/{user_id}/addresses")
}

pub fn chats_path(app_id: &str, user_id: &str) -> String {
    format!("{app_id}/users/{user_id}/chats")
}

pub fn messages_path(app_id: &str, user_id: &str, chat_id: &str) -> String {
    format!("{app_id}/users/{user_id}/chats/{chat_id}/messages")
}

/// A subscribable collection, still unscoped. The backend task resolves
/// it against the session before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Collection {
    Addresses,
    Chats,
    Messages { chat_id: String },
}

impl Collection {
    pub fn path(&self, app_id: &str, user_id: &str) -> String {
        match self {
            Collection::Addresses => addresses_path(app_id, user_id),
            Collection::Chats => chats_path(app_id, user_id),
            Collection::Messages { chat_id } => messages_path(app_id, user_id, chat_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_deterministic() {
        assert_eq!(
            addresses_path("app-1", "u1"),
            "app-1/users/u1/addresses"
        );
        assert_eq!(chats_path("app-1", "u1"), "app-1/users/u1/chats");
        assert_eq!(
            messages_path("app-1", "u1", "c9"),
            "app-1/users/u1/chats/c9/messages"
        );
        // Same inputs, same path.
        assert_eq!(addresses_path("app-1", "u1"), addresses_path("app-1", "u1"));
    }

    #[test]
    fn collection_variants_match_free_functions() {
        assert_eq!(
            Collection::Addresses.path("a", "u"),
            addresses_path("a", "u")
        );
        assert_eq!(Collection::Chats.path("a", "u"), chats_path("a", "u"));
        let messages = Collection::Messages {
            chat_id: "c".to_string(),
        };
        assert_eq!(messages.path("a", "u"), messages_path("a", "u", "c"));
    }

    #[test]
    fn user_ids_never_collide() {
        assert_ne!(chats_path("a", "u1"), chats_path("a", "u2"));
        assert_ne!(chats_path("a1", "u"), chats_path("a2", "u"));
    }
}
