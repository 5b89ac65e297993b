use std::collections::HashSet;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::common::{AppCommand, AppEvent};
use crate::session::Session;
use crate::storage::documents::{self, Document};
use crate::storage::paths::Collection;
use crate::storage::DocumentStore;

use super::delivery::DeliveryApi;

/// The backend task. Owns the document store, the delivery REST client,
/// and the subscription registry; receives commands from the UI and
/// pushes events (full-collection snapshots among them) back up.
pub struct BackendClient {
    store: DocumentStore,
    delivery: DeliveryApi,
    session: Session,
    app_id: String,
    event_sender: mpsc::Sender<AppEvent>,
    command_receiver: mpsc::Receiver<AppCommand>,
    subscriptions: HashSet<Collection>,
}

impl BackendClient {
    pub fn new(
        store: DocumentStore,
        delivery: DeliveryApi,
        session: Session,
        app_id: String,
        event_sender: mpsc::Sender<AppEvent>,
        command_receiver: mpsc::Receiver<AppCommand>,
    ) -> Self {
        Self {
            store,
            delivery,
            session,
            app_id,
            event_sender,
            command_receiver,
            subscriptions: HashSet::new(),
        }
    }

    pub async fn run(mut self) {
        log::info!("Backend event loop started for user {}", self.session.user_id);
        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command).await;
        }
        log::info!("Backend event loop stopped (UI channel closed)");
    }

    async fn handle_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Subscribe(collection) => {
                self.subscriptions.insert(collection.clone());
                self.deliver_snapshot(&collection).await;
            }
            AppCommand::Unsubscribe(collection) => {
                self.subscriptions.remove(&collection);
            }
            AppCommand::CreateAddress { name, detail } => {
                self.create_address(&name, &detail).await;
            }
            AppCommand::DeleteAddress { id } => {
                self.delete_address(&id).await;
            }
            AppCommand::StartChat {
                partner_id,
                partner_name,
            } => {
                self.start_chat(&partner_id, &partner_name).await;
            }
            AppCommand::SendMessage {
                chat_id,
                partner_id,
                partner_name,
                text,
            } => {
                self.send_message(&chat_id, &partner_id, &partner_name, &text)
                    .await;
            }
            AppCommand::FetchMenu => {
                let products = self.delivery.fetch_products().await;
                self.emit(AppEvent::MenuLoaded(products)).await;
            }
            AppCommand::PlaceOrder(order) => match self.delivery.submit_order(&order).await {
                Ok(()) => self.emit(AppEvent::OrderAccepted).await,
                Err(err) => {
                    log::error!("Order submission failed: {err}");
                    self.emit(AppEvent::OrderRejected).await;
                }
            },
        }
    }

    async fn create_address(&mut self, name: &str, detail: &str) {
        let name = name.trim();
        let detail = detail.trim();
        if name.is_empty() || detail.is_empty() {
            return;
        }

        let path = Collection::Addresses.path(&self.app_id, &self.session.user_id);
        let id = Uuid::new_v4().to_string();
        let body = json!({
            "name": name,
            "detail": detail,
            "created_at": Utc::now().timestamp_millis(),
        });
        match self.store.create(&path, &id, &body) {
            Ok(()) => self.redeliver(Collection::Addresses).await,
            Err(err) => log::error!("Failed to save address: {err}"),
        }
    }

    async fn delete_address(&mut self, id: &str) {
        let path = Collection::Addresses.path(&self.app_id, &self.session.user_id);
        match self.store.delete(&path, id) {
            Ok(()) => self.redeliver(Collection::Addresses).await,
            Err(err) => log::error!("Failed to delete address {id}: {err}"),
        }
    }

    async fn start_chat(&mut self, partner_id: &str, partner_name: &str) {
        let path = Collection::Chats.path(&self.app_id, &self.session.user_id);
        let fields = json!({
            "partner_id": partner_id,
            "partner_name": partner_name,
        });
        match self.store.merge(&path, partner_id, &fields) {
            Ok(()) => self.redeliver(Collection::Chats).await,
            Err(err) => log::error!("Failed to start chat with {partner_id}: {err}"),
        }
    }

    async fn send_message(
        &mut self,
        chat_id: &str,
        partner_id: &str,
        partner_name: &str,
        text: &str,
    ) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let messages = Collection::Messages {
            chat_id: chat_id.to_string(),
        };
        let messages_path = messages.path(&self.app_id, &self.session.user_id);
        let chats_path = Collection::Chats.path(&self.app_id, &self.session.user_id);
        let timestamp = Utc::now().timestamp_millis();

        let message_body = json!({
            "text": text,
            "sender_id": self.session.user_id,
            "timestamp": timestamp,
        });
        if let Err(err) = self
            .store
            .create(&messages_path, &Uuid::new_v4().to_string(), &message_body)
        {
            log::error!("Failed to send message: {err}");
            return;
        }

        // Second leg of the dual write; not atomic with the message
        // insert, so the summary can go stale on failure.
        let summary = json!({
            "partner_id": partner_id,
            "partner_name": partner_name,
            "last_message_text": text,
            "last_message_time": timestamp,
        });
        if let Err(err) = self.store.merge(&chats_path, chat_id, &summary) {
            log::error!("Chat summary update failed, summary may be stale: {err}");
        }

        self.redeliver(messages).await;
        self.redeliver(Collection::Chats).await;
    }

    /// Push a fresh snapshot only if the collection is still subscribed.
    async fn redeliver(&mut self, collection: Collection) {
        if self.subscriptions.contains(&collection) {
            self.deliver_snapshot(&collection).await;
        }
    }

    // `&mut self` here and in `emit`: the sqlite connection is not
    // `Sync`, so a `&self` held across an await would make `run()`'s
    // future unspawnable.
    async fn deliver_snapshot(&mut self, collection: &Collection) {
        let path = collection.path(&self.app_id, &self.session.user_id);
        let docs = match self.store.snapshot(&path) {
            Ok(docs) => docs,
            Err(err) => {
                log::error!("Snapshot read failed for {path}: {err}");
                Vec::new()
            }
        };

        let event = match collection {
            Collection::Addresses => AppEvent::Addresses(decode_all(docs)),
            Collection::Chats => AppEvent::Chats(decode_all(docs)),
            Collection::Messages { chat_id } => AppEvent::Messages {
                chat_id: chat_id.clone(),
                messages: decode_all(docs),
            },
        };
        self.emit(event).await;
    }

    async fn emit(&mut self, event: AppEvent) {
        if let Err(err) = self.event_sender.send(event).await {
            log::warn!("UI event channel closed: {err}");
        }
    }
}

fn decode_all<T: DeserializeOwned>(docs: Vec<Document>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            match documents::decode(doc) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping undecodable document {id}: {err}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::IdentityTier;
    use crate::storage::Database;

    fn spawn_client() -> (mpsc::Sender<AppCommand>, mpsc::Receiver<AppEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(16);
        let client = BackendClient::new(
            DocumentStore::new(Database::in_memory().unwrap()),
            DeliveryApi::new("http://127.0.0.1:1".to_string()),
            Session {
                user_id: "u1".to_string(),
                tier: IdentityTier::Anonymous,
            },
            "test-app".to_string(),
            event_tx,
            cmd_rx,
        );
        tokio::spawn(client.run());
        (cmd_tx, event_rx)
    }

    #[test]
    fn run_future_can_be_spawned_on_a_multithreaded_runtime() {
        fn require_send<T: Send>(_: &T) {}

        let (_cmd_tx, cmd_rx) = mpsc::channel(1);
        let (event_tx, _event_rx) = mpsc::channel(1);
        let client = BackendClient::new(
            DocumentStore::new(Database::in_memory().unwrap()),
            DeliveryApi::new("http://127.0.0.1:1".to_string()),
            Session {
                user_id: "u1".to_string(),
                tier: IdentityTier::Anonymous,
            },
            "test-app".to_string(),
            event_tx,
            cmd_rx,
        );
        require_send(&client.run());
    }

    #[tokio::test]
    async fn subscribe_delivers_empty_snapshot_first() {
        let (cmd_tx, mut event_rx) = spawn_client();
        cmd_tx
            .send(AppCommand::Subscribe(Collection::Chats))
            .await
            .unwrap();
        match event_rx.recv().await.unwrap() {
            AppEvent::Chats(chats) => assert!(chats.is_empty()),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn start_test_chat_yields_exactly_one_chat() {
        let (cmd_tx, mut event_rx) = spawn_client();
        cmd_tx
            .send(AppCommand::Subscribe(Collection::Chats))
            .await
            .unwrap();
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            AppEvent::Chats(ref chats) if chats.is_empty()
        ));

        cmd_tx
            .send(AppCommand::StartChat {
                partner_id: "MockPartnerId123".to_string(),
                partner_name: "Repartidor Juan".to_string(),
            })
            .await
            .unwrap();
        match event_rx.recv().await.unwrap() {
            AppEvent::Chats(chats) => {
                assert_eq!(chats.len(), 1);
                assert_eq!(chats[0].partner_id, "MockPartnerId123");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn whitespace_message_is_a_no_op() {
        let (cmd_tx, mut event_rx) = spawn_client();
        let messages = Collection::Messages {
            chat_id: "c1".to_string(),
        };
        cmd_tx
            .send(AppCommand::Subscribe(messages.clone()))
            .await
            .unwrap();
        assert!(matches!(
            event_rx.recv().await.unwrap(),
            AppEvent::Messages { ref messages, .. } if messages.is_empty()
        ));

        cmd_tx
            .send(AppCommand::SendMessage {
                chat_id: "c1".to_string(),
                partner_id: "p".to_string(),
                partner_name: "P".to_string(),
                text: "   ".to_string(),
            })
            .await
            .unwrap();
        cmd_tx
            .send(AppCommand::SendMessage {
                chat_id: "c1".to_string(),
                partner_id: "p".to_string(),
                partner_name: "P".to_string(),
                text: "hola".to_string(),
            })
            .await
            .unwrap();

        // The next snapshot comes from the real message only.
        match event_rx.recv().await.unwrap() {
            AppEvent::Messages { messages, .. } => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].text, "hola");
                assert_eq!(messages[0].sender_id, "u1");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_message_refreshes_chat_summary() {
        let (cmd_tx, mut event_rx) = spawn_client();
        cmd_tx
            .send(AppCommand::Subscribe(Collection::Chats))
            .await
            .unwrap();
        let _ = event_rx.recv().await.unwrap();

        cmd_tx
            .send(AppCommand::SendMessage {
                chat_id: "MockPartnerId123".to_string(),
                partner_id: "MockPartnerId123".to_string(),
                partner_name: "Repartidor Juan".to_string(),
                text: "¿Dónde está mi pedido?".to_string(),
            })
            .await
            .unwrap();

        match event_rx.recv().await.unwrap() {
            AppEvent::Chats(chats) => {
                assert_eq!(chats.len(), 1);
                assert_eq!(chats[0].last_message_text, "¿Dónde está mi pedido?");
                assert!(chats[0].last_message_time > 0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unsubscribed_collections_get_no_redelivery() {
        let (cmd_tx, mut event_rx) = spawn_client();
        cmd_tx
            .send(AppCommand::Subscribe(Collection::Addresses))
            .await
            .unwrap();
        let _ = event_rx.recv().await.unwrap();
        cmd_tx
            .send(AppCommand::Unsubscribe(Collection::Addresses))
            .await
            .unwrap();
        cmd_tx
            .send(AppCommand::CreateAddress {
                name: "Casa".to_string(),
                detail: "Calle Falsa 123".to_string(),
            })
            .await
            .unwrap();
        // Re-subscribing is the only way to see the write.
        cmd_tx
            .send(AppCommand::Subscribe(Collection::Addresses))
            .await
            .unwrap();
        match event_rx.recv().await.unwrap() {
            AppEvent::Addresses(addresses) => {
                assert_eq!(addresses.len(), 1);
                assert_eq!(addresses[0].name, "Casa");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
