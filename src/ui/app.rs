use std::time::Instant;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::types::{OrderRequest, OrderSummary};
use crate::common::{AppCommand, AppEvent};
use crate::session::Session;
use crate::sim::{DeliveryTrip, DriverSearch, PaymentProcessing, SearchPhase};

use super::components;
use super::state::AppState;
use super::{ChatTarget, Screen, UiAction};

pub struct SuperApp {
    state: AppState,
    screen: Screen,
    cliente_id: u32,
    command_sender: mpsc::Sender<AppCommand>,
    event_receiver: mpsc::Receiver<AppEvent>,
}

impl SuperApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        session: Session,
        cliente_id: u32,
        command_sender: mpsc::Sender<AppCommand>,
        event_receiver: mpsc::Receiver<AppEvent>,
    ) -> Self {
        Self {
            state: AppState::new(session),
            screen: Screen::Home,
            cliente_id,
            command_sender,
            event_receiver,
        }
    }

    fn handle_backend_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                AppEvent::Addresses(addresses) => {
                    self.state.apply_addresses(addresses);
                    if self.state.address_write_pending {
                        self.state.address_write_pending = false;
                        self.state.new_address_name.clear();
                        self.state.new_address_detail.clear();
                    }
                }
                AppEvent::Chats(chats) => self.state.apply_chats(chats),
                AppEvent::Messages { chat_id, messages } => {
                    // A snapshot for a chat that is no longer open is
                    // dropped; the subscription teardown races the last
                    // delivery.
                    let current = matches!(
                        &self.screen,
                        Screen::Chat(target) if target.chat_id == chat_id
                    );
                    if current {
                        self.state.apply_messages(messages);
                        if self.state.message_write_pending {
                            self.state.message_write_pending = false;
                            self.state.message_input.clear();
                        }
                    }
                }
                AppEvent::MenuLoaded(products) => self.state.menu = Some(products),
                AppEvent::OrderAccepted => {
                    self.state.cart.clear();
                    self.state.notice =
                        Some("¡Pedido Enviado! Tu pedido ha sido registrado.".to_string());
                }
                AppEvent::OrderRejected => {
                    self.state.notice =
                        Some("El servidor rechazó el pedido. Intenta de nuevo.".to_string());
                }
            }
        }
    }

    fn send_command(&mut self, command: AppCommand) -> bool {
        match self.command_sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to send command to backend: {err}");
                false
            }
        }
    }

    /// Replace the current screen, tearing down the old screen's
    /// subscriptions and opening the new one's.
    fn navigate(&mut self, next: Screen) {
        for collection in self.screen.subscriptions() {
            self.send_command(AppCommand::Unsubscribe(collection));
        }
        for collection in next.subscriptions() {
            self.send_command(AppCommand::Subscribe(collection));
        }

        match &next {
            Screen::StoreDetail(_) => {
                self.state.menu = None;
                self.send_command(AppCommand::FetchMenu);
            }
            Screen::FindDriver(_) => {
                self.state.driver_search = Some(DriverSearch::new(Instant::now()));
            }
            Screen::OrderTracking(_) => {
                self.state.trip = Some(DeliveryTrip::new(Instant::now()));
            }
            Screen::Chat(_) => {
                self.state.messages.clear();
                self.state.message_input.clear();
                self.state.message_write_pending = false;
            }
            Screen::Addresses => {
                self.state.addresses_loaded = false;
                self.state.address_write_pending = false;
            }
            Screen::ChatList => {
                self.state.chats_loaded = false;
            }
            _ => {}
        }
        self.screen = next;
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Navigate(screen) => self.navigate(screen),
            UiAction::Command(command) => {
                let message_write = matches!(command, AppCommand::SendMessage { .. });
                let address_write = matches!(command, AppCommand::CreateAddress { .. });
                // The compose text survives until the confirming
                // snapshot comes back; see handle_backend_events.
                if self.send_command(command) {
                    if message_write {
                        self.state.message_write_pending = true;
                    }
                    if address_write {
                        self.state.address_write_pending = true;
                    }
                }
            }
            UiAction::StartChat {
                partner_id,
                partner_name,
            } => {
                self.send_command(AppCommand::StartChat {
                    partner_id: partner_id.clone(),
                    partner_name: partner_name.clone(),
                });
                // A chat with no prior history reuses the partner id as
                // its chat id.
                self.navigate(Screen::Chat(ChatTarget {
                    chat_id: partner_id.clone(),
                    partner_id,
                    partner_name,
                }));
            }
            UiAction::RequestRide(ride) => self.navigate(Screen::FindDriver(ride)),
            UiAction::BeginPayment => {
                self.state.payment = Some(PaymentProcessing::new(Instant::now()));
            }
            UiAction::CancelSearch => {
                if let Some(search) = &mut self.state.driver_search {
                    search.cancel();
                }
                self.navigate(Screen::Transporte);
            }
            UiAction::CancelTrip => {
                if let Some(trip) = &mut self.state.trip {
                    trip.cancel();
                }
            }
        }
    }

    /// Timer-driven transitions checked once per frame.
    fn advance_simulations(&mut self, now: Instant) {
        if matches!(self.screen, Screen::FindDriver(_)) {
            let redirect = self
                .state
                .driver_search
                .as_ref()
                .is_some_and(|search| search.phase(now) == SearchPhase::Redirect);
            if redirect {
                self.state.notice =
                    Some("Viaje confirmado con el conductor Juan Pérez.".to_string());
                self.navigate(Screen::Home);
            }
        }

        if let Screen::Checkout(store) = &self.screen {
            let store = store.clone();
            let complete = self
                .state
                .payment
                .as_ref()
                .is_some_and(|payment| payment.is_complete(now));
            if complete {
                self.state.payment = None;
                let order = OrderRequest {
                    cliente_id: self.cliente_id,
                    items: self.state.cart.product_ids(),
                    monto_total: self.state.cart.total(),
                    estado: "Pendiente".to_string(),
                };
                self.send_command(AppCommand::PlaceOrder(order));
                let summary = OrderSummary {
                    store_name: store.name.clone(),
                    destination: self.state.delivery_address.clone(),
                    total: self.state.cart.total(),
                };
                self.navigate(Screen::OrderTracking(summary));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::Message;
    use crate::session::IdentityTier;

    fn app() -> (SuperApp, mpsc::Receiver<AppCommand>, mpsc::Sender<AppEvent>) {
        let (command_sender, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_receiver) = mpsc::channel(16);
        let app = SuperApp {
            state: AppState::new(Session {
                user_id: "u1".to_string(),
                tier: IdentityTier::Anonymous,
            }),
            screen: Screen::Home,
            cliente_id: 2,
            command_sender,
            event_receiver,
        };
        (app, cmd_rx, event_tx)
    }

    fn open_chat(app: &mut SuperApp) {
        app.screen = Screen::Chat(ChatTarget {
            chat_id: "c1".to_string(),
            partner_id: "p1".to_string(),
            partner_name: "Juan".to_string(),
        });
    }

    fn send_message_action(text: &str) -> UiAction {
        UiAction::Command(AppCommand::SendMessage {
            chat_id: "c1".to_string(),
            partner_id: "p1".to_string(),
            partner_name: "Juan".to_string(),
            text: text.to_string(),
        })
    }

    #[test]
    fn compose_text_survives_until_the_confirming_snapshot() {
        let (mut app, _cmd_rx, event_tx) = app();
        open_chat(&mut app);
        app.state.message_input = "hola".to_string();

        app.apply_action(send_message_action("hola"));
        // A failed write never redelivers, so nothing clears the text.
        app.handle_backend_events();
        assert_eq!(app.state.message_input, "hola");

        event_tx
            .try_send(AppEvent::Messages {
                chat_id: "c1".to_string(),
                messages: vec![Message {
                    id: "m1".to_string(),
                    text: "hola".to_string(),
                    sender_id: "u1".to_string(),
                    timestamp: 1,
                }],
            })
            .unwrap();
        app.handle_backend_events();
        assert!(app.state.message_input.is_empty());
        assert!(!app.state.message_write_pending);
    }

    #[test]
    fn address_compose_clears_only_after_the_write_round_trips() {
        let (mut app, _cmd_rx, event_tx) = app();
        app.screen = Screen::Addresses;
        app.state.new_address_name = "Casa".to_string();
        app.state.new_address_detail = "Calle Falsa 123".to_string();

        // A subscribe snapshot with no write in flight leaves the form
        // alone.
        event_tx.try_send(AppEvent::Addresses(Vec::new())).unwrap();
        app.handle_backend_events();
        assert_eq!(app.state.new_address_name, "Casa");

        app.apply_action(UiAction::Command(AppCommand::CreateAddress {
            name: "Casa".to_string(),
            detail: "Calle Falsa 123".to_string(),
        }));
        assert_eq!(app.state.new_address_detail, "Calle Falsa 123");

        event_tx.try_send(AppEvent::Addresses(Vec::new())).unwrap();
        app.handle_backend_events();
        assert!(app.state.new_address_name.is_empty());
        assert!(app.state.new_address_detail.is_empty());
    }

    #[test]
    fn reopening_a_chat_drops_a_stale_pending_clear() {
        let (mut app, _cmd_rx, event_tx) = app();
        open_chat(&mut app);
        app.apply_action(send_message_action("hola"));
        assert!(app.state.message_write_pending);

        app.navigate(Screen::Chat(ChatTarget {
            chat_id: "c1".to_string(),
            partner_id: "p1".to_string(),
            partner_name: "Juan".to_string(),
        }));
        app.state.message_input = "segundo intento".to_string();

        event_tx
            .try_send(AppEvent::Messages {
                chat_id: "c1".to_string(),
                messages: Vec::new(),
            })
            .unwrap();
        app.handle_backend_events();
        assert_eq!(app.state.message_input, "segundo intento");
    }
}

impl eframe::App for SuperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_backend_events();
        let now = Instant::now();
        self.advance_simulations(now);

        let screen = self.screen.clone();
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| match &screen {
                Screen::Home => components::home::render(ui, &self.state),
                Screen::Transporte => components::transporte::render(ui, &mut self.state),
                Screen::FindDriver(ride) => {
                    components::find_driver::render(ui, &self.state, ride, now)
                }
                Screen::Domicilios => components::domicilios::render(ui),
                Screen::StoreDetail(store) => {
                    components::store_detail::render(ui, &mut self.state, store)
                }
                Screen::Checkout(store) => {
                    components::checkout::render(ui, &mut self.state, store)
                }
                Screen::OrderTracking(summary) => {
                    components::order_tracking::render(ui, &self.state, summary, now)
                }
                Screen::ChatList => components::chat_list::render(ui, &self.state),
                Screen::Chat(target) => {
                    components::chat_screen::render(ui, &mut self.state, target)
                }
                Screen::Profile => components::profile::render(ui, &self.state),
                Screen::Addresses => components::addresses::render(ui, &mut self.state),
            })
            .inner;

        if let Some(action) = action {
            self.apply_action(action);
        }

        ctx.request_repaint();
    }
}
