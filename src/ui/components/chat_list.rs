use eframe::egui;

use super::format_time;
use crate::ui::state::AppState;
use crate::ui::{ChatTarget, Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &AppState) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::Home));
        }
        ui.heading("Bandeja de Mensajes");
    });
    ui.separator();

    if !state.chats_loaded {
        ui.label("Cargando Chats...");
        return action;
    }

    if state.chats.is_empty() {
        ui.label("💬");
        ui.label("Aún no tienes conversaciones. ¡Comienza una ahora!");
        if ui.button("Iniciar Chat de Prueba").clicked() {
            action = Some(UiAction::StartChat {
                partner_id: "MockPartnerId123".to_string(),
                partner_name: "Repartidor Juan".to_string(),
            });
        }
    } else {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for chat in &state.chats {
                ui.horizontal(|ui| {
                    ui.label("👤");
                    let preview = if chat.last_message_text.is_empty() {
                        "Toca para iniciar conversación."
                    } else {
                        chat.last_message_text.as_str()
                    };
                    let row = ui.button(format!("{}\n{preview}", chat.partner_name));
                    ui.label(
                        egui::RichText::new(format_time(chat.last_message_time)).weak(),
                    );
                    if row.clicked() {
                        action = Some(UiAction::Navigate(Screen::Chat(ChatTarget {
                            chat_id: chat.id.clone(),
                            partner_id: chat.partner_id.clone(),
                            partner_name: chat.partner_name.clone(),
                        })));
                    }
                });
                ui.separator();
            }
        });
    }

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!("Tu ID de usuario: {}", state.session.user_id)).weak(),
    );

    action
}
