use eframe::egui;

use super::format_time;
use crate::common::AppCommand;
use crate::ui::state::AppState;
use crate::ui::{ChatTarget, Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, target: &ChatTarget) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::ChatList));
        }
        ui.heading(&target.partner_name);
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            for message in &state.messages {
                let mine = message.sender_id == state.session.user_id;
                let layout = if mine {
                    egui::Layout::right_to_left(egui::Align::TOP)
                } else {
                    egui::Layout::left_to_right(egui::Align::TOP)
                };
                ui.with_layout(layout, |ui| {
                    ui.group(|ui| {
                        ui.label(&message.text);
                        ui.label(
                            egui::RichText::new(format_time(message.timestamp)).weak().small(),
                        );
                    });
                });
            }
        });

    ui.separator();
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.text_edit_singleline(&mut state.message_input);
        if ui.button("Enviar").clicked() {
            send = true;
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    // Whitespace-only input never dispatches and is never cleared.
    if send && !state.message_input.trim().is_empty() {
        action = Some(UiAction::Command(AppCommand::SendMessage {
            chat_id: target.chat_id.clone(),
            partner_id: target.partner_id.clone(),
            partner_name: target.partner_name.clone(),
            text: state.message_input.trim().to_string(),
        }));
    }

    action
}
