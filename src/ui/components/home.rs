use eframe::egui;

use crate::ui::state::AppState;
use crate::ui::{Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &AppState) -> Option<UiAction> {
    let mut action = None;

    ui.heading("SuperApp");
    let short_id: String = state.session.user_id.chars().take(8).collect();
    ui.label(format!("Hola, {short_id} 👋"));
    if let Some(notice) = &state.notice {
        ui.colored_label(egui::Color32::DARK_GREEN, notice);
    }
    ui.separator();
    ui.label("Selecciona un Servicio");
    ui.add_space(8.0);

    if ui.button("🚗 Transporte de Personas").clicked() {
        action = Some(UiAction::Navigate(Screen::Transporte));
    }
    if ui.button("🍔 Domicilios & Pedidos").clicked() {
        action = Some(UiAction::Navigate(Screen::Domicilios));
    }
    if ui.button("💬 Chat y Mensajería").clicked() {
        action = Some(UiAction::Navigate(Screen::ChatList));
    }
    if ui.button("👤 Mi Perfil").clicked() {
        action = Some(UiAction::Navigate(Screen::Profile));
    }

    action
}
