use eframe::egui;

use crate::session::IdentityTier;
use crate::ui::state::AppState;
use crate::ui::{Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &AppState) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::Home));
        }
        ui.heading("Mi Perfil");
    });
    ui.separator();

    ui.label(format!("ID de usuario: {}", state.session.user_id));
    let tier = match state.session.tier {
        IdentityTier::Token => "Cuenta verificada",
        IdentityTier::Anonymous => "Sesión anónima",
        IdentityTier::Local => "Modo sin conexión",
    };
    ui.label(egui::RichText::new(tier).weak());
    ui.add_space(8.0);

    if ui.button("📍 Mis Direcciones").clicked() {
        action = Some(UiAction::Navigate(Screen::Addresses));
    }

    action
}
