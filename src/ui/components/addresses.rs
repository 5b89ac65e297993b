use eframe::egui;

use crate::common::AppCommand;
use crate::ui::state::AppState;
use crate::ui::{Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::Profile));
        }
        ui.heading("Mis Direcciones");
    });
    ui.separator();

    ui.label("Añadir Nueva Ubicación");
    ui.text_edit_singleline(&mut state.new_address_name);
    ui.text_edit_singleline(&mut state.new_address_detail);
    let ready = !state.new_address_name.trim().is_empty()
        && !state.new_address_detail.trim().is_empty();
    if ui
        .add_enabled(ready, egui::Button::new("Guardar Dirección"))
        .clicked()
    {
        action = Some(UiAction::Command(AppCommand::CreateAddress {
            name: state.new_address_name.trim().to_string(),
            detail: state.new_address_detail.trim().to_string(),
        }));
    }

    ui.separator();
    if !state.addresses_loaded {
        ui.label("Cargando direcciones...");
        return action;
    }

    ui.label(format!("Direcciones Guardadas ({})", state.addresses.len()));
    if state.addresses.is_empty() {
        ui.label(egui::RichText::new("Aún no tienes direcciones guardadas.").weak());
    } else {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for address in &state.addresses {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&address.name).strong());
                        ui.label(egui::RichText::new(&address.detail).weak());
                    });
                    if ui.button("🗑").clicked() {
                        action = Some(UiAction::Command(AppCommand::DeleteAddress {
                            id: address.id.clone(),
                        }));
                    }
                });
                ui.separator();
            }
        });
    }

    action
}
