use eframe::egui;

use crate::cart::{estimate_fare, format_money};
use crate::common::types::RideDetails;
use crate::ui::state::AppState;
use crate::ui::{Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::Home));
        }
        ui.heading("Transporte");
    });
    ui.separator();

    ui.label("Origen");
    ui.text_edit_singleline(&mut state.origin_input);
    ui.label("Destino");
    ui.text_edit_singleline(&mut state.destination_input);

    let origin = state.origin_input.trim();
    let destination = state.destination_input.trim();
    let ready = !origin.is_empty() && !destination.is_empty();

    if ready {
        let fare = estimate_fare(origin, destination);
        ui.add_space(6.0);
        ui.label(format!("Tarifa estimada: {}", format_money(fare)));
        if ui.button("CONFIRMAR VIAJE").clicked() {
            action = Some(UiAction::RequestRide(RideDetails {
                origin: origin.to_string(),
                destination: destination.to_string(),
                fare,
            }));
        }
    } else {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Ingresa origen y destino para continuar").weak());
    }

    action
}
