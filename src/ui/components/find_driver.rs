use std::time::Instant;

use eframe::egui;

use crate::cart::format_money;
use crate::common::types::RideDetails;
use crate::sim::SearchPhase;
use crate::ui::state::AppState;
use crate::ui::UiAction;

pub fn render(
    ui: &mut egui::Ui,
    state: &AppState,
    ride: &RideDetails,
    now: Instant,
) -> Option<UiAction> {
    let mut action = None;
    let Some(search) = &state.driver_search else {
        return None;
    };

    ui.heading(search.status_text(now));
    let searching = search.phase(now) == SearchPhase::Searching;
    if searching {
        ui.label(egui::RichText::new("Estamos buscando el conductor mejor calificado.").weak());
    } else {
        ui.label(egui::RichText::new("Dirigiéndote a la pantalla de seguimiento...").weak());
    }
    ui.add_space(8.0);
    ui.add(egui::ProgressBar::new(f32::from(search.progress(now)) / 100.0).show_percentage());

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label("Detalles del Viaje");
        ui.label(format!("Origen: {}", ride.origin));
        ui.label(format!("Destino: {}", ride.destination));
        ui.label(format!("Tarifa: {}", format_money(ride.fare)));
    });

    if searching && !search.cancel_requested() && ui.button("Cancelar Solicitud").clicked() {
        action = Some(UiAction::CancelSearch);
    }

    action
}
