use std::time::Instant;

use eframe::egui;

use crate::cart::format_money;
use crate::common::types::OrderSummary;
use crate::ui::state::AppState;
use crate::ui::{Screen, UiAction};

pub fn render(
    ui: &mut egui::Ui,
    state: &AppState,
    summary: &OrderSummary,
    now: Instant,
) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::Home));
        }
        ui.heading("Seguimiento de Pedido");
    });
    ui.separator();

    if let Some(trip) = &state.trip {
        let delivered = trip.is_delivered(now);
        let status = trip.status_text(now, &summary.store_name);
        let color = if delivered {
            egui::Color32::DARK_GREEN
        } else {
            egui::Color32::from_rgb(67, 56, 202)
        };
        ui.horizontal(|ui| {
            ui.label("🚚");
            ui.colored_label(color, status);
        });
        ui.add(egui::ProgressBar::new(trip.progress(now)));

        if !delivered {
            if trip.cancel_requested() {
                ui.label(egui::RichText::new("Cancelación solicitada...").weak());
            } else if ui.button("Cancelar Pedido").clicked() {
                action = Some(UiAction::CancelTrip);
            }
        }
    }

    ui.add_space(8.0);
    ui.label(format!("Tienda: {}", summary.store_name));
    ui.label(format!("Entrega en: {}", summary.destination));
    ui.label(
        egui::RichText::new(format!("Total Pagado: {}", format_money(summary.total))).strong(),
    );

    ui.add_space(8.0);
    if ui.button("Finalizar y Volver al Inicio").clicked() {
        action = Some(UiAction::Navigate(Screen::Home));
    }

    action
}
