use eframe::egui;

use crate::cart::format_money;
use crate::common::types::Store;
use crate::ui::state::AppState;
use crate::ui::{Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, store: &Store) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::Domicilios));
        }
        ui.heading(&store.name);
        ui.label(egui::RichText::new(&store.cuisine).weak());
    });
    ui.separator();

    match &state.menu {
        None => {
            ui.label("Cargando menú...");
        }
        Some(products) => {
            let products = products.clone();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for product in &products {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&product.nombre).strong());
                            ui.label(egui::RichText::new(&product.descripcion).weak());
                            ui.label(format_money(product.precio));
                        });
                        if ui.button("+").clicked() {
                            state.cart.add(product);
                        }
                    });
                    ui.separator();
                }
            });
        }
    }

    if !state.cart.is_empty() {
        let label = format!(
            "Ver Carrito ({}) — {}",
            state.cart.total_items(),
            format_money(state.cart.total())
        );
        if ui.button(label).clicked() {
            action = Some(UiAction::Navigate(Screen::Checkout(store.clone())));
        }
    }

    action
}
