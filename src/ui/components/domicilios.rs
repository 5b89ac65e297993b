use eframe::egui;

use crate::common::types::Store;
use crate::ui::{Screen, UiAction};

/// Restaurant listing shown before picking a menu. The stores are
/// local fixtures; only their menus come from the delivery backend.
pub fn stores() -> Vec<Store> {
    vec![
        Store {
            name: "Pizzería Napoli".to_string(),
            cuisine: "Italiana".to_string(),
        },
        Store {
            name: "Burger Station".to_string(),
            cuisine: "Comida rápida".to_string(),
        },
        Store {
            name: "La Esquina Criolla".to_string(),
            cuisine: "Típica".to_string(),
        },
    ]
}

pub fn render(ui: &mut egui::Ui) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            action = Some(UiAction::Navigate(Screen::Home));
        }
        ui.heading("Domicilios 🍕");
    });
    ui.separator();

    for store in stores() {
        let label = format!("{} — {}", store.name, store.cuisine);
        if ui.button(label).clicked() {
            action = Some(UiAction::Navigate(Screen::StoreDetail(store.clone())));
        }
    }

    action
}
