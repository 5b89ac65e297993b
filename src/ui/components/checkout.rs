use eframe::egui;

use crate::cart::{format_money, DELIVERY_FEE};
use crate::common::types::Store;
use crate::ui::state::AppState;
use crate::ui::{Screen, UiAction};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, store: &Store) -> Option<UiAction> {
    let mut action = None;
    let processing = state.payment.is_some();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!processing, egui::Button::new("←"))
            .clicked()
        {
            action = Some(UiAction::Navigate(Screen::StoreDetail(store.clone())));
        }
        ui.heading("Finalizar Pedido 🛒");
    });
    ui.separator();

    if state.cart.is_empty() {
        ui.colored_label(
            egui::Color32::RED,
            "No hay elementos en el carrito para procesar.",
        );
        if ui.button("Volver a Domicilios").clicked() {
            action = Some(UiAction::Navigate(Screen::Domicilios));
        }
        return action;
    }

    ui.label(format!("{} — {}", store.name, store.cuisine));
    ui.add_space(6.0);
    ui.label("Dirección de Entrega");
    ui.add_enabled(
        !processing,
        egui::TextEdit::singleline(&mut state.delivery_address),
    );
    ui.add_space(6.0);

    ui.label("Tu Pedido");
    let mut remove = None;
    for line in state.cart.lines() {
        ui.horizontal(|ui| {
            ui.label(format!("{} x {}", line.quantity, line.product.nombre));
            ui.label(format_money(line.subtotal()));
            if !processing && ui.button("−").clicked() {
                remove = Some(line.product.id);
            }
        });
    }
    if let Some(product_id) = remove {
        state.cart.remove_one(product_id);
    }

    ui.separator();
    ui.label(format!("Subtotal: {}", format_money(state.cart.subtotal())));
    ui.label(format!("Costo de Envío: {}", format_money(DELIVERY_FEE)));
    ui.label(
        egui::RichText::new(format!(
            "Total a Pagar: {}",
            format_money(state.cart.total())
        ))
        .strong(),
    );
    ui.add_space(8.0);

    if processing {
        ui.add_enabled(false, egui::Button::new("Procesando Pago..."));
    } else {
        let label = format!("Realizar Pedido ({})", format_money(state.cart.total()));
        if ui.button(label).clicked() {
            action = Some(UiAction::BeginPayment);
        }
    }

    action
}
