use crate::common::types::{OrderRequest, Product};
use crate::error::DeliveryError;

/// Backup menu used when the delivery backend cannot be reached.
pub fn fallback_menu() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            nombre: "Pizza Margarita".to_string(),
            precio: 12.0,
            descripcion: "Queso y tomate natural".to_string(),
        },
        Product {
            id: 2,
            nombre: "Hamburguesa Pro".to_string(),
            precio: 8.0,
            descripcion: "Doble carne y queso cheddar".to_string(),
        },
        Product {
            id: 3,
            nombre: "Refresco Familiar".to_string(),
            precio: 3.0,
            descripcion: "2 Litros".to_string(),
        },
    ]
}

/// Client for the delivery REST backend. Only HTTP success/failure is
/// interpreted; there is no richer response contract.
pub struct DeliveryApi {
    client: reqwest::Client,
    host: String,
}

impl DeliveryApi {
    pub fn new(host: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            host,
        }
    }

    /// Fetch the menu, falling back to the local backup on any error.
    pub async fn fetch_products(&self) -> Vec<Product> {
        match self.try_fetch_products().await {
            Ok(products) => products,
            Err(err) => {
                log::warn!("Menu fetch failed ({err}); using local backup menu");
                fallback_menu()
            }
        }
    }

    async fn try_fetch_products(&self) -> Result<Vec<Product>, DeliveryError> {
        let url = format!("{}/domicilio/api/productos/", self.host);
        let products = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Product>>()
            .await?;
        Ok(products)
    }

    pub async fn submit_order(&self, order: &OrderRequest) -> Result<(), DeliveryError> {
        let url = format!("{}/domicilio/api/pedidos/", self.host);
        let response = self.client.post(&url).json(order).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(DeliveryError::Rejected(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_payload_uses_backend_field_names() {
        let order = OrderRequest {
            cliente_id: 2,
            items: vec![1, 2, 2],
            monto_total: 31.5,
            estado: "Pendiente".to_string(),
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["cliente_id"], 2);
        assert_eq!(value["items"], serde_json::json!([1, 2, 2]));
        assert_eq!(value["monto_total"], 31.5);
        assert_eq!(value["estado"], "Pendiente");
    }

    #[test]
    fn fallback_menu_matches_backup_data() {
        let menu = fallback_menu();
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[0].nombre, "Pizza Margarita");
        assert_eq!(menu[0].precio, 12.0);
        assert_eq!(menu[1].precio, 8.0);
        assert_eq!(menu[2].precio, 3.0);
    }

    #[tokio::test]
    async fn unreachable_host_falls_back_to_backup_menu() {
        // Nothing listens on this port; the connection is refused.
        let api = DeliveryApi::new("http://127.0.0.1:1".to_string());
        let menu = api.fetch_products().await;
        assert_eq!(menu.len(), 3);
    }
}
