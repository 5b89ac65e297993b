pub mod app;
pub mod components;
pub mod router;
pub mod state;

pub use app::SuperApp;
pub use router::{ChatTarget, Screen};

use crate::common::AppCommand;
use crate::common::types::RideDetails;

/// Outcome of rendering one screen for one frame.
#[derive(Debug, Clone)]
pub enum UiAction {
    Navigate(Screen),
    Command(AppCommand),
    /// Create-or-reuse a chat with a partner and open it.
    StartChat {
        partner_id: String,
        partner_name: String,
    },
    RequestRide(RideDetails),
    BeginPayment,
    CancelSearch,
    CancelTrip,
}
