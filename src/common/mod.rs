pub mod commands;
pub mod events;
pub mod types;

pub use commands::AppCommand;
pub use events::AppEvent;
