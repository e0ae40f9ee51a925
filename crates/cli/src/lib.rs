// Re-export command modules
pub mod commands;
pub mod settings;

// Re-export commonly used types
pub use commands::{Commands, ShowArgs};
pub use settings::Settings;
