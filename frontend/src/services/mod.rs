pub mod api;
pub mod data_source;
pub mod logging;
pub mod telegram;

pub use data_source::DataSource;
pub use logging::ConsoleLogger;
pub use telegram::TelegramWebApp;
