pub mod config;
pub mod diagram;
pub mod i18n;
pub mod server;
