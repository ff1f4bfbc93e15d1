/// Application service interface
pub mod application;
/// Callback configuration service interface
pub mod callback_configuration;
/// Delivery service interface
pub mod delivery;
/// Integration service interface
pub mod integration;
/// Server service interface
pub mod server;
/// WhatsApp instance service interface
pub mod whatsapp;
