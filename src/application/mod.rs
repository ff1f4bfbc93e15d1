/// Service interfaces, one trait per REST resource
pub mod interfaces;
/// Service implementations over the shared transport
pub mod services;
