/// Module containing the application service
pub mod application_service;
/// Module containing the WhatsApp callback configuration service
pub mod callback_configuration_service;
/// Module containing the WhatsApp delivery service
pub mod delivery_service;
/// Module containing the API integration service
pub mod integration_service;
/// Module containing the server service
pub mod server_service;
/// Module containing the WhatsApp instance service
pub mod whatsapp_service;

pub use crate::application::interfaces::application::*;
pub use crate::application::interfaces::callback_configuration::*;
pub use crate::application::interfaces::delivery::*;
pub use crate::application::interfaces::integration::*;
pub use crate::application::interfaces::server::*;
pub use crate::application::interfaces::whatsapp::*;
pub use application_service::*;
pub use callback_configuration_service::*;
pub use delivery_service::*;
pub use integration_service::*;
pub use server_service::*;
pub use whatsapp_service::*;
