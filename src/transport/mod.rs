/// Transport core: request building, auth injection, retry and error classification
pub mod http_client;
/// Seam over the underlying HTTP implementation
pub mod sender;

pub use http_client::HttpClient;
pub use sender::{HttpSend, ReqwestSender};
