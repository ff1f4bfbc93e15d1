/// User agent string sent with every request to identify this client to the Relayo API
pub const USER_AGENT: &str = concat!("relayo-client/", env!("CARGO_PKG_VERSION"));
/// Base URL used when none is configured in the environment
pub const DEFAULT_BASE_URL: &str = "https://api.relayo.com.br";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of retries after a connection failure
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default base delay in seconds between retries
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
/// Default page size for the paginated and search helpers
pub const DEFAULT_PER_PAGE: u32 = 10;
/// Media type sent in the `Accept` and `Content-Type` headers
pub const JSON_MEDIA_TYPE: &str = "application/json";
/// Message used for every 429 response regardless of its body
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";
/// Fallback message for 401 responses without a usable body
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Fallback message for other error responses without a usable body
pub const API_ERROR_MESSAGE: &str = "API error";
