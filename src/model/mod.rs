/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Request and response types exchanged with the HTTP transport
pub mod http;
/// Response envelope unwrapping
pub mod responses;
/// Retry policy for connection failures
pub mod retry;
