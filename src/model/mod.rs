/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Request bodies and their wire encoding
pub mod body;
/// HTTP transport helpers
pub mod http;
/// Typed request models for API calls
pub mod requests;
/// Response model and HTTP status strings
pub mod responses;
