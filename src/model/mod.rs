/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Raw HTTP responses, error mapping and query encoding
pub mod http;
/// Request option models for API calls
pub mod requests;
/// Response envelopes from API calls
pub mod responses;
