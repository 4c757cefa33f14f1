/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/
/// Prediction and comparison models
pub mod analysis;
/// Login models and backend error body
pub mod auth;
/// HTTP request helper with throttling and status mapping
pub mod http;
/// Quote, snapshot and market status models
pub mod market;
/// Article and sentiment models
pub mod news;
/// Optimization, shield, profile and ledger models
pub mod portfolio;
/// Lenient field deserializers
pub mod serialization;
