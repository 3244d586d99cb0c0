//! Gatehouse: a small authentication backend.
//!
//! Authenticates users against a credential store, issues short-lived signed
//! access tokens alongside cookie-confined refresh tokens, and gates protected
//! routes with a session middleware. Sessions are stateless: validity is
//! carried entirely by the token's signature and expiry.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
