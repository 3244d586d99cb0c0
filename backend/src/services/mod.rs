//! Business logic services over the injected collaborators.

pub mod stats_service;
pub mod user_service;
