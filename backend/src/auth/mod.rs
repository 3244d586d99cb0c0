//! Authentication subsystem: token lifecycle, session middleware, and the
//! register/login/refresh/logout endpoints.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
