//! HTTP and CLI surface over the validation engine.

pub mod check;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
