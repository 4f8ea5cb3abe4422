//! FloatChat - Argo float data service
//!
//! An in-memory store of floats and their depth profiles, a keyword-driven
//! query pipeline with history, delimited-text export, and an HTTP API.

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod store;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
