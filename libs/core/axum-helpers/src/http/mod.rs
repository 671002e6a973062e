//! HTTP middleware module.
//!
//! Currently CORS only; request tracing and compression are applied by
//! [`create_router`](crate::server::create_router).

pub mod cors;

pub use cors::{cors_layer_from_env, create_cors_layer, create_permissive_cors_layer};
