//! HTTP server for pipeline analysis.
//!
//! This crate exposes [`pipeline_dag`] over HTTP for a pipeline editor
//! front end.
//!
//! # Routes
//!
//! - `GET /` - liveness check, returns `{"Ping": "Pong"}`
//! - `POST /pipelines/parse` - returns `{"num_nodes", "num_edges", "is_dag"}`
//! - `GET /schema` - JSON Schemas of the request and response bodies
//!
//! Malformed bodies are rejected with a client error before analysis.
//! Cross-origin requests are allowed from one configured origin.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::PipelineServer;
