//! # todoql - a GraphQL gateway for users and their todos
//!
//! todoql exposes create/read/update/delete operations over two document
//! collections, `User` and `Todo`, through a single GraphQL endpoint. A todo
//! belongs to a user through its `userID` field; the link is a convention,
//! not a constraint, so deleting a user leaves their todos in place.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve against a local MongoDB
//! todoql serve --store-uri mongodb://127.0.0.1:27017 --database graphql
//!
//! # Or without a database
//! todoql serve --store-uri memory://
//!
//! # Print the schema
//! todoql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (User, Todo and their patches)
//! - [`server`]: HTTP server
//! - [`store`]: Document store adapter and backends

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads `todoql.toml`; CLI flags and environment variables override it.
pub mod config;

/// Error types and result aliases.
///
/// Defines `GatewayError`, its `ErrorKind` and `Result<T>`.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models for users and todos.
pub mod model;

pub mod server;

/// Document store adapter.
///
/// Filter-based CRUD over named collections, backed by MongoDB or memory.
pub mod store;
