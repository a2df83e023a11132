//! # Fruit Vendor Service
//!
//! REST service for a catalogue of fruit vendors: list, fetch, create,
//! replace, patch and delete.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: the `Vendor` entity and the `VendorRepository` port
//! - **application**: the `VendorService` use-cases and the DTO mapper
//! - **infrastructure**: SeaORM and in-memory repositories, migrations
//! - **interfaces**: axum REST API with Swagger documentation
//! - **server**: startup, graceful shutdown and logging setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmVendorRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
