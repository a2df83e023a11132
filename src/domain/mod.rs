//! Domain layer: entities and repository ports

pub mod vendor;

pub use vendor::{Vendor, VendorRepository};

pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
