//! Database repository implementations

pub mod vendor_repository;

pub use vendor_repository::SeaOrmVendorRepository;
