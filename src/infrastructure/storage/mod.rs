//! Non-SQL repository implementations

pub mod memory;

pub use memory::InMemoryVendorRepository;
