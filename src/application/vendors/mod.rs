//! Vendor use-cases

pub mod dto;
pub mod mapper;
pub mod seed;
pub mod service;

pub use dto::{VendorDto, VendorPatchDto};
pub use mapper::{VendorMapper, VENDOR_BASE_PATH};
pub use seed::{seed_vendors, DEFAULT_SEED_VENDORS};
pub use service::{VendorService, VendorServiceImpl};
