//! Application layer: use-case services built on the domain ports

pub mod vendors;

pub use vendors::{VendorDto, VendorMapper, VendorPatchDto, VendorService, VendorServiceImpl};
