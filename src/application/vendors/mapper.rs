//! Conversion between persisted vendors and their transport shape

use crate::domain::Vendor;

use super::dto::VendorDto;

/// Default base path for the vendor resource.
pub const VENDOR_BASE_PATH: &str = "/api/v1/vendors";

/// Field-by-field mapper between [`Vendor`] and [`VendorDto`].
#[derive(Debug, Clone)]
pub struct VendorMapper {
    base_path: String,
}

impl VendorMapper {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resource path of a vendor: `{base_path}/{id}`.
    pub fn vendor_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_path, id)
    }

    pub fn vendor_to_dto(&self, vendor: Vendor) -> VendorDto {
        VendorDto {
            vendor_url: vendor.id.map(|id| self.vendor_url(id)),
            id: vendor.id,
            name: vendor.name,
        }
    }

    /// `vendor_url` is dropped; it is never written back.
    pub fn dto_to_vendor(&self, dto: VendorDto) -> Vendor {
        Vendor {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl Default for VendorMapper {
    fn default() -> Self {
        Self::new(VENDOR_BASE_PATH)
    }
}
