//! Vendor transport representation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Vendor as seen by API clients.
///
/// `vendor_url` is derived from `id` whenever a vendor is mapped for
/// output. Any value supplied by a client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct VendorDto {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "vendor name must be 1-255 characters"))]
    #[schema(example = "Western Tasty Fruits Ltd.")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "/api/v1/vendors/1")]
    pub vendor_url: Option<String>,
}

impl VendorDto {
    /// Input body carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            vendor_url: None,
        }
    }
}

/// Partial update body. An empty or missing `name` leaves the stored name
/// untouched, so only the upper length bound is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct VendorPatchDto {
    #[serde(default)]
    #[validate(length(max = 255, message = "vendor name must be at most 255 characters"))]
    #[schema(example = "Nuts for Nuts Company")]
    pub name: String,
}

impl From<VendorPatchDto> for VendorDto {
    fn from(patch: VendorPatchDto) -> Self {
        VendorDto::named(patch.name)
    }
}
