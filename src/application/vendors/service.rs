//! Vendor service — application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service. The
//! service holds no state between calls: every operation is a single
//! round trip through the repository and the mapper.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::dto::VendorDto;
use super::mapper::VendorMapper;
use crate::domain::{DomainError, DomainResult, VendorRepository};

const ENTITY: &str = "Vendor";

/// Vendor use-cases exposed to the transport layer.
#[async_trait]
pub trait VendorService: Send + Sync {
    async fn get_all_vendors(&self) -> DomainResult<Vec<VendorDto>>;

    async fn get_vendor_by_id(&self, id: i64) -> DomainResult<VendorDto>;

    async fn add_vendor(&self, dto: VendorDto) -> DomainResult<VendorDto>;

    /// Replaces every field of the vendor with `id`. A missing vendor is
    /// created with that id.
    async fn update_vendor_by_id(&self, id: i64, dto: VendorDto) -> DomainResult<VendorDto>;

    /// Overlays the non-empty fields of `dto` onto an existing vendor.
    async fn update_fields_in_vendor_by_id(
        &self,
        id: i64,
        dto: VendorDto,
    ) -> DomainResult<VendorDto>;

    async fn delete_vendor(&self, id: i64) -> DomainResult<()>;
}

/// Default [`VendorService`] backed by any [`VendorRepository`].
pub struct VendorServiceImpl<R: VendorRepository + ?Sized> {
    repo: Arc<R>,
    mapper: VendorMapper,
}

impl<R: VendorRepository + ?Sized> VendorServiceImpl<R> {
    pub fn new(repo: Arc<R>, mapper: VendorMapper) -> Self {
        Self { repo, mapper }
    }
}

#[async_trait]
impl<R: VendorRepository + ?Sized> VendorService for VendorServiceImpl<R> {
    async fn get_all_vendors(&self) -> DomainResult<Vec<VendorDto>> {
        let vendors = self.repo.find_all().await?;
        debug!(count = vendors.len(), "Listed vendors");
        Ok(vendors
            .into_iter()
            .map(|v| self.mapper.vendor_to_dto(v))
            .collect())
    }

    async fn get_vendor_by_id(&self, id: i64) -> DomainResult<VendorDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|v| self.mapper.vendor_to_dto(v))
            .ok_or_else(|| DomainError::not_found_by_id(ENTITY, id))
    }

    async fn add_vendor(&self, dto: VendorDto) -> DomainResult<VendorDto> {
        let mut vendor = self.mapper.dto_to_vendor(dto);
        vendor.id = None;

        let saved = self.repo.save(vendor).await?;
        info!(vendor_id = ?saved.id, name = %saved.name, "Vendor created");
        Ok(self.mapper.vendor_to_dto(saved))
    }

    async fn update_vendor_by_id(&self, id: i64, dto: VendorDto) -> DomainResult<VendorDto> {
        let mut vendor = self.mapper.dto_to_vendor(dto);
        vendor.id = Some(id);

        let saved = self.repo.save(vendor).await?;
        info!(vendor_id = id, name = %saved.name, "Vendor replaced");
        Ok(self.mapper.vendor_to_dto(saved))
    }

    async fn update_fields_in_vendor_by_id(
        &self,
        id: i64,
        dto: VendorDto,
    ) -> DomainResult<VendorDto> {
        let Some(mut vendor) = self.repo.find_by_id(id).await? else {
            return Err(DomainError::not_found_by_id(ENTITY, id));
        };

        if !dto.name.is_empty() {
            vendor.name = dto.name;
        }

        let saved = self.repo.save(vendor).await?;
        info!(vendor_id = id, name = %saved.name, "Vendor patched");
        Ok(self.mapper.vendor_to_dto(saved))
    }

    async fn delete_vendor(&self, id: i64) -> DomainResult<()> {
        self.repo.delete_by_id(id).await?;
        info!(vendor_id = id, "Vendor deleted");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
