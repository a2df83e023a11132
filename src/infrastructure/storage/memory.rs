//! In-memory vendor store

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, Vendor, VendorRepository};

/// In-memory storage for development and testing
pub struct InMemoryVendorRepository {
    vendors: DashMap<i64, Vendor>,
    vendor_counter: AtomicI64,
}

impl InMemoryVendorRepository {
    pub fn new() -> Self {
        Self {
            vendors: DashMap::new(),
            vendor_counter: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

impl Default for InMemoryVendorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VendorRepository for InMemoryVendorRepository {
    /// Ordered by id, which is also insertion order for store-assigned ids.
    async fn find_all(&self) -> DomainResult<Vec<Vendor>> {
        let mut vendors: Vec<Vendor> = self.vendors.iter().map(|e| e.value().clone()).collect();
        vendors.sort_by_key(|v| v.id);
        Ok(vendors)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Vendor>> {
        Ok(self.vendors.get(&id).map(|v| v.value().clone()))
    }

    async fn save(&self, mut vendor: Vendor) -> DomainResult<Vendor> {
        let id = match vendor.id {
            Some(id) => {
                // keep generated ids clear of explicitly upserted ones
                self.vendor_counter
                    .fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            // the counter parks at i64::MAX once that id is taken
            None => self
                .vendor_counter
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| {
                    (next < i64::MAX).then_some(next + 1)
                })
                .map_err(|_| DomainError::Storage("vendor id space exhausted".to_string()))?,
        };
        vendor.id = Some(id);
        self.vendors.insert(id, vendor.clone());
        Ok(vendor)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.vendors.remove(&id);
        Ok(())
    }
}
