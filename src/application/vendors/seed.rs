//! Sample data loaded into an empty vendor store at startup

use tracing::info;

use crate::domain::{DomainResult, Vendor, VendorRepository};

pub const DEFAULT_SEED_VENDORS: [&str; 5] = [
    "Western Tasty Fruits Ltd.",
    "Exotic Fruits Company",
    "Home Fruits",
    "Fun Fresh Fruits Ltd.",
    "Nuts for Nuts Company",
];

/// Insert `names` as new vendors if the store is empty.
///
/// Returns the number of vendors inserted (0 when the store already had data).
pub async fn seed_vendors(repo: &dyn VendorRepository, names: &[String]) -> DomainResult<usize> {
    if !repo.find_all().await?.is_empty() {
        return Ok(0);
    }

    for name in names {
        repo.save(Vendor::new(name.clone())).await?;
    }

    if !names.is_empty() {
        info!(count = names.len(), "Sample vendors loaded");
    }
    Ok(names.len())
}
