//! SeaORM implementation of VendorRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, Vendor, VendorRepository};
use crate::infrastructure::database::entities::vendor;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

fn entity_to_domain(v: vendor::Model) -> Vendor {
    Vendor {
        id: Some(v.id),
        name: v.name,
    }
}

// ── SeaOrmVendorRepository ──────────────────────────────────────

pub struct SeaOrmVendorRepository {
    db: DatabaseConnection,
}

impl SeaOrmVendorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VendorRepository for SeaOrmVendorRepository {
    async fn find_all(&self) -> DomainResult<Vec<Vendor>> {
        let models = vendor::Entity::find()
            .order_by_asc(vendor::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Vendor>> {
        let model = vendor::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn save(&self, v: Vendor) -> DomainResult<Vendor> {
        let Some(id) = v.id else {
            let model = vendor::ActiveModel {
                id: NotSet,
                name: Set(v.name),
            };
            let result = model.insert(&self.db).await.map_err(db_err)?;
            debug!(vendor_id = result.id, "Vendor row inserted");
            return Ok(entity_to_domain(result));
        };

        let existing = vendor::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let result = match existing {
            Some(row) => {
                let mut model: vendor::ActiveModel = row.into();
                model.name = Set(v.name);
                model.update(&self.db).await.map_err(db_err)?
            }
            None => {
                let model = vendor::ActiveModel {
                    id: Set(id),
                    name: Set(v.name),
                };
                model.insert(&self.db).await.map_err(db_err)?
            }
        };
        debug!(vendor_id = result.id, "Vendor row upserted");
        Ok(entity_to_domain(result))
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        let result = vendor::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!(vendor_id = id, rows = result.rows_affected, "Vendor delete executed");
        Ok(())
    }
}
