//! Generic CRUD, pagination and substring search over a single table.
//!
//! One `RecordManager` is instantiated per managed entity. Listing is ordered
//! by primary key; search bypasses pagination and returns every match.
//! Database failures are logged here and handed back as `ServiceError::Db`.

use std::fmt::Debug;
use std::marker::PhantomData;

use common::pagination::{PageInfo, Pagination};
use models::errors::ModelError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::errors::ServiceError;

/// Binds an entity to the record-management pattern.
pub trait ManagedEntity: EntityTrait {
    /// Every column except the key; submitted on create and on full-replace update.
    type Fields: IntoActiveModel<Self::ActiveModel> + Clone + Debug + Send;

    /// Singular label used in logs and user-facing messages.
    const LABEL: &'static str;

    fn id_column() -> Self::Column;

    /// Text column matched by `search`.
    fn search_column() -> Self::Column;

    fn id_of(model: &Self::Model) -> i32;

    fn validate(fields: &Self::Fields) -> Result<(), ModelError>;
}

/// One page of records plus its position in the full set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<M> {
    pub records: Vec<M>,
    pub info: PageInfo,
}

pub struct RecordManager<E: ManagedEntity> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E: ManagedEntity> Clone for RecordManager<E> {
    fn clone(&self) -> Self { Self::new(self.db.clone()) }
}

impl<E: ManagedEntity> RecordManager<E> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _entity: PhantomData } }
}

fn db_failure<E: ManagedEntity>(op: &'static str, err: DbErr) -> ServiceError {
    error!(entity = E::LABEL, op, error = %err, "database operation failed");
    ServiceError::Db(err.to_string())
}

impl<E> RecordManager<E>
where
    E: ManagedEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
{
    /// Slice `[page * per_page, page * per_page + per_page)` of the table, with the
    /// unfiltered total needed for next/prev decisions.
    #[instrument(skip(self), fields(entity = E::LABEL))]
    pub async fn list(&self, page: Pagination) -> Result<Page<E::Model>, ServiceError> {
        let (page_idx, per_page) = page.checked().ok_or_else(|| {
            ServiceError::Validation("page size must be positive and the page must be in range".into())
        })?;
        let paginator = E::find().order_by_asc(E::id_column()).paginate(&self.db, per_page);
        let total = paginator.num_items().await.map_err(|e| db_failure::<E>("count", e))?;
        let records = paginator.fetch_page(page_idx).await.map_err(|e| db_failure::<E>("list", e))?;
        debug!(entity = E::LABEL, page = page_idx, rows = records.len(), total, "page listed");
        Ok(Page { records, info: PageInfo::new(page_idx, per_page, total) })
    }

    /// Every record whose search column contains `term`; an empty term matches all.
    #[instrument(skip(self), fields(entity = E::LABEL))]
    pub async fn search(&self, term: &str) -> Result<Vec<E::Model>, ServiceError> {
        let rows = E::find()
            .filter(E::search_column().contains(term))
            .order_by_asc(E::id_column())
            .all(&self.db)
            .await
            .map_err(|e| db_failure::<E>("search", e))?;
        debug!(entity = E::LABEL, rows = rows.len(), "search finished");
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Option<E::Model>, ServiceError> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(|e| db_failure::<E>("get", e))
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        E::find().count(&self.db).await.map_err(|e| db_failure::<E>("count", e))
    }

    /// Validate then insert; the returned model carries the assigned key.
    #[instrument(skip(self), fields(entity = E::LABEL))]
    pub async fn create(&self, fields: E::Fields) -> Result<E::Model, ServiceError> {
        E::validate(&fields)?;
        let created = fields
            .into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| db_failure::<E>("create", e))?;
        info!(entity = E::LABEL, id = E::id_of(&created), "record created");
        Ok(created)
    }

    /// Replace every non-key column of `id`. A missing id is logged and ignored.
    #[instrument(skip(self), fields(entity = E::LABEL))]
    pub async fn update(&self, id: i32, fields: E::Fields) -> Result<(), ServiceError> {
        E::validate(&fields)?;
        let res = E::update_many()
            .set(fields.into_active_model())
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| db_failure::<E>("update", e))?;
        if res.rows_affected == 0 {
            warn!(entity = E::LABEL, id, "update skipped: record not found");
        } else {
            info!(entity = E::LABEL, id, "record updated");
        }
        Ok(())
    }

    /// Delete by key; deleting a missing id is a no-op.
    #[instrument(skip(self), fields(entity = E::LABEL))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| db_failure::<E>("delete", e))?;
        if res.rows_affected == 0 {
            debug!(entity = E::LABEL, id, "delete skipped: record not found");
        } else {
            info!(entity = E::LABEL, id, "record deleted");
        }
        Ok(())
    }
}
