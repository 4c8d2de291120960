use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        application::{ApplicationChanges, ApplicationFields, ApplicationRecord},
        owner::OwnerId,
    },
    errors::AppError,
};

/// Ownership-scoped access to job application records.
///
/// Every read and write takes the caller's [`OwnerId`] and only ever touches
/// rows that belong to it. "Not found" is a value (`None` / `false`), never an
/// error, and it looks the same whether the id is missing or owned by someone
/// else.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;

    /// Records owned by `owner_id`, newest first.
    async fn list(&self, owner_id: &OwnerId) -> Result<Vec<ApplicationRecord>, AppError>;

    async fn get(&self, id: &Uuid, owner_id: &OwnerId) -> Result<Option<ApplicationRecord>, AppError>;

    async fn create(&self, owner_id: &OwnerId, fields: &ApplicationFields) -> Result<ApplicationRecord, AppError>;

    /// Applies `changes` to the owner's record. An empty change set returns the
    /// record as stored.
    async fn update(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
        changes: &ApplicationChanges,
    ) -> Result<Option<ApplicationRecord>, AppError>;

    async fn delete(&self, id: &Uuid, owner_id: &OwnerId) -> Result<bool, AppError>;
}

pub type DynApplicationRepo = Arc<dyn ApplicationRepository>;

#[async_trait]
impl<T> ApplicationRepository for Arc<T>
where
    T: ApplicationRepository + ?Sized,
{
    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }

    async fn list(&self, owner_id: &OwnerId) -> Result<Vec<ApplicationRecord>, AppError> {
        (**self).list(owner_id).await
    }

    async fn get(&self, id: &Uuid, owner_id: &OwnerId) -> Result<Option<ApplicationRecord>, AppError> {
        (**self).get(id, owner_id).await
    }

    async fn create(&self, owner_id: &OwnerId, fields: &ApplicationFields) -> Result<ApplicationRecord, AppError> {
        (**self).create(owner_id, fields).await
    }

    async fn update(
        &self,
        id: &Uuid,
        owner_id: &OwnerId,
        changes: &ApplicationChanges,
    ) -> Result<Option<ApplicationRecord>, AppError> {
        (**self).update(id, owner_id, changes).await
    }

    async fn delete(&self, id: &Uuid, owner_id: &OwnerId) -> Result<bool, AppError> {
        (**self).delete(id, owner_id).await
    }
}
