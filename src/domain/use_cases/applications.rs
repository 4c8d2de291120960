use validator::Validate;

use crate::{
    entities::{
        application::{
            ApplicationChanges, ApplicationFields, ApplicationRecord, NewApplicationRequest,
            UpdateApplicationRequest,
        },
        owner::OwnerId,
    },
    errors::AppError,
    repositories::application::ApplicationRepository,
    utils::valid_uuid::valid_uuid,
};

fn not_found() -> AppError {
    AppError::NotFound("Application not found".to_string())
}

pub struct ApplicationHandler<R>
where
    R: ApplicationRepository,
{
    pub application_repo: R,
}

impl<R> ApplicationHandler<R>
where
    R: ApplicationRepository,
{
    pub fn new(application_repo: R) -> Self {
        ApplicationHandler { application_repo }
    }

    /// Lists the owner's applications, newest first
    pub async fn list_applications(&self, owner_id: &OwnerId) -> Result<Vec<ApplicationRecord>, AppError> {
        self.application_repo.list(owner_id).await
    }

    /// Retrieves one of the owner's applications by its ID
    pub async fn get_application(&self, owner_id: &OwnerId, id: &str) -> Result<ApplicationRecord, AppError> {
        let valid_id = valid_uuid(id)?;

        self.application_repo
            .get(&valid_id, owner_id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a new application owned by `owner_id`
    pub async fn create_application(
        &self,
        owner_id: &OwnerId,
        request: NewApplicationRequest,
    ) -> Result<ApplicationRecord, AppError> {
        let request = request.normalized();
        request.validate()?;

        let fields = ApplicationFields::try_from(request)?;

        let application = self.application_repo.create(owner_id, &fields).await?;
        tracing::info!(application_id = %application.id, "Application created");

        Ok(application)
    }

    /// Applies a partial update to one of the owner's applications
    pub async fn update_application(
        &self,
        owner_id: &OwnerId,
        id: &str,
        request: UpdateApplicationRequest,
    ) -> Result<ApplicationRecord, AppError> {
        let request = request.normalized();
        request.validate()?;

        let changes = ApplicationChanges::try_from(request)?;
        let valid_id = valid_uuid(id)?;

        self.application_repo
            .update(&valid_id, owner_id, &changes)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes one of the owner's applications
    pub async fn delete_application(&self, owner_id: &OwnerId, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        if self.application_repo.delete(&valid_id, owner_id).await? {
            tracing::info!(application_id = %valid_id, "Application deleted");
            Ok(())
        } else {
            Err(not_found())
        }
    }
}
