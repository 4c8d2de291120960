use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::application::{DeleteApplicationResponse, NewApplicationRequest, UpdateApplicationRequest},
    errors::AppError,
    use_cases::extractors::Identity,
    AppState,
};

#[instrument(skip(identity, state), fields(owner = %identity.owner_id()))]
pub async fn list_applications(
    identity: Identity,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let applications = state
        .application_handler
        .list_applications(identity.owner_id())
        .await?;

    Ok(HttpResponse::Ok().json(applications))
}

#[instrument(skip(identity, state), fields(owner = %identity.owner_id()))]
pub async fn get_application(
    identity: Identity,
    application_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let application = state
        .application_handler
        .get_application(identity.owner_id(), &application_id)
        .await?;

    Ok(HttpResponse::Ok().json(application))
}

#[instrument(skip(identity, state, data), fields(owner = %identity.owner_id()))]
pub async fn create_application(
    identity: Identity,
    state: web::Data<AppState>,
    data: web::Json<NewApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let application = state
        .application_handler
        .create_application(identity.owner_id(), data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(application))
}

#[instrument(skip(identity, state, data), fields(owner = %identity.owner_id()))]
pub async fn update_application(
    identity: Identity,
    application_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let application = state
        .application_handler
        .update_application(identity.owner_id(), &application_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(application))
}

#[instrument(skip(identity, state), fields(owner = %identity.owner_id()))]
pub async fn delete_application(
    identity: Identity,
    application_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .application_handler
        .delete_application(identity.owner_id(), &application_id)
        .await?;

    Ok(HttpResponse::Ok().json(DeleteApplicationResponse::default()))
}
