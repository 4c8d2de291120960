use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::owner::OwnerId, errors::AppError, AppState};

/// The caller's resolved identity.
///
/// Resolution happens when the extractor runs, at the top of the handler, so
/// an unauthenticated request is answered with 401 before any other extractor
/// or the repository is touched.
/// Usage: add `identity: Identity` as the first parameter of a handler.
#[derive(Debug, Clone)]
pub struct Identity(pub OwnerId);

impl Identity {
    pub fn owner_id(&self) -> &OwnerId {
        &self.0
    }
}

impl FromRequest for Identity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState missing while resolving identity");
            return ready(Err(AppError::InternalError("AppState is not configured".into()).into()));
        };

        match state.session_resolver.resolve_identity(req) {
            Some(owner_id) => ready(Ok(Identity(owner_id))),
            None => ready(Err(AppError::UnauthorizedAccess.into())),
        }
    }
}
