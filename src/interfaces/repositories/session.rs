use actix_web::HttpRequest;

use crate::entities::owner::OwnerId;

/// Maps an inbound request to the authenticated user, if any.
///
/// Handlers only ever see the resolved [`OwnerId`]; how the identity is
/// proven (token format, cookie, provider) stays behind this trait.
pub trait SessionResolver: Send + Sync {
    fn resolve_identity(&self, req: &HttpRequest) -> Option<OwnerId>;
}
