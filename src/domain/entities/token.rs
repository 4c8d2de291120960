use serde::{Deserialize, Serialize};

/// Claims carried by a session token issued by the identity provider.
///
/// `sub` is the user's stable id and becomes the record owner. Any other
/// claims the provider adds are ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}
