/// Identity provider settings for bearer token validation.
///
/// The authority is the token issuer's base URL; its JWKS document is
/// fetched from `{authority}/.well-known/jwks.json`.
pub struct AuthConfig {
    pub authority: String,
    pub audience: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            authority: std::env::var("AUTH_AUTHORITY").expect("AUTH_AUTHORITY must be set"),
            audience: std::env::var("AUTH_AUDIENCE").expect("AUTH_AUDIENCE must be set"),
        }
    }
}
