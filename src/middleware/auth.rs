//! JWT identity middleware
//!
//! Decodes the bearer token on every API request and attaches the caller's
//! [`CurrentUser`] to the request extensions. Requests without a valid token
//! continue anonymously; the role guards in [`super::roles`] decide what an
//! anonymous caller may reach.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{config::AuthConfig, models::Role, utils::AppError, AppState};

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Role names, e.g. `admin` or `ROLE_ADMIN`
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Not before timestamp
    pub nbf: i64,
    /// JWT ID (unique identifier for this token)
    pub jti: String,
}

/// The signed-in caller for the current request
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub email: String,
    pub name: String,
    pub roles: Vec<Role>,
}

impl CurrentUser {
    /// Resolve roles from token claims and the configured admin list
    ///
    /// Every authenticated caller is a user; unknown role names are ignored.
    pub fn from_claims(claims: Claims, auth: &AuthConfig) -> Self {
        let mut roles = vec![Role::User];

        let admin_by_claim = claims
            .roles
            .iter()
            .filter_map(|r| r.parse::<Role>().ok())
            .any(|r| r == Role::Admin);
        if admin_by_claim || auth.is_admin_email(&claims.email) {
            roles.push(Role::Admin);
        }

        let name = if claims.name.is_empty() {
            claims.email.clone()
        } else {
            claims.name
        };

        Self {
            email: claims.email,
            name,
            roles,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// Extractor for CurrentUser from request extensions
///
/// Anonymous requests are rejected with 403.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::forbidden("Authentication required"))
    }
}

/// Create a new JWT access token
pub fn create_access_token(
    email: &str,
    name: &str,
    roles: Vec<String>,
    secret: &str,
    expiry_hours: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiry_hours as i64);

    let claims = Claims {
        sub: email.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        roles,
        iat: now.timestamp(),
        exp: exp.timestamp(),
        nbf: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate and decode a JWT token
pub fn validate_token(
    token: &str,
    secret: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.validate_nbf = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
}

/// Identity middleware
///
/// Never rejects: a missing, malformed, or expired token leaves the request
/// anonymous.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let bearer = request.headers().typed_get::<Authorization<Bearer>>();

    if let Some(Authorization(bearer)) = bearer {
        match validate_token(bearer.token(), &state.config.auth.jwt_secret) {
            Ok(token_data) => {
                let user = CurrentUser::from_claims(token_data.claims, &state.config.auth);
                debug!(email = %user.email, admin = user.is_admin(), "Authenticated request");
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                debug!(error = %e, "Ignoring invalid bearer token");
            }
        }
    }

    next.run(request).await
}
