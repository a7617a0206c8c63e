use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

/// Identity of the caller, as asserted by the upstream auth proxy.
///
/// The proxy terminates authentication and forwards the verified identity
/// in request headers; this service only consumes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Email address, used as the actor identity in audit records.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Roles granted to the user.
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    fn from_headers(req: &HttpRequest) -> Option<Self> {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let email = header("X-User-Email")?;
        if email.trim().is_empty() {
            return None;
        }

        let name = header("X-User-Name").unwrap_or_else(|| email.clone());
        let roles = header("X-User-Roles")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|role| !role.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self { email, name, roles })
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            Self::from_headers(req)
                .ok_or_else(|| ErrorUnauthorized("missing forwarded identity")),
        )
    }
}

/// Returns true when `roles` contains the `required` role.
pub fn check_role(required: &str, roles: &[String]) -> bool {
    roles.iter().any(|role| role == required)
}
