//! Extract the authenticated caller from headers set by the fronting authentication provider.

use crate::config::AuthSettings;
use crate::policy::Role;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::collections::BTreeSet;

/// Default header carrying the caller identity (e.g. an email).
pub const USER_HEADER: &str = "X-Auth-User";
/// Default header carrying comma-separated roles, e.g. `ROLE_USER,ROLE_ADMIN`.
pub const ROLES_HEADER: &str = "X-Auth-Roles";

/// Caller identity and role set. `identity` is `None` for unauthenticated requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Caller {
    pub identity: Option<String>,
    pub roles: BTreeSet<Role>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(identity: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Caller {
            identity: Some(identity.into()),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn has_role(&self, required: Role) -> bool {
        self.roles.iter().any(|r| r.satisfies(required))
    }
}

/// Unknown role names are skipped.
fn parse_roles(raw: &str) -> BTreeSet<Role> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v: &axum::http::HeaderValue| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Never rejects: a request without identity yields an anonymous caller and the guard decides.
#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let settings = parts.extensions.get::<AuthSettings>().cloned().unwrap_or_default();
        let Some(identity) = header_str(parts, &settings.user_header).map(str::to_string) else {
            return Ok(Caller::anonymous());
        };
        let roles = header_str(parts, &settings.roles_header)
            .map(parse_roles)
            .unwrap_or_default();
        Ok(Caller {
            identity: Some(identity),
            roles,
        })
    }
}
