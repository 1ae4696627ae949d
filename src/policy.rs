//! Access policy: minimum role per operation, checked before any storage access.

use crate::error::AppError;
use crate::extractors::caller::Caller;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Admin satisfies a user requirement; user does not satisfy admin.
    pub fn satisfies(self, required: Role) -> bool {
        self >= required
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Accepts `ROLE_USER`, `USER`, `user` and the admin equivalents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bare = match s.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("role_") => &s[5..],
            _ => s,
        };
        match bare.to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(AppError::BadRequest(format!("unknown role: {}", s))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("ROLE_USER"),
            Role::Admin => f.write_str("ROLE_ADMIN"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn required_role(self) -> Role {
        match self {
            Operation::List | Operation::Get => Role::User,
            Operation::Create | Operation::Update | Operation::Delete => Role::Admin,
        }
    }
}

/// Reject the caller unless authenticated and holding the role `operation` requires.
pub fn guard(caller: &Caller, operation: Operation) -> Result<(), AppError> {
    let required = operation.required_role();
    if !caller.is_authenticated() {
        tracing::warn!(?operation, "unauthenticated request denied");
        return Err(AppError::AccessDenied);
    }
    if !caller.has_role(required) {
        tracing::warn!(
            user = caller.identity.as_deref().unwrap_or_default(),
            ?operation,
            %required,
            "insufficient role"
        );
        return Err(AppError::AccessDenied);
    }
    Ok(())
}
