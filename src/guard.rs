use crate::error::{Error, Result};
use crate::models::user::{Role, Session};

/// Pure access check. `None` session always fails; an empty role list means
/// any authenticated user passes.
pub fn can_access(session: Option<&Session>, required: &[Role]) -> bool {
    match session {
        None => false,
        Some(s) => required.is_empty() || required.contains(&s.role),
    }
}

/// Same check, but yields the session for the caller and an error describing
/// the denial otherwise.
pub fn ensure_access<'a>(session: Option<&'a Session>, required: &[Role]) -> Result<&'a Session> {
    match session {
        None => Err(Error::Unauthorized("Not signed in".to_string())),
        Some(s) if required.is_empty() || required.contains(&s.role) => Ok(s),
        Some(_) => Err(Error::Unauthorized(format!(
            "Requires one of roles: {}",
            required
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}
