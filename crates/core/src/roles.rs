//! Well-known role name constants.
//!
//! These must match the `ck_users_role` constraint on the users table.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// All assignable roles.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_accepted() {
        assert!(validate_role(ROLE_ADMIN).is_ok());
        assert!(validate_role(ROLE_USER).is_ok());
    }

    #[test]
    fn unknown_role_rejected() {
        let err = validate_role("moderator").unwrap_err();
        assert!(err.contains("Invalid role 'moderator'"));
    }
}
