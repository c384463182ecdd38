use crate::error::ApiError;
use crate::models::users::{Model as User, Roles};

/// Account, gig and payout-detail writes are admin-only. Every
/// authenticated user is at least an operator, so report, withdraw and
/// expenditure writes need no extra check beyond the extractor.
pub fn require_admin(user: &User) -> Result<(), ApiError> {
    if user.role == Roles::Admin {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "This action requires the admin role".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user_with_role(role: Roles) -> User {
        User {
            id: Uuid::new_v4(),
            clerk_id: "user_test".to_string(),
            email: "ops@example.com".to_string(),
            name: None,
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn admin_passes() {
        assert!(require_admin(&user_with_role(Roles::Admin)).is_ok());
    }

    #[test]
    fn operator_is_forbidden() {
        let err = require_admin(&user_with_role(Roles::Operator)).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}
