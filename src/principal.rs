use crate::error::AppError;

/// The authenticated caller, resolved by the auth middleware and handed to
/// every service operation explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub is_admin: bool,
}

impl Principal {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_admin_rejects_regular_users() {
        let user = Principal { user_id: 7, is_admin: false };
        assert!(matches!(user.require_admin(), Err(AppError::Forbidden)));

        let admin = Principal { user_id: 1, is_admin: true };
        assert!(admin.require_admin().is_ok());
    }
}
