//! Position store trait.

use super::users_model::User;
use crate::errors::Result;

/// Supplies users and their holdings. The engine never mutates what it reads.
pub trait UserRepositoryTrait: Send + Sync {
    /// Retrieves a user by ID. Fails with `Error::NotFound` for unknown IDs.
    fn get_user(&self, user_id: &str) -> Result<User>;

    /// Lists all users in insertion order.
    fn list_users(&self) -> Result<Vec<User>>;
}
