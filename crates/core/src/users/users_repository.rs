use log::debug;

use super::users_model::User;
use super::users_traits::UserRepositoryTrait;
use crate::errors::{Error, Result};

/// User store held entirely in memory. Order of insertion is the listing order,
/// which is also the tie-break order of leaderboards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Result<Self> {
        for (index, user) in users.iter().enumerate() {
            if users[..index].iter().any(|other| other.id == user.id) {
                return Err(Error::invalid_input(format!(
                    "duplicate user id '{}'",
                    user.id
                )));
            }
        }
        debug!("Loaded {} users into memory", users.len());
        Ok(Self { users })
    }
}

impl UserRepositoryTrait for InMemoryUserRepository {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("user '{}'", user_id)))
    }

    fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }
}
