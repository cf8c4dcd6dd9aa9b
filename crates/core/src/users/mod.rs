//! Users module - the user model and the position store seam.

mod users_model;
mod users_repository;
mod users_traits;

pub use users_model::User;
pub use users_repository::InMemoryUserRepository;
pub use users_traits::UserRepositoryTrait;
