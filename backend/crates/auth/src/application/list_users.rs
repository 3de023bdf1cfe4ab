//! List Users Use Case
//!
//! Admin-only listing of all accounts. The role gate runs in the HTTP
//! layer, after access-token verification.

use std::sync::Arc;

use crate::domain::entity::user::PublicUser;
use crate::domain::repository::UserStore;
use crate::error::AuthResult;

/// List users use case
pub struct ListUsersUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> ListUsersUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> AuthResult<Vec<PublicUser>> {
        let users = self.store.find_all().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }
}
