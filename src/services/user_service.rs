use bcrypt::{hash, verify, DEFAULT_COST};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::{AppError, AppResult};
use crate::models::user;

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // Registers a new user with a bcrypt-hashed password. The cleartext
    // password is never persisted.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<user::Model> {
        if self.find_by_username(username).await?.is_some() {
            return Err(AppError::DuplicateUsername);
        }
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::InvalidUser);
        }

        let password_hash = hash(password.as_bytes(), DEFAULT_COST)?;
        let user = user::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        tracing::info!("Registering user: {}", username);
        Ok(user.insert(&self.db).await?)
    }

    // A single undifferentiated failure for unknown usernames and wrong
    // passwords, so callers cannot enumerate usernames.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<user::Model> {
        let user = self
            .find_by_username(username)
            .await?
            .ok_or(AppError::AuthenticationFailed)?;

        let matches = verify(password.as_bytes(), &user.password_hash)
            .map_err(|_| AppError::AuthenticationFailed)?;
        if !matches {
            return Err(AppError::AuthenticationFailed);
        }

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<user::Model> {
        self.find_by_id(id).await?.ok_or(AppError::UserNotFound)
    }

    pub async fn get_by_username(&self, username: &str) -> AppResult<user::Model> {
        self.find_by_username(username)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub async fn list_all(&self) -> AppResult<Vec<user::Model>> {
        Ok(user::Entity::find().all(&self.db).await?)
    }

    // Seeds a default admin account when the user table is empty so a fresh
    // install has a login.
    pub async fn seed_default_admin(&self) -> AppResult<()> {
        if self.list_all().await?.is_empty() {
            self.register("admin", "admin").await?;
            tracing::info!("Seeded default admin user");
        }
        Ok(())
    }

    pub(crate) async fn find_by_id(&self, id: i64) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn test_service() -> UserService {
        let db = db::connect("sqlite::memory:").await.unwrap();
        db::setup_schema(&db).await.unwrap();
        UserService::new(db)
    }

    #[tokio::test]
    async fn register_hashes_the_password() {
        let users = test_service().await;
        let user = users.register("alice", "secret").await.unwrap();

        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "secret");
        assert!(verify(b"secret", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn register_rejects_duplicates_and_blanks() {
        let users = test_service().await;
        users.register("alice", "secret").await.unwrap();

        assert!(matches!(
            users.register("alice", "other").await,
            Err(AppError::DuplicateUsername)
        ));
        assert!(matches!(
            users.register("  ", "secret").await,
            Err(AppError::InvalidUser)
        ));
        assert!(matches!(
            users.register("bob", "").await,
            Err(AppError::InvalidUser)
        ));
    }

    #[tokio::test]
    async fn authenticate_does_not_distinguish_failure_causes() {
        let users = test_service().await;
        users.register("alice", "secret").await.unwrap();

        let ok = users.authenticate("alice", "secret").await.unwrap();
        assert_eq!(ok.username, "alice");

        assert!(matches!(
            users.authenticate("alice", "wrong").await,
            Err(AppError::AuthenticationFailed)
        ));
        assert!(matches!(
            users.authenticate("nobody", "secret").await,
            Err(AppError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn seeds_admin_only_into_an_empty_table() {
        let users = test_service().await;

        users.seed_default_admin().await.unwrap();
        let admin = users.get_by_username("admin").await.unwrap();
        users.authenticate("admin", "admin").await.unwrap();

        // A second seed, or a seed over existing users, adds nothing.
        users.seed_default_admin().await.unwrap();
        assert_eq!(users.list_all().await.unwrap(), vec![admin]);

        let fresh = test_service().await;
        fresh.register("alice", "secret").await.unwrap();
        fresh.seed_default_admin().await.unwrap();
        assert!(matches!(
            fresh.get_by_username("admin").await,
            Err(AppError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn lookups_report_missing_users() {
        let users = test_service().await;
        let alice = users.register("alice", "secret").await.unwrap();

        assert_eq!(users.get_by_id(alice.id).await.unwrap(), alice);
        assert_eq!(users.get_by_username("alice").await.unwrap(), alice);
        assert_eq!(users.list_all().await.unwrap().len(), 1);

        assert!(matches!(
            users.get_by_id(alice.id + 1).await,
            Err(AppError::UserNotFound)
        ));
        assert!(matches!(
            users.get_by_username("bob").await,
            Err(AppError::UserNotFound)
        ));
    }
}
