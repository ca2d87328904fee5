//! User service

use std::sync::Arc;

use chrono::Utc;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::{NewUser, Pagination, User, UserChanges, UserRecord},
    utils::{hash_password, require_filled, verify_password, IssuedToken, TokenIssuer},
};

/// User service for business logic
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { repo, tokens }
    }

    /// List non-deleted users, one page at a time
    pub async fn list_users(&self, pagination: Pagination) -> AppResult<Vec<User>> {
        self.repo
            .list_active(pagination.offset(), pagination.limit())
            .await
    }

    /// Get a non-deleted user by ID
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .filter(User::is_active)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Register a new user
    pub async fn register(&self, new_user: NewUser) -> AppResult<User> {
        require_filled(&[
            ("email", new_user.email.as_str()),
            ("password", new_user.password.as_str()),
            ("nickname", new_user.nickname.as_str()),
        ])?;

        self.ensure_unique(&new_user.email, &new_user.nickname, None)
            .await?;

        let record = UserRecord {
            nickname: new_user.nickname,
            email: new_user.email,
            password_hash: hash_password(&new_user.password),
            date_of_registration: Utc::now(),
        };

        let user = self.repo.create(&record).await?;
        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Check credentials and issue a bearer token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        require_filled(&[("email", email), ("password", password)])?;

        let user = self
            .repo
            .find_active_by_email(email)
            .await?
            .ok_or_else(|| AppError::InvalidCredentials("Wrong email".to_string()))?;

        if !verify_password(&user.password_hash, password) {
            tracing::warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials("Wrong password".to_string()));
        }

        self.tokens.issue(&user.email, &user.password_hash)
    }

    /// Replace nickname, email and optionally the password
    pub async fn update_user(&self, id: i32, changes: UserChanges) -> AppResult<User> {
        self.get_user(id).await?;

        require_filled(&[
            ("email", changes.email.as_str()),
            ("nickname", changes.nickname.as_str()),
        ])?;
        if let Some(password) = changes.password.as_deref() {
            require_filled(&[("password", password)])?;
        }

        self.ensure_unique(&changes.email, &changes.nickname, Some(id))
            .await?;

        let password_hash = changes.password.as_deref().map(hash_password);
        let user = self
            .repo
            .update(id, &changes.nickname, &changes.email, password_hash.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Soft-delete a user, returning its ID
    pub async fn delete_user(&self, id: i32) -> AppResult<i32> {
        if !self.repo.soft_delete(id).await? {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        tracing::info!(user_id = id, "User soft-deleted");
        Ok(id)
    }

    /// Reject an email or nickname already held by another non-deleted user
    async fn ensure_unique(&self, email: &str, nickname: &str, exclude_id: Option<i32>) -> AppResult<()> {
        let Some(existing) = self.repo.find_conflicting(email, nickname, exclude_id).await? else {
            return Ok(());
        };

        let message = if existing.email == email {
            "User with the same email already exists"
        } else {
            "User with the same nickname already exists"
        };
        tracing::warn!(conflicting_user_id = existing.id, "{}", message);

        Err(AppError::AlreadyExists(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_token_issuer, InMemoryUserRepository};

    fn service() -> (Arc<InMemoryUserRepository>, UserService) {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = UserService::new(repo.clone(), test_token_issuer());
        (repo, service)
    }

    fn new_user(nickname: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            nickname: nickname.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_stamps_time() {
        let (_repo, service) = service();
        let before = Utc::now();

        let user = service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();

        assert_eq!(user.password_hash, hash_password("secret"));
        assert!(user.date_of_registration >= before);
        assert!(!user.deleted);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (_repo, service) = service();
        let all = Pagination::new(Some(1), Some(100)).unwrap();
        let before = service.list_users(all).await.unwrap().len();

        service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(service.list_users(all).await.unwrap().len(), before + 1);

        let second = service
            .register(new_user("keeper", "player1@example.com", "other"))
            .await;
        assert!(matches!(second, Err(AppError::AlreadyExists(_))));
        assert_eq!(service.list_users(all).await.unwrap().len(), before + 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_nickname() {
        let (_repo, service) = service();

        service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();

        let second = service
            .register(new_user("striker", "player2@example.com", "secret"))
            .await;
        match second {
            Err(AppError::AlreadyExists(msg)) => assert!(msg.contains("nickname")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_after_soft_delete_reuses_email() {
        let (_repo, service) = service();

        let first = service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();
        service.delete_user(first.id).await.unwrap();

        let again = service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();
        assert_ne!(again.id, first.id);
    }

    #[tokio::test]
    async fn test_register_rejects_blank_fields() {
        let (repo, service) = service();

        for user in [
            new_user("", "a@example.com", "secret"),
            new_user("striker", "  ", "secret"),
            new_user("striker", "a@example.com", ""),
        ] {
            assert!(matches!(service.register(user).await, Err(AppError::Validation(_))));
        }
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_get_user_after_soft_delete() {
        let (repo, service) = service();

        let user = service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();
        assert_eq!(service.delete_user(user.id).await.unwrap(), user.id);

        assert!(matches!(service.get_user(user.id).await, Err(AppError::NotFound(_))));

        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert!(stored.deleted);
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let (_repo, service) = service();
        assert!(matches!(service.get_user(404).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let (_repo, service) = service();
        assert!(matches!(service.delete_user(404).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_pagination() {
        let (_repo, service) = service();
        for i in 1..=3 {
            service
                .register(new_user(
                    &format!("player{i}"),
                    &format!("player{i}@example.com"),
                    "secret",
                ))
                .await
                .unwrap();
        }

        let first = service
            .list_users(Pagination::new(Some(1), Some(2)).unwrap())
            .await
            .unwrap();
        let second = service
            .list_users(Pagination::new(Some(2), Some(2)).unwrap())
            .await
            .unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].nickname, "player3");
    }

    #[tokio::test]
    async fn test_list_skips_deleted() {
        let (_repo, service) = service();
        let a = service
            .register(new_user("alpha", "a@example.com", "secret"))
            .await
            .unwrap();
        service
            .register(new_user("bravo", "b@example.com", "secret"))
            .await
            .unwrap();
        service.delete_user(a.id).await.unwrap();

        let users = service.list_users(Pagination::default()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].nickname, "bravo");
    }

    #[tokio::test]
    async fn test_login_success() {
        let (_repo, service) = service();
        service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();

        let issued = service.login("player1@example.com", "secret").await.unwrap();
        assert!(!issued.token.is_empty());

        let claims = test_token_issuer().verify(&issued.token).unwrap();
        assert_eq!(claims.email, "player1@example.com");
        assert_eq!(claims.sid, hash_password("secret"));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (_repo, service) = service();
        service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();

        match service.login("player1@example.com", "guess").await {
            Err(AppError::InvalidCredentials(msg)) => assert_eq!(msg, "Wrong password"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let (_repo, service) = service();

        match service.login("nobody@example.com", "secret").await {
            Err(AppError::InvalidCredentials(msg)) => assert_eq!(msg, "Wrong email"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_deleted_user() {
        let (_repo, service) = service();
        let user = service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();
        service.delete_user(user.id).await.unwrap();

        assert!(matches!(
            service.login("player1@example.com", "secret").await,
            Err(AppError::InvalidCredentials(_))
        ));
    }

    #[tokio::test]
    async fn test_update_user() {
        let (_repo, service) = service();
        let user = service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();

        let updated = service
            .update_user(
                user.id,
                UserChanges {
                    nickname: "winger".to_string(),
                    email: "winger@example.com".to_string(),
                    password: Some("new-secret".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.nickname, "winger");
        assert_eq!(updated.email, "winger@example.com");
        assert_eq!(updated.password_hash, hash_password("new-secret"));
        assert_eq!(updated.date_of_registration, user.date_of_registration);
    }

    #[tokio::test]
    async fn test_update_keeps_password_when_absent() {
        let (_repo, service) = service();
        let user = service
            .register(new_user("striker", "player1@example.com", "secret"))
            .await
            .unwrap();

        let updated = service
            .update_user(
                user.id,
                UserChanges {
                    nickname: "striker".to_string(),
                    email: "player1@example.com".to_string(),
                    password: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.password_hash, hash_password("secret"));
    }

    #[tokio::test]
    async fn test_update_rejects_taken_email_before_writing() {
        let (repo, service) = service();
        service
            .register(new_user("alpha", "a@example.com", "secret"))
            .await
            .unwrap();
        let bravo = service
            .register(new_user("bravo", "b@example.com", "secret"))
            .await
            .unwrap();

        let result = service
            .update_user(
                bravo.id,
                UserChanges {
                    nickname: "bravo-renamed".to_string(),
                    email: "a@example.com".to_string(),
                    password: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
        let stored = repo.find_by_id(bravo.id).await.unwrap().unwrap();
        assert_eq!(stored.nickname, "bravo");
        assert_eq!(stored.email, "b@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let (_repo, service) = service();

        let result = service
            .update_user(
                7,
                UserChanges {
                    nickname: "ghost".to_string(),
                    email: "ghost@example.com".to_string(),
                    password: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
