//! In-memory stores and fixtures shared by unit tests

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    config::{Config, DatabaseConfig, JwtConfig, RedisConfig, ServerConfig, StorageConfig},
    db::repositories::{ChampionshipRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Championship, User, UserRecord},
    state::AppState,
    storage::{BlobReader, BlobStorage},
    utils::TokenIssuer,
};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-with-enough-length-for-hs256".to_string(),
        issuer: "football-tournament-test".to_string(),
        audience: "football-tournament-clients".to_string(),
        expiry_days: 60,
    }
}

pub fn test_token_issuer() -> TokenIssuer {
    TokenIssuer::new(&test_jwt_config())
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost/unused".to_string(),
            max_connections: 1,
        },
        redis: RedisConfig {
            url: "redis://localhost:6379".to_string(),
        },
        jwt: test_jwt_config(),
        storage: StorageConfig {
            root: PathBuf::from("./target/test-blobs"),
            container: "user-championships".to_string(),
        },
    }
}

/// Application state over fresh in-memory stores
pub fn test_state() -> AppState {
    AppState::new(
        &test_config(),
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryChampionshipRepository::default()),
        Arc::new(InMemoryBlobStorage::default()),
    )
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: &UserRecord) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = User {
            id: rows.len() as i32 + 1,
            nickname: record.nickname.clone(),
            email: record.email.clone(),
            password_hash: record.password_hash.clone(),
            date_of_registration: record.date_of_registration,
            deleted: false,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|u| !u.deleted && u.email == email)
            .cloned())
    }

    async fn find_conflicting(
        &self,
        email: &str,
        nickname: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|u| !u.deleted && Some(u.id) != exclude_id)
            .find(|u| u.email == email || u.nickname == nickname)
            .cloned())
    }

    async fn list_active(&self, offset: i64, limit: i64) -> AppResult<Vec<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|u| !u.deleted)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i32,
        nickname: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> AppResult<Option<User>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(user) = rows.iter_mut().find(|u| u.id == id && !u.deleted) else {
            return Ok(None);
        };

        user.nickname = nickname.to_string();
        user.email = email.to_string();
        if let Some(hash) = password_hash {
            user.password_hash = hash.to_string();
        }
        Ok(Some(user.clone()))
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Championship documents in insertion order
#[derive(Default)]
pub struct InMemoryChampionshipRepository {
    docs: Mutex<Vec<Championship>>,
}

#[async_trait]
impl ChampionshipRepository for InMemoryChampionshipRepository {
    async fn create(&self, championship: &Championship) -> AppResult<Championship> {
        let mut docs = self.docs.lock().unwrap();
        if docs
            .iter()
            .any(|c| !c.deleted && (c.name == championship.name || c.id == championship.id))
        {
            return Err(AppError::AlreadyExists(format!(
                "Championship '{}' already exists",
                championship.name
            )));
        }
        docs.push(championship.clone());
        Ok(championship.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Championship>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs.iter().find(|c| c.id == id).cloned())
    }

    async fn find_active_by_name(&self, name: &str) -> AppResult<Option<Championship>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .find(|c| !c.deleted && c.name == name)
            .cloned())
    }

    async fn list_active(&self, offset: i64, limit: i64) -> AppResult<Vec<Championship>> {
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .iter()
            .filter(|c| !c.deleted)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, championship: &Championship) -> AppResult<Championship> {
        let mut docs = self.docs.lock().unwrap();
        let stored = docs
            .iter_mut()
            .find(|c| c.id == championship.id)
            .ok_or_else(|| AppError::NotFound(format!("Championship {} not found", championship.id)))?;
        *stored = championship.clone();
        Ok(championship.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<bool> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|c| c.id == id) {
            Some(championship) => {
                championship.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryBlobStorage {
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
}

#[async_trait]
impl BlobStorage for InMemoryBlobStorage {
    async fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.blobs.lock().unwrap().contains_key(name))
    }

    async fn create_empty(&self, name: &str) -> AppResult<()> {
        self.blobs
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default();
        Ok(())
    }

    async fn list_names(&self, prefix: &str) -> AppResult<Vec<String>> {
        let blobs = self.blobs.lock().unwrap();
        Ok(blobs
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn open(&self, name: &str) -> AppResult<BlobReader> {
        let blobs = self.blobs.lock().unwrap();
        let content = blobs
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::StorageNotFound(name.to_string()))?;
        Ok(Box::new(std::io::Cursor::new(content)))
    }

    async fn overwrite(&self, name: &str, content: Vec<u8>) -> AppResult<()> {
        let mut blobs = self.blobs.lock().unwrap();
        match blobs.get_mut(name) {
            Some(stored) => {
                *stored = content;
                Ok(())
            }
            None => Err(AppError::StorageNotFound(name.to_string())),
        }
    }

    async fn delete(&self, name: &str) -> AppResult<()> {
        self.blobs
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AppError::StorageNotFound(name.to_string()))
    }
}
