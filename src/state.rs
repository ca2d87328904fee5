//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config,
    db::repositories::{ChampionshipRepository, UserRepository},
    services::{ChampionshipService, UserChampionshipService, UserService},
    storage::BlobStorage,
    utils::TokenIssuer,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    users: Arc<UserService>,
    championships: Arc<ChampionshipService>,
    user_championships: UserChampionshipService,
}

impl AppState {
    /// Wire the services over the given stores
    pub fn new(
        config: &Config,
        user_repo: Arc<dyn UserRepository>,
        championship_repo: Arc<dyn ChampionshipRepository>,
        blobs: Arc<dyn BlobStorage>,
    ) -> Self {
        let users = Arc::new(UserService::new(user_repo, TokenIssuer::new(&config.jwt)));
        let championships = Arc::new(ChampionshipService::new(championship_repo));
        let user_championships =
            UserChampionshipService::new(users.clone(), championships.clone(), blobs);

        Self {
            inner: Arc::new(AppStateInner {
                users,
                championships,
                user_championships,
            }),
        }
    }

    pub fn users(&self) -> &UserService {
        &self.inner.users
    }

    pub fn championships(&self) -> &ChampionshipService {
        &self.inner.championships
    }

    pub fn user_championships(&self) -> &UserChampionshipService {
        &self.inner.user_championships
    }
}
