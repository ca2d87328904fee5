//! Database repositories
//!
//! Repositories handle all direct store interactions: users in PostgreSQL,
//! championships in the Redis document store.

pub mod championship_repo;
pub mod user_repo;

pub use championship_repo::{ChampionshipRepository, RedisChampionshipRepository};
pub use user_repo::{PgUserRepository, UserRepository};
