//! Business logic services

pub mod championship_service;
pub mod user_championship_service;
pub mod user_service;

pub use championship_service::ChampionshipService;
pub use user_championship_service::UserChampionshipService;
pub use user_service::UserService;
