//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// STORE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default Redis URL for the championship document store
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Default root directory for blob containers
pub const DEFAULT_BLOB_STORAGE_ROOT: &str = "./data/blobs";

/// Default blob container holding per-user championship records
pub const DEFAULT_BLOB_CONTAINER: &str = "user-championships";

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default bearer token lifetime in days
pub const DEFAULT_JWT_EXPIRY_DAYS: i64 = 60;

/// Longest token lifetime accepted from configuration
pub const MAX_JWT_EXPIRY_DAYS: i64 = 3650;

/// Default token issuer
pub const DEFAULT_JWT_ISSUER: &str = "football-tournament";

/// Default token audience
pub const DEFAULT_JWT_AUDIENCE: &str = "football-tournament-clients";

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Nickname minimum length
pub const MIN_NICKNAME_LENGTH: u64 = 3;

/// Nickname maximum length
pub const MAX_NICKNAME_LENGTH: u64 = 50;

/// Championship name maximum length
pub const MAX_CHAMPIONSHIP_NAME_LENGTH: u64 = 50;

// =============================================================================
// PAGINATION
// =============================================================================

/// Page used when the caller does not supply one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// DOCUMENT STORE KEYS
// =============================================================================

/// Redis key layout for championship documents
pub mod championship_keys {
    /// Prefix of a single championship document key
    pub const DOCUMENT_PREFIX: &str = "championship:";

    /// Sorted set of non-deleted championship ids, scored by creation time
    pub const ACTIVE_INDEX: &str = "championships:active";

    /// Hash of non-deleted championship name -> id
    pub const NAME_INDEX: &str = "championships:names";
}
