//! Centralized constants for the envschema workspace.
//!
//! Variable names and file names shared by the loader, the injection
//! registry, and the CLI live here so they never drift apart.

// =============================================================================
// Environment Variables
// =============================================================================

/// Default variable naming the active profile (e.g. `test`, `production`).
pub const DEFAULT_PROFILE_VAR: &str = "APP_ENV";

/// Setting this to `1` or `true` skips every dotenv file.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Override Files
// =============================================================================

/// Base override file, always consulted.
pub const BASE_ENV_FILE: &str = ".env";

// =============================================================================
// Injection Tokens
// =============================================================================

/// Namespace prefix shared by every injection token.
pub const TOKEN_NAMESPACE: &str = "configuration";

/// Key of the token that resolves the whole configuration mapping.
pub const CONFIGURATION_KEY: &str = "configuration";
