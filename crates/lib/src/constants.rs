//! Constants used throughout the journalkeep library.
//!
//! These are the well-known storage keys. They are part of the on-disk
//! format: changing any of them orphans data written by earlier versions.

/// Key holding the serialized user registry (a JSON array of user records).
pub const USERS_KEY: &str = "@journal_users";

/// Key holding the snapshot of the currently authenticated user.
pub const CURRENT_USER_KEY: &str = "@journal_current_user";

/// Prefix for every per-user data blob.
pub const USER_DATA_PREFIX: &str = "@journal_user_data";

/// Separator between the prefix, user id and data type in a composite key.
pub const KEY_DELIMITER: &str = "_";

/// Data type name for a user's journal entries.
pub const ENTRIES: &str = "entries";

/// Data type name for a user's goals.
pub const GOALS: &str = "goals";
