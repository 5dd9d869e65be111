//! Column limits and defaults for the `functions` table.
//! Lengths count characters, not bytes.

/// Maximum length of `name`, the primary key.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of the serialized `spec` manifest.
pub const SPEC_MAX_LEN: usize = 5000;

/// Maximum length of every other text column.
pub const FIELD_MAX_LEN: usize = 100;

pub const DEFAULT_MIN_POS_POINTS: i64 = 1;
pub const DEFAULT_MIN_NEG_POINTS: i64 = -1;
pub const DEFAULT_STARTSWITH_BOX: bool = false;
