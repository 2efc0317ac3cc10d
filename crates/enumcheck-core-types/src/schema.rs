//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Enumeration identifiers
pub const FIELD_ENUM_TYPE: &str = "enum_type";
pub const FIELD_LEFT: &str = "left";
pub const FIELD_RIGHT: &str = "right";

// Sizes and positions
pub const FIELD_MEMBER_COUNT: &str = "member_count";
pub const FIELD_DIFF_COUNT: &str = "diff_count";
pub const FIELD_INDEX: &str = "index";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical operation names
pub const OP_ENUM_DIFFERENCES: &str = "enum_differences";
pub const OP_RANDOM_VALUE: &str = "random_value";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
