//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_FIELD_TYPE: &str = "field_type";
pub const FIELD_KEY: &str = "key";

// Collection sizes
pub const FIELD_BASE_LEN: &str = "base_len";
pub const FIELD_ORDER_LEN: &str = "order_len";
pub const FIELD_RANKED_LEN: &str = "ranked_len";
pub const FIELD_UNRANKED_LEN: &str = "unranked_len";
pub const FIELD_SKIPPED_LEN: &str = "skipped_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
