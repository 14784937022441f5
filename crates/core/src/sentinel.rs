//! Fixed placeholder values used in place of missing data.
//!
//! A missing scalar never serializes as null; it carries one of these
//! sentinels instead, so joins miss cleanly rather than erroring.

/// Default for any absent scalar field at normalization time.
pub const UNKNOWN: &str = "Unknown";

/// Join miss on the product side.
pub const PRODUCT_NOT_FOUND: &str = "Product Not Found";

/// Join miss on the user side.
pub const USER_NOT_FOUND: &str = "User Not Found";
