//! # Domain Models
//!
//! Pure flag types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, no logging, no loading logic. Just the fixed flag table,
//! its compiled-in values, and the immutable configuration value built from it.
//!
//! ```rust
//! use appsearch_domain::constants::FLAG_ENABLE_SAFE_PARCELABLE;
//! use appsearch_domain::flags::{self, Flag};
//!
//! assert!(flags::enable_safe_parcelable());
//! assert_eq!(Flag::EnableSafeParcelable.key(), FLAG_ENABLE_SAFE_PARCELABLE);
//! ```

pub mod config;
pub mod constants;
pub mod flags;
