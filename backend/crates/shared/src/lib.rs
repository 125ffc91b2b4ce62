//! Shared Kernel - Domain-crossing minimal core
//!
//! The small vocabulary every backend crate agrees on:
//! - Unified error type, error kinds and result alias
//! - Field-level validation failures
//! - Typed document identifiers
//!
//! Only things whose meaning is identical across domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod validation;
