//! Domain Value Objects
//!
//! Immutable value types shared by the presale schemas.

pub mod email;
pub mod networks;
pub mod timestamp;

pub use email::Email;
pub use networks::Networks;
