//! Rule-based helpers for identity extraction.

pub mod cnp;
pub mod fence;
pub mod fields;
pub mod patterns;

pub use cnp::{digits_only, is_valid_cnp};
pub use fence::strip_fencing;
pub use fields::read_field_value;
