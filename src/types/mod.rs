//! Backend value types that need a dedicated wire encoding.

mod date;

pub use date::ParseDate;
