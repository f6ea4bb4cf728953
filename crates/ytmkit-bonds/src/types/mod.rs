//! Bond-specific types.

mod identifiers;

pub use identifiers::Isin;
