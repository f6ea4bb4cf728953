//! Bond instruments.

mod bond;

pub use bond::{Bond, BondBuilder};
