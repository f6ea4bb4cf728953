//! # ytmkit Math
//!
//! Numerical root-finding for the ytmkit bond yield library.
//!
//! - **Solvers**: Newton-Raphson (analytic or numerical derivative) and secant
//!
//! Every solver reports failure as a typed [`MathError`] and never hands
//! back an unconverged root.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton_raphson, newton_raphson_numerical, secant, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
