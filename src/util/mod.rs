//! Small string utilities shipped alongside the parser.
//!
//! None of these touch [`Document`](crate::Document); they are independent
//! helpers that configuration consumers commonly need next to it.

pub mod glob;
pub mod macros;
pub mod paths;
