//! Pipeline conversions module
//!
//! This module contains orchestration logic that chains decode, transforms
//! and encode.

mod edit_pipeline;
mod operation;

#[cfg(test)]
mod tests;

pub use edit_pipeline::EditPipeline;
pub use operation::Operation;
