//! Application Layer - The Swap Pipeline
//!
//! One linear driver over the adapter clients, plus the failure taxonomy the
//! binary turns into exit messages.

pub mod pipeline;

pub use pipeline::{SwapError, SwapParams, SwapPipeline};
