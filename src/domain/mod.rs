//! Domain layer - event records, filters and the pure derivation engine
//!
//! Nothing in this module performs I/O. Sources feed events in, renderers take
//! derived views out.

pub mod constant;
pub mod date;
pub mod engine;
pub mod error;
pub mod event;
pub mod filter;
pub mod stats;
pub mod view;
