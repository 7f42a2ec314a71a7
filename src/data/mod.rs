//! Data layer: signal model, file parsing, x repair and statistics.
//!
//! Architecture:
//! ```text
//!   signal text file
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  reader   │  drop comments / blank lines
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  parser   │  label blocks → SignalSet (x may be missing)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ interpolate  │  fill missing x by sample index
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  stats    │  count, x span, sample rate
//!   └──────────┘
//! ```
//!
//! `loader` chains reader → parser → interpolate for a file on disk;
//! `writer` produces the text format.

pub mod error;
pub mod interpolate;
pub mod loader;
pub mod model;
pub mod parser;
pub mod reader;
pub mod stats;
pub mod writer;

pub use error::{Error, InterpolateError, ParseError};
pub use model::{Signal, SignalSet};
