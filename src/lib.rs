//! Examination ticket assembly.
//!
//! Splits a pool of questions into fixed-size tickets so that questions sharing a
//! ticket are as dissimilar as possible and no question is used twice.
//!
//! - [`engines::similarity`]: TF-IDF vectors and cosine similarity over the pool
//! - [`engines::generation`]: partition encoding, fitness, and the genetic search
//! - [`data`]: question sources (DOCX, text, JSON, LLM-generated)
//! - [`render`]: DOCX, LaTeX, plain text and JSON output
//! - [`pipeline`]: [`TicketGenerator`], tying the pieces together

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod types;

pub use error::{Result, TicketError};
pub use pipeline::TicketGenerator;
pub use types::{ExamMetadata, TicketSet};
