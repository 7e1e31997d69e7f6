//! Warning aggregation and alert-text composition.
//!
//! `severity` buckets an examination's warning count into an ordinal level;
//! `compose` turns one flagged examination into a dispatchable alert.

pub mod compose;
pub mod severity;
