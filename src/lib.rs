//! AquaGuardian notice service.
//!
//! Classifies water-quality examinations by warning count, composes
//! stakeholder alerts from their flagged parameters, and dispatches them in
//! batches to the AquaGuardian REST API.

pub mod alert;
pub mod analysis;
pub mod config;
pub mod dev_mode;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod notice;
pub mod parameters;
pub mod report;
