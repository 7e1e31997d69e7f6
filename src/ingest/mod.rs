//! Clients for external data sources.
//!
//! - `aquaguardian`: the AquaGuardian REST API (examinations, notices).

pub mod aquaguardian;
