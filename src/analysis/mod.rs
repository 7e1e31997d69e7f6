/// Data organization utilities for the notice service.
///
/// This module provides basic grouping helpers over fetched examinations.
/// Trend analysis and forecasting live in the AquaGuardian backend; the
/// service only summarizes what the API already computed.
///
/// Submodules:
/// - `groupings`: organizes flat examination lists into per-farm-area summaries.

pub mod groupings;
