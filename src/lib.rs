#![forbid(unsafe_code)]

//! CEIM kernel for EcoNet water-quality nodes.
//!
//! Computes the Contamination Exposure Impact Metric Kn for a monitored node
//! (river segment or outfall) from a per-node sensor time series. Per sample:
//! resolve the supreme (strictest) admissible concentration limit across the
//! configured jurisdictional references, optionally close the outflow
//! concentration with first-order kinetics in a CSTR view, clamp the modeled
//! outflow to the supreme limit, and integrate the hazard-weighted normalized
//! exceedance flux over the elapsed interval.
//!
//! The kernel is deterministic, synchronous, and O(1) per sample. Sensor
//! ingestion, persistence, and alerting belong to the embedding system; this
//! crate only exposes [`compute_supreme_limit`] and
//! [`CeimNodeState::update`].

mod accumulator;
mod error;
mod guards;
mod limits;
mod types;

pub use error::CeimError;
pub use guards::InputGuard;
pub use limits::{compute_supreme_limit, who_dose_equivalent};
pub use types::{hazard_weight_for_contaminant, CeimNodeState, JurisdictionRefs, SensorSample};
