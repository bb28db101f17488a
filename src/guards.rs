use crate::types::{CeimNodeState, JurisdictionRefs};

/// Pre-flight validation at the configuration boundary.
///
/// The kernel itself does not validate inputs: negative weights or rates
/// produce mathematically defined but meaningless results. Embedding
/// systems call these guards before accumulation starts.
pub struct InputGuard;

impl InputGuard {
    /// Check that at least one jurisdictional reference can ever become
    /// admissible, and that a configured WHO guideline has both exposure
    /// parameters.
    pub fn validate_refs(refs: &JurisdictionRefs) -> Result<(), String> {
        if refs.cref_who > 0.0 && (refs.bw_kg <= 0.0 || refs.ir_l_per_day <= 0.0) {
            return Err("cref_who set but bw_kg/ir_l_per_day missing".to_string());
        }
        let who_usable = refs.cref_who > 0.0 && refs.bw_kg > 0.0 && refs.ir_l_per_day > 0.0;
        if refs.cref_epa <= 0.0 && refs.cref_eu <= 0.0 && !who_usable {
            return Err("no usable jurisdictional reference configured".to_string());
        }
        Ok(())
    }

    /// Check the static node configuration of a fresh accumulator.
    pub fn validate_node_config(state: &CeimNodeState) -> Result<(), String> {
        if state.node_id.is_empty() {
            return Err("node_id must not be empty".to_string());
        }
        if state.contaminant_id.is_empty() {
            return Err("contaminant_id must not be empty".to_string());
        }
        if state.hazard_weight < 0.0 {
            return Err("hazard_weight must be >= 0".to_string());
        }
        if state.volume_m3 < 0.0 {
            return Err("volume_m3 must be >= 0".to_string());
        }
        if state.k_per_s < 0.0 {
            return Err("k_per_s must be >= 0".to_string());
        }
        Self::validate_refs(&state.refs)
    }
}
