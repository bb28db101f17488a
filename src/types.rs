use serde::{Deserialize, Serialize};

/// One sensor reading at a monitored node (river segment or outfall).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorSample {
    /// Contaminant concentration C(t) in canonical units (e.g. ng/L, mg/L).
    pub concentration: f64,
    /// Volumetric flow Q(t) in m^3/s; <= 0 means "no flow", skip integration.
    pub flow_m3_per_s: f64,
    /// Sample time in seconds. Monotonic per node expected, not enforced.
    pub timestamp_s: f64,
}

/// Jurisdictional reference limits for one contaminant at one node,
/// aligned with EcoNet qpudatashard schemas. A value <= 0 means the
/// reference is unset / not applicable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionRefs {
    /// EPA concentration ceiling (e.g. MCL or health advisory).
    pub cref_epa: f64,
    /// EU concentration limit (e.g. DWD / EQS); applies only under active flow.
    pub cref_eu: f64,
    /// WHO guideline value, dose-based; compared via its dose-equivalent
    /// concentration surrogate.
    pub cref_who: f64,
    /// Ingestion rate in L/day for the WHO dose conversion.
    pub ir_l_per_day: f64,
    /// Body weight in kg for the WHO dose conversion.
    pub bw_kg: f64,
}

impl JurisdictionRefs {
    /// All references unset; limit resolution over this value always fails.
    /// Real deployments should load site-specific refs from a shard or config.
    pub fn unset() -> Self {
        JurisdictionRefs {
            cref_epa: 0.0,
            cref_eu: 0.0,
            cref_who: 0.0,
            ir_l_per_day: 0.0,
            bw_kg: 0.0,
        }
    }
}

/// Default hazard weights (lambda) per contaminant class, used when a shard
/// does not carry a site-specific value.
pub fn hazard_weight_for_contaminant(contaminant: &str) -> f64 {
    match contaminant {
        "EColi" => 3.0,
        "Enterococci" => 3.0,
        "Lead" => 2.0,
        "Atrazine" => 1.5,
        "Nitrate" => 1.2,
        "PFBS" => 1.0,
        _ => 1.0,
    }
}

/// Accumulator state for one node + contaminant pair.
///
/// Mutated in place by `update` on every sample; `kn` is monotonically
/// non-decreasing across calls. The kernel provides no internal
/// synchronization: each instance must be owned by a single logical writer
/// at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeimNodeState {
    pub node_id: String,
    pub contaminant_id: String,
    /// Hazard severity weight omega in [0, +inf), e.g. 3.0 for E. coli,
    /// 1.0 for PFBS.
    pub hazard_weight: f64,
    pub refs: JurisdictionRefs,
    /// Effective control volume in m^3; 0 disables kinetic modeling.
    pub volume_m3: f64,
    /// First-order decay rate in 1/s; 0 disables removal modeling.
    pub k_per_s: f64,
    /// Accumulated impact Kn (dimensionless).
    pub kn: f64,
    /// Timestamp of the last processed sample, seconds.
    pub t_last_s: f64,
    /// Whether `t_last_s` has been initialized by a first sample.
    pub has_last: bool,
}

impl CeimNodeState {
    /// Fresh accumulator with static node configuration and zero impact.
    pub fn new(
        node_id: impl Into<String>,
        contaminant_id: impl Into<String>,
        hazard_weight: f64,
        refs: JurisdictionRefs,
        volume_m3: f64,
        k_per_s: f64,
    ) -> Self {
        CeimNodeState {
            node_id: node_id.into(),
            contaminant_id: contaminant_id.into(),
            hazard_weight,
            refs,
            volume_m3,
            k_per_s,
            kn: 0.0,
            t_last_s: 0.0,
            has_last: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refs_load_from_shard_json() {
        let raw = r#"{
            "cref_epa": 4.0,
            "cref_eu": 0.0,
            "cref_who": 2.0,
            "ir_l_per_day": 2.0,
            "bw_kg": 70.0
        }"#;
        let refs: JurisdictionRefs = serde_json::from_str(raw).unwrap();
        assert_eq!(refs.cref_epa, 4.0);
        assert_eq!(refs.cref_eu, 0.0);
        assert_eq!(refs.bw_kg, 70.0);
    }

    #[test]
    fn test_state_survives_serde_round_trip() {
        // Embedding systems persist state across restarts; kn and the time
        // base must come back intact.
        let mut state = CeimNodeState::new(
            "RIVER-SEG-07",
            "EColi",
            3.0,
            JurisdictionRefs {
                cref_epa: 1.0,
                cref_eu: 0.0,
                cref_who: 0.0,
                ir_l_per_day: 0.0,
                bw_kg: 0.0,
            },
            0.0,
            0.0,
        );
        state.kn = 12.5;
        state.t_last_s = 3600.0;
        state.has_last = true;

        let json = serde_json::to_string(&state).unwrap();
        let back: CeimNodeState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.node_id, "RIVER-SEG-07");
        assert_eq!(back.kn, 12.5);
        assert_eq!(back.t_last_s, 3600.0);
        assert!(back.has_last);
    }

    #[test]
    fn test_hazard_weight_presets() {
        assert_eq!(hazard_weight_for_contaminant("EColi"), 3.0);
        assert_eq!(hazard_weight_for_contaminant("PFBS"), 1.0);
        // Unknown contaminants fall back to the neutral chemical weight.
        assert_eq!(hazard_weight_for_contaminant("Unobtainium"), 1.0);
    }
}
