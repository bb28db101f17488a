use crate::error::CeimError;
use crate::types::JurisdictionRefs;

/// Seconds per day, for the L/day -> L/s ingestion-rate conversion.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Dose-equivalent concentration surrogate for the WHO guideline:
/// C = D * BW / IR, rearranged from the dose model D = C * IR / BW.
/// Returns `None` when the guideline or either exposure parameter is unset.
pub fn who_dose_equivalent(refs: &JurisdictionRefs) -> Option<f64> {
    let ir_l_per_s = refs.ir_l_per_day / SECONDS_PER_DAY;
    if refs.cref_who > 0.0 && refs.bw_kg > 0.0 && ir_l_per_s > 0.0 {
        Some(refs.cref_who * refs.bw_kg / ir_l_per_s)
    } else {
        None
    }
}

/// Supreme jurisdictional limit Csup: the strictest (minimum) admissible
/// concentration across the configured references.
///
/// EPA applies whenever set; EU only under active flow; WHO via its
/// dose-equivalent surrogate. Negative flow readings are treated as zero
/// flow for admissibility.
pub fn compute_supreme_limit(
    refs: &JurisdictionRefs,
    flow_m3_per_s: f64,
) -> Result<f64, CeimError> {
    let q = flow_m3_per_s.max(0.0);

    let mut limits: Vec<f64> = Vec::with_capacity(3);
    if refs.cref_epa > 0.0 {
        limits.push(refs.cref_epa);
    }
    if refs.cref_eu > 0.0 && q > 0.0 {
        limits.push(refs.cref_eu);
    }
    if let Some(dose_who) = who_dose_equivalent(refs) {
        limits.push(dose_who);
    }

    if limits.is_empty() {
        log::warn!("no admissible jurisdictional limits at flow {q} m3/s");
        return Err(CeimError::NoAdmissibleLimit);
    }
    Ok(limits.into_iter().fold(f64::INFINITY, f64::min))
}
