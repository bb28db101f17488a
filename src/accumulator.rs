use crate::error::CeimError;
use crate::limits::compute_supreme_limit;
use crate::types::{CeimNodeState, SensorSample};

impl CeimNodeState {
    /// Advance the accumulator by one sample and return the updated Kn.
    ///
    /// The first sample only establishes the time base and contributes no
    /// impact. Non-positive intervals and stalled/zero flow advance the time
    /// base without accumulating. A failed limit resolution aborts the update
    /// with the state untouched, `t_last_s` included, so the same sample can
    /// be reprocessed once the refs are fixed.
    pub fn update(&mut self, sample: &SensorSample) -> Result<f64, CeimError> {
        if !self.has_last {
            self.t_last_s = sample.timestamp_s;
            self.has_last = true;
            return Ok(self.kn);
        }

        let dt_s = sample.timestamp_s - self.t_last_s;
        if dt_s <= 0.0 || sample.flow_m3_per_s <= 0.0 {
            log::debug!(
                "node {} skipping interval: dt {dt_s} s, flow {} m3/s",
                self.node_id,
                sample.flow_m3_per_s
            );
            self.t_last_s = sample.timestamp_s;
            return Ok(self.kn);
        }

        // Hydraulic residence time for the CSTR view of this node.
        let tau_s = if self.volume_m3 > 0.0 {
            self.volume_m3 / sample.flow_m3_per_s
        } else {
            0.0
        };

        // First-order removal closure, only when a kinetic rate is configured.
        let cout_model = if self.k_per_s > 0.0 {
            sample.concentration * (-self.k_per_s * tau_s).exp()
        } else {
            sample.concentration
        };

        // Resolved before any state write; on failure t_last_s stays put.
        let csup = compute_supreme_limit(&self.refs, sample.flow_m3_per_s)?;

        // Reported outflow may never exceed the supreme limit.
        let cout = cout_model.min(csup);

        let delta_c = sample.concentration - cout;
        if delta_c <= 0.0 {
            self.t_last_s = sample.timestamp_s;
            return Ok(self.kn);
        }

        // Discrete CEIM increment: omega * ((Cin - Cout) / Csup) * Q * dt.
        self.kn += self.hazard_weight * (delta_c / csup) * sample.flow_m3_per_s * dt_s;
        self.t_last_s = sample.timestamp_s;
        Ok(self.kn)
    }
}
