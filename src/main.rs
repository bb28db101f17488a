use std::error::Error;

use econet_ceim_kernel::{
    hazard_weight_for_contaminant, CeimNodeState, InputGuard, JurisdictionRefs, SensorSample,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Example: an outfall and a downstream river segment from a shard-like
    // configuration. Replace with real qpudatashard rows in production.
    let refs_ecoli = JurisdictionRefs {
        cref_epa: 1.26,
        cref_eu: 0.9,
        cref_who: 0.0,
        ir_l_per_day: 0.0,
        bw_kg: 0.0,
    };
    let refs_pfbs = JurisdictionRefs {
        cref_epa: 0.0,
        cref_eu: 0.0,
        cref_who: 2.0e-6,
        ir_l_per_day: 2.0,
        bw_kg: 70.0,
    };

    let mut outfall = CeimNodeState::new(
        "OUTFALL-PHX-03",
        "EColi",
        hazard_weight_for_contaminant("EColi"),
        refs_ecoli,
        0.0,
        0.0,
    );
    // River segment with a 1200 m^3 control volume and slow first-order decay.
    let mut segment = CeimNodeState::new(
        "RIVER-SEG-07",
        "PFBS",
        hazard_weight_for_contaminant("PFBS"),
        refs_pfbs,
        1200.0,
        1.0e-4,
    );

    for node in [&outfall, &segment] {
        InputGuard::validate_node_config(node)?;
    }

    let outfall_series = [
        (2.4, 1.2, 0.0),
        (2.1, 1.1, 600.0),
        (1.8, 0.0, 1200.0), // stalled flow
        (2.9, 1.5, 1800.0),
    ];
    let segment_series = [
        (90.0, 3.0, 0.0),
        (95.0, 3.2, 900.0),
        (88.0, 2.8, 1800.0),
    ];

    println!("node_id,contaminant,timestamp_s,concentration,flow_m3_per_s,kn");
    for (c, q, t) in outfall_series {
        let kn = outfall.update(&SensorSample {
            concentration: c,
            flow_m3_per_s: q,
            timestamp_s: t,
        })?;
        println!(
            "{},{},{:.0},{:.3},{:.3},{:.6e}",
            outfall.node_id, outfall.contaminant_id, t, c, q, kn
        );
    }
    for (c, q, t) in segment_series {
        let kn = segment.update(&SensorSample {
            concentration: c,
            flow_m3_per_s: q,
            timestamp_s: t,
        })?;
        println!(
            "{},{},{:.0},{:.3},{:.3},{:.6e}",
            segment.node_id, segment.contaminant_id, t, c, q, kn
        );
    }

    Ok(())
}
