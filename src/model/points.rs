use crate::model::{
    constants::{EE_MAX_POINTS, SDC_POINT_BUDGET},
    error::EngineError,
    placement,
    structures::{
        scoring_system::{EeCurve, ScoringSystem},
        table::{PointEntry, PointTable, ResultEntry, ResultsTable}
    }
};

/// Scores one competition's ranked result table under the selected system.
///
/// SDC subtracts the time gap to the leader from a fixed 20-point budget.
/// EE systems multiply the time ratio `k1 = top / time` by the placement
/// curve `k2` and scale to 1000; the place-1 run always scores exactly 1000.
/// LEGACY awards `field_size - place + 1` per round.
pub fn score_points(table: &ResultsTable, system: ScoringSystem) -> Result<PointTable, EngineError> {
    if table.valid.is_empty() {
        return Err(EngineError::Data(
            "cannot score an empty result table".to_string()
        ));
    }

    let valid = match system.ee_curve() {
        Some(curve) => ee_points(&table.valid, curve),
        None => match system {
            ScoringSystem::Sdc => sdc_points(&table.valid),
            ScoringSystem::Legacy => legacy_points(&table.valid),
            _ => unreachable!("EE systems carry a curve")
        }
    };

    Ok(PointTable {
        valid,
        invalid: table.invalid.clone()
    })
}

fn point_entry(entry: &ResultEntry, points: f64) -> PointEntry {
    PointEntry {
        player_id: entry.player_id,
        nick: entry.nick.clone(),
        country: entry.country.clone(),
        time: entry.time,
        points
    }
}

fn sdc_points(entries: &[ResultEntry]) -> Vec<PointEntry> {
    let top_time = entries[0].time;

    entries
        .iter()
        .map(|entry| {
            let points = round3(SDC_POINT_BUDGET - (entry.time - top_time)).max(0.0);
            point_entry(entry, points)
        })
        .collect()
}

fn ee_points(entries: &[ResultEntry], curve: &EeCurve) -> Vec<PointEntry> {
    let top_time = entries[0].time;
    let mut scored = Vec::with_capacity(entries.len());

    for run in placement::tie_runs_by(entries, |e| e.time) {
        for entry in &entries[run.start..run.end] {
            let points = if run.place == 1 {
                EE_MAX_POINTS
            } else {
                let k1 = top_time / entry.time;
                let k2 = curve.k2(run.place);

                (k1 * k2 * EE_MAX_POINTS).round()
            };

            scored.push(point_entry(entry, points));
        }
    }

    scored
}

fn legacy_points(entries: &[ResultEntry]) -> Vec<PointEntry> {
    let field_size = entries.len() as f64;
    let places = placement::places_by(entries, |e| e.time);

    entries
        .iter()
        .zip(places)
        .map(|(entry, place)| point_entry(entry, field_size - place as f64 + 1.0))
        .collect()
}

/// Round half away from zero at 3 decimals.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
