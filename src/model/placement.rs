/// A maximal block of equal-time entries in a time-sorted table.
///
/// Competition ranking falls out of the grouping: every entry in a run shares
/// the place of the run's first index, and the entry after a run of `k` ties
/// at place `r` sits at place `r + k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieRun {
    /// 1-based place shared by every entry in the run.
    pub place: u32,
    pub start: usize,
    /// Exclusive end index.
    pub end: usize
}

/// Groups a time-sorted slice into tie runs. Consumers fold over runs instead
/// of walking raw indices with mutable place counters.
pub fn tie_runs_by<T, F>(entries: &[T], time_of: F) -> Vec<TieRun>
where
    F: Fn(&T) -> f64
{
    let mut runs = Vec::new();
    let mut start = 0;

    for i in 1..=entries.len() {
        if i == entries.len() || time_of(&entries[i]) != time_of(&entries[start]) {
            runs.push(TieRun {
                place: start as u32 + 1,
                start,
                end: i
            });
            start = i;
        }
    }

    runs
}

/// Per-entry competition places for a time-sorted slice.
pub fn places_by<T, F>(entries: &[T], time_of: F) -> Vec<u32>
where
    F: Fn(&T) -> f64
{
    let mut places = vec![0; entries.len()];

    for run in tie_runs_by(entries, &time_of) {
        for place in &mut places[run.start..run.end] {
            *place = run.place;
        }
    }

    places
}
