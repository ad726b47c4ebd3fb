use crate::models::user::Exercise;
use crate::services::date_service::parse_stored_date;
use chrono::NaiveDate;

/// Applies the `from`/`to` window and the head limit to a user's log.
///
/// Both bounds are inclusive: only entries strictly outside the window are
/// dropped. Entries whose stored date no longer parses are kept, matching
/// the historical comparison semantics. Insertion order is preserved and
/// the limit takes the first entries of the filtered sequence.
pub fn filter_log(
    log: Vec<Exercise>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Vec<Exercise> {
    let filtered = log.into_iter().filter(|exercise| {
        match parse_stored_date(&exercise.date) {
            Some(date) => {
                from.map_or(true, |bound| date >= bound)
                    && to.map_or(true, |bound| date <= bound)
            }
            None => true,
        }
    });

    match limit {
        Some(limit) => filtered.take(limit).collect(),
        None => filtered.collect(),
    }
}
