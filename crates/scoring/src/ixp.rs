use common::{Direction, Error, Outcome, Reading, Result, ScoreResult, STRONG_SCORE, WEAK_SCORE};

/// IXP score evaluator.
///
/// Compares the 15-minute IXP against the 1-hour IXP on every reading and
/// records `+1` when the trade direction's condition holds, `-1` otherwise.
/// The score is all-or-nothing: [`STRONG_SCORE`] only when every reading
/// passed, [`WEAK_SCORE`] as soon as one fails.
///
/// Outcomes are recomputed from the raw values for the given direction; the
/// outcome stored on each [`Reading`] is ignored.
pub fn compute_score(readings: &[Reading], direction: Direction) -> Result<ScoreResult> {
    if readings.is_empty() {
        return Err(Error::InvalidInput("cannot score an empty sequence".to_string()));
    }
    if let Some(bad) = readings.iter().find(|r| !r.is_finite()) {
        return Err(Error::InvalidInput(format!(
            "reading {} has a non-finite value (15m = {}, 1h = {})",
            bad.index, bad.short_value, bad.long_value
        )));
    }

    let pass_count = readings
        .iter()
        .filter(|r| Outcome::of(direction, r.short_value, r.long_value) == Outcome::Pass)
        .count();
    let len = readings.len();
    let fail_count = len - pass_count;
    let sum_of_outcomes = pass_count as i32 - fail_count as i32;

    Ok(ScoreResult {
        sum_of_outcomes,
        pass_count,
        fail_count,
        len,
        score: score_for(sum_of_outcomes, len),
    })
}

/// Map a direction-normalised outcome sum to the final score.
fn score_for(sum_of_outcomes: i32, len: usize) -> f64 {
    if sum_of_outcomes == len as i32 {
        STRONG_SCORE
    } else {
        WEAK_SCORE
    }
}
