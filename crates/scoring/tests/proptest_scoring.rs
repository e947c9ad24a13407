use proptest::prelude::*;
use common::{Direction, Outcome, Reading, Scenario, STRONG_SCORE, WEAK_SCORE};
use scoring::{compute_score, SampleGenerator};

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Buy), Just(Direction::Sell)]
}

fn any_readings() -> impl Strategy<Value = Vec<Reading>> {
    prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..64).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (s, l))| Reading::new(i + 1, i as u64 * 5, s, l, Direction::Buy))
            .collect()
    })
}

proptest! {
    /// The score only ever takes one of its two values, and is strong exactly
    /// when every reading passed.
    #[test]
    fn score_is_all_or_nothing(readings in any_readings(), direction in any_direction()) {
        let result = compute_score(&readings, direction).unwrap();
        let all_pass = readings
            .iter()
            .all(|r| Outcome::of(direction, r.short_value, r.long_value) == Outcome::Pass);

        prop_assert!(result.score == STRONG_SCORE || result.score == WEAK_SCORE);
        prop_assert_eq!(result.score == STRONG_SCORE, all_pass);
        let reached_target = result.sum_of_outcomes == readings.len() as i32;
        prop_assert_eq!(result.score == STRONG_SCORE, reached_target);
    }

    /// Counts add up and the sum stays inside `[-n, n]`.
    #[test]
    fn sum_matches_counts(readings in any_readings(), direction in any_direction()) {
        let result = compute_score(&readings, direction).unwrap();
        let n = readings.len() as i32;
        prop_assert_eq!(result.pass_count + result.fail_count, readings.len());
        let net = result.pass_count as i32 - result.fail_count as i32;
        prop_assert_eq!(result.sum_of_outcomes, net);
        prop_assert!((-n..=n).contains(&result.sum_of_outcomes));
    }

    /// Scoring is a pure function of its input.
    #[test]
    fn scoring_is_idempotent(readings in any_readings(), direction in any_direction()) {
        let first = compute_score(&readings, direction).unwrap();
        let second = compute_score(&readings, direction).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Reordering readings never changes the result.
    #[test]
    fn scoring_ignores_order(readings in any_readings(), direction in any_direction()) {
        let mut reversed = readings.clone();
        reversed.reverse();
        prop_assert_eq!(
            compute_score(&readings, direction).unwrap(),
            compute_score(&reversed, direction).unwrap()
        );
    }

    /// Whatever the draw, an all-pass sample scores strong.
    #[test]
    fn all_pass_samples_score_strong(
        seed in any::<u64>(),
        direction in any_direction(),
        n in 1usize..80,
    ) {
        let readings = SampleGenerator::seeded(seed)
            .generate(direction, Scenario::AllPass, n)
            .unwrap();
        let result = compute_score(&readings, direction).unwrap();
        prop_assert_eq!(result.sum_of_outcomes, n as i32);
        prop_assert_eq!(result.score, STRONG_SCORE);
        prop_assert!(readings.iter().all(|r| r.outcome == Outcome::Pass));
    }

    /// Whatever the draw, a some-fail sample has a failure and scores weak.
    #[test]
    fn some_fail_samples_score_weak(
        seed in any::<u64>(),
        direction in any_direction(),
        n in 1usize..80,
    ) {
        let readings = SampleGenerator::seeded(seed)
            .generate(direction, Scenario::SomeFail, n)
            .unwrap();
        let result = compute_score(&readings, direction).unwrap();
        prop_assert!(result.fail_count >= 1);
        prop_assert_eq!(result.score, WEAK_SCORE);
    }

    /// Equal values never pass, in either direction.
    #[test]
    fn ties_always_fail(value in -1_000.0f64..1_000.0, direction in any_direction()) {
        let reading = Reading::new(1, 0, value, value, direction);
        prop_assert_eq!(reading.outcome, Outcome::Fail);
        let result = compute_score(&[reading], direction).unwrap();
        prop_assert_eq!(result.sum_of_outcomes, -1);
        prop_assert_eq!(result.score, WEAK_SCORE);
    }
}

#[test]
fn reference_buy_scenarios_with_36_readings() {
    let mut generator = SampleGenerator::seeded(2024);

    let pass = generator.generate(Direction::Buy, Scenario::AllPass, 36).unwrap();
    let result = compute_score(&pass, Direction::Buy).unwrap();
    assert_eq!(result.sum_of_outcomes, 36);
    assert_eq!(result.score, 5.0);

    let fail = generator.generate(Direction::Buy, Scenario::SomeFail, 36).unwrap();
    let result = compute_score(&fail, Direction::Buy).unwrap();
    assert!(fail.iter().any(|r| r.outcome == Outcome::Fail));
    assert_eq!(result.score, 0.5);
}

#[test]
fn report_serialises_to_json() {
    let readings = SampleGenerator::seeded(8)
        .generate(Direction::Sell, Scenario::AllPass, 4)
        .unwrap();
    let report =
        scoring::ScoreReport::build("json", Direction::Sell, Scenario::AllPass, readings).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["direction"], "SELL");
    assert_eq!(value["scenario"], "all-pass");
    assert_eq!(value["result"]["score"], 5.0);
    assert_eq!(value["target_sum"], "+4");
    assert_eq!(value["readings"].as_array().unwrap().len(), 4);
    assert_eq!(value["readings"][0]["outcome"], "pass");
}
