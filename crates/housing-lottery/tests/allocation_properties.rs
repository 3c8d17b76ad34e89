//! Property-based checks for the allocation engine and the combination rule.

use housing_lottery::lottery::{
    allocate, combine_independent, Category, CitySelection, LotteryRecord, SelectionError,
};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = LotteryRecord> {
    (
        0u64..2_000,
        0u64..20_000,
        prop::array::uniform4((0u64..500, 0u64..2_000)),
    )
        .prop_map(|(total_houses, applicants, quotas)| {
            Category::ordered().into_iter().zip(quotas).fold(
                LotteryRecord::new("Generated", "Anywhere", total_houses, applicants),
                |record, (category, (houses, category_applicants))| {
                    record.with_quota(category, houses, category_applicants)
                },
            )
        })
}

fn arb_probabilities() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, 0..8)
}

proptest! {
    #[test]
    fn win_probability_stays_in_unit_interval(record in arb_record()) {
        let result = allocate(&record);
        prop_assert!((0.0..=1.0).contains(&result.win_probability));
    }

    #[test]
    fn no_competitors_means_no_chance(record in arb_record()) {
        let result = allocate(&record);
        if result.total_competitors == 0 {
            prop_assert_eq!(result.win_probability, 0.0);
        }
    }

    #[test]
    fn general_pool_never_exceeds_total_supply(record in arb_record()) {
        let result = allocate(&record);
        let supply = record.total_houses.max(record.quotas.designated_houses());
        prop_assert!(result.general_pool_houses <= supply);
        prop_assert!(result.regular_houses <= record.total_houses);
    }

    #[test]
    fn combining_is_order_independent(mut probabilities in arb_probabilities()) {
        let forward = combine_independent(probabilities.iter().copied());
        probabilities.reverse();
        let backward = combine_independent(probabilities.iter().copied());
        prop_assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn adding_a_lottery_never_lowers_the_odds(
        probabilities in arb_probabilities(),
        extra in 0.0f64..=1.0,
    ) {
        let before = combine_independent(probabilities.iter().copied());
        let after = combine_independent(probabilities.iter().copied().chain([extra]));
        prop_assert!(after + 1e-12 >= before);
        prop_assert!((0.0..=1.0).contains(&after));
    }

    #[test]
    fn pair_of_equal_lotteries_matches_closed_form(p in 0.0f64..=1.0) {
        let combined = combine_independent([p, p]);
        prop_assert!((combined - (1.0 - (1.0 - p).powi(2))).abs() < 1e-12);
        prop_assert!((combine_independent([p]) - p).abs() < 1e-12);
    }

    #[test]
    fn selection_never_grows_past_three(cities in prop::collection::vec("[a-z]{1,6}", 0..10)) {
        let mut selection = CitySelection::new();
        for city in cities {
            let before = selection.clone();
            match selection.add(city) {
                Ok(_) => {}
                Err(SelectionError::CapacityExceeded { .. }) => {
                    prop_assert_eq!(&selection, &before);
                }
            }
            prop_assert!(selection.len() <= 3);
        }
    }
}

#[test]
fn combining_nothing_is_zero() {
    assert_eq!(combine_independent(std::iter::empty()), 0.0);
}
