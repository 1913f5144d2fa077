use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use salescast_core::constants::FEATURE_WIDTH;
use salescast_core::{
    Category, CompanyChoice, CompanySize, CompleteSelection, FeatureVector, Genre, PlatformTier,
    Rating, encode, missing_score_indicator,
};

fn random_selection(rng: &mut ChaCha8Rng) -> CompleteSelection {
    let score = if rng.gen_bool(0.2) {
        0.0
    } else {
        rng.gen_range(0.01..=10.0)
    };
    CompleteSelection {
        company: *CompanyChoice::OPTIONS.choose(rng).unwrap(),
        critic_score: score,
        genre: *Genre::ALL.choose(rng).unwrap(),
        platform: *PlatformTier::ALL.choose(rng).unwrap(),
        price: rng.gen_range(0.01..=500.0),
        rating: *Rating::ALL.choose(rng).unwrap(),
    }
}

fn assert_one_hot<C: Category + PartialEq + std::fmt::Debug>(row: &FeatureVector, expected: C) {
    let block = row.block::<C>();
    assert_eq!(block.len(), C::WIDTH);
    assert!((block.iter().sum::<f64>() - 1.0).abs() < f64::EPSILON);
    assert!(block.iter().all(|&v| v == 0.0 || v == 1.0));
    assert_eq!(row.hot_index::<C>(), Some(expected.feature_index()));
}

#[test]
fn documented_example_sets_expected_columns() {
    let selection = CompleteSelection {
        company: CompanyChoice::Size(CompanySize::Large),
        critic_score: 8.5,
        genre: Genre::Action,
        platform: PlatformTier::Pc,
        price: 59.99,
        rating: Rating::Level1,
    };
    let batch = encode(&selection).unwrap();
    assert_eq!(batch.len(), 1);
    let row = &batch[0].features;
    assert_eq!(row.as_slice().len(), FEATURE_WIDTH);
    assert_eq!(row.hot_index::<CompanySize>(), Some(0));
    assert_eq!(row.hot_index::<PlatformTier>(), Some(2));
    assert_eq!(row.hot_index::<Rating>(), Some(0));
    assert_eq!(row.hot_index::<Genre>(), Some(0));
    assert_eq!(row.get(0), Some(8.5));
    assert!((row.get(1).unwrap() - 59.99_f64.ln()).abs() < 1e-12);
    assert_eq!(row.get(2), Some(0.0));
}

#[test]
fn seeded_sweep_keeps_layout_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5A1E_5CA5);
    for _ in 0..500 {
        let selection = random_selection(&mut rng);
        let batch = encode(&selection).unwrap();

        match selection.company {
            CompanyChoice::Size(size) => {
                assert_eq!(batch.len(), 1);
                assert_one_hot(&batch[0].features, size);
                assert!(batch[0].company.is_none());
            }
            CompanyChoice::ShowAll => {
                assert_eq!(batch.len(), 3);
                for (row, &size) in batch.iter().zip(CompanySize::ALL) {
                    assert_eq!(row.company, Some(size));
                    assert_one_hot(&row.features, size);
                }
                // Rows differ only inside the company block.
                let first = batch[0].features.as_slice();
                for row in &batch[1..] {
                    for (col, (a, b)) in first.iter().zip(row.features.as_slice()).enumerate() {
                        if !(CompanySize::OFFSET..CompanySize::OFFSET + CompanySize::WIDTH)
                            .contains(&col)
                        {
                            assert!((a - b).abs() < f64::EPSILON, "column {col} differs");
                        }
                    }
                }
            }
        }

        for row in &batch {
            let features = &row.features;
            assert_eq!(features.as_slice().len(), FEATURE_WIDTH);
            assert_one_hot(features, selection.rating);
            assert_one_hot(features, selection.platform);
            assert_one_hot(features, selection.genre);
            assert_eq!(
                features.get(2),
                Some(missing_score_indicator(selection.critic_score))
            );
        }
    }
}

#[test]
fn missing_score_indicator_only_fires_at_zero() {
    assert!((missing_score_indicator(0.0) - 1.0).abs() < f64::EPSILON);
    assert!(missing_score_indicator(0.01).abs() < f64::EPSILON);
    assert!(missing_score_indicator(10.0).abs() < f64::EPSILON);
}
