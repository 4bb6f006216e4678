use proptest::prelude::*;
use samplekit::{
    reservoir_sample, reservoir_sample_iter, sample_with_replacement, ErrorKind, RandomSource,
    Reservoir, SamplingError, WeightedIndex,
};
use std::collections::HashSet;

fn arb_items(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..max_len)
}

fn arb_weight() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), (1u32..1000).prop_map(|w| w as f64 / 10.0)]
}

fn arb_weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_weight(), 1..30)
        .prop_filter("needs a positive weight", |ws| ws.iter().any(|&w| w > 0.0))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn reservoir_size_is_min_of_k_and_len(items in arb_items(200), k in 0usize..250, seed in any::<u64>()) {
        let sample = reservoir_sample(&mut RandomSource::new(seed), &items, k);
        prop_assert_eq!(sample.len(), k.min(items.len()));
    }

    #[test]
    fn reservoir_picks_distinct_positions(len in 0usize..200, k in 0usize..50, seed in any::<u64>()) {
        let positions: Vec<usize> = (0..len).collect();
        let sample = reservoir_sample(&mut RandomSource::new(seed), &positions, k);

        let unique: HashSet<usize> = sample.iter().copied().collect();
        prop_assert_eq!(unique.len(), sample.len());
        prop_assert!(sample.iter().all(|&p| p < len));
    }

    #[test]
    fn reservoir_is_deterministic(items in arb_items(200), k in 0usize..50, seed in any::<u64>()) {
        let a = reservoir_sample(&mut RandomSource::new(seed), &items, k);
        let b = reservoir_sample(&mut RandomSource::new(seed), &items, k);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn incremental_and_streaming_agree(items in arb_items(200), k in 0usize..50, seed in any::<u64>()) {
        let mut rng = RandomSource::new(seed);
        let mut reservoir = Reservoir::new(k);
        for &item in &items {
            reservoir.observe(&mut rng, item);
        }

        let streamed = reservoir_sample_iter(&mut RandomSource::new(seed), items.iter().copied(), k);
        prop_assert_eq!(reservoir.seen(), items.len());
        prop_assert_eq!(reservoir.into_sample(), streamed);
    }

    #[test]
    fn weighted_indices_are_in_range_and_positive(weights in arb_weights(), q in 1usize..500, seed in any::<u64>()) {
        let samples = sample_with_replacement(&mut RandomSource::new(seed), &weights, q).unwrap();

        prop_assert_eq!(samples.len(), q);
        for &i in &samples {
            prop_assert!(i < weights.len());
            prop_assert!(weights[i] > 0.0, "drew zero-weight index {}", i);
        }
    }

    #[test]
    fn weighted_table_matches_scan(weights in arb_weights(), q in 1usize..200, seed in any::<u64>()) {
        let scanned = sample_with_replacement(&mut RandomSource::new(seed), &weights, q).unwrap();
        let table = WeightedIndex::new(&weights).unwrap();
        let looked_up = table.sample_n(&mut RandomSource::new(seed), q).unwrap();
        prop_assert_eq!(scanned, looked_up);
    }

    #[test]
    fn negative_weights_always_fail(mut weights in arb_weights(), at in any::<prop::sample::Index>(), seed in any::<u64>()) {
        let i = at.index(weights.len());
        weights[i] = -1.0;

        let mut rng = RandomSource::new(seed);
        for _ in 0..3 {
            let error = sample_with_replacement(&mut rng, &weights, 10).unwrap_err();
            prop_assert_eq!(error.kind(), ErrorKind::InvalidArgument);
            prop_assert_eq!(error, SamplingError::InvalidWeight { index: i, weight: -1.0 });
        }
    }
}
