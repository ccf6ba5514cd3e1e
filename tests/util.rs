use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(expected: &[T], mut sampler: impl FnMut() -> T) {
    // expected is not a HashSet so failures print in a reasonable order
    assert!(
        expected.iter().all_unique(),
        "Got duplicate value in expected: {:?}",
        expected
    );
    assert!(!expected.is_empty(), "expected at least one value to sample");

    let samples_per_value = 1000;
    let total_samples = samples_per_value * expected.len();

    let mut all_counts: HashMap<T, u64> = expected.iter().map(|&value| (value, 0)).collect();

    for _ in 0..total_samples {
        let sample = sampler();
        match all_counts.get_mut(&sample) {
            None => panic!("Non-expected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    for value in expected {
        let count = *all_counts.get(value).unwrap();
        let relative = count as f32 / samples_per_value as f32;

        assert!(
            (0.8..1.2).contains(&relative),
            "Value {:?} was over/under sampled {} ~ {}",
            value,
            count,
            relative,
        );
    }
}
