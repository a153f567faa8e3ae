//! Explicit seeding of a stream: SetSeed / GetState.

use proptest::prelude::*;
use rngstreams_core::{PackageSeed, RngStream, SeedError};

const M1: u64 = 4294967087;
const M2: u64 = 4294944443;

fn stream() -> RngStream {
    PackageSeed::new().next_stream("seeding")
}

fn valid_triple(bound: u64) -> impl Strategy<Value = [u64; 3]> {
    proptest::array::uniform3(0..bound)
        .prop_filter("triple must not be all zero", |t| t.iter().any(|&v| v != 0))
}

fn valid_seed() -> impl Strategy<Value = [u64; 6]> {
    (valid_triple(M1), valid_triple(M2)).prop_map(|(a, b)| [a[0], a[1], a[2], b[0], b[1], b[2]])
}

proptest! {
    #[test]
    fn set_seed_then_get_state_round_trips(seed in valid_seed()) {
        let mut s = stream();
        prop_assert!(s.set_seed(&seed).is_ok());
        prop_assert_eq!(s.get_state(), seed);
        prop_assert_eq!(s.initial_seed(), seed);
        prop_assert_eq!(s.substream_seed(), seed);
    }

    #[test]
    fn oversized_component_is_rejected_without_mutation(
        seed in valid_seed(),
        index in 0usize..6,
        excess in 0u64..1_000_000,
    ) {
        let mut s = stream();
        s.rand_u01();
        let before = s.clone();

        let mut bad = seed;
        let bound = if index < 3 { M1 } else { M2 };
        bad[index] = bound + excess;

        let is_too_large = matches!(
            s.set_seed(&bad),
            Err(SeedError::ComponentTooLarge { .. })
        );
        prop_assert!(is_too_large);
        prop_assert_eq!(s, before);
    }

    #[test]
    fn zero_triples_are_rejected_without_mutation(seed in valid_seed()) {
        let mut s = stream();
        let before = s.clone();

        let mut first_zero = seed;
        first_zero[..3].copy_from_slice(&[0, 0, 0]);
        prop_assert_eq!(s.set_seed(&first_zero), Err(SeedError::FirstTripleZero));

        let mut last_zero = seed;
        last_zero[3..].copy_from_slice(&[0, 0, 0]);
        prop_assert_eq!(s.set_seed(&last_zero), Err(SeedError::LastTripleZero));

        prop_assert_eq!(s, before);
    }
}

#[test]
fn set_seed_restarts_stream_and_substream() {
    let seed = [1, 2, 3, 4, 5, 6];
    let mut s = stream();
    s.reset_next_substream();
    s.set_seed(&seed).unwrap();

    let first = s.rand_u01();
    s.reset_next_substream();
    s.reset_start_stream();
    assert_eq!(s.rand_u01(), first);
}

#[test]
fn seeded_streams_draw_identically() {
    let seed = [987654321, 1, 2, 3, 4, 987654321];
    let mut a = stream();
    let mut b = PackageSeed::new().next_stream("other");
    b.rand_u01();
    a.set_seed(&seed).unwrap();
    b.set_seed(&seed).unwrap();

    for _ in 0..100 {
        assert_eq!(a.rand_u01(), b.rand_u01());
    }
}

#[test]
fn largest_valid_components_are_accepted() {
    let mut s = stream();
    let seed = [M1 - 1, M1 - 1, M1 - 1, M2 - 1, M2 - 1, M2 - 1];
    assert_eq!(s.set_seed(&seed), Ok(()));
    assert_eq!(s.get_state(), seed);
}

#[test]
fn second_triple_between_moduli_is_rejected() {
    let mut s = stream();
    let seed = [1, 1, 1, M2, 1, 1];
    assert!(M2 < M1);
    assert_eq!(
        s.set_seed(&seed),
        Err(SeedError::ComponentTooLarge { index: 3, value: M2, bound: M2 })
    );
}
