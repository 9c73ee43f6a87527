//! Tests for `rand` ecosystem integration

use rand::{Rng, RngCore, SeedableRng};
use xoroshiro_core_rs::{XoroshiroEngine, XoroshiroState};

#[test]
fn test_rng_core_next_u64_is_raw_output() {
    let mut a = XoroshiroEngine::new(42, 0);
    let mut b = XoroshiroEngine::new(42, 0);

    assert_eq!(RngCore::next_u64(&mut a), 0xe6c7_1559_e252_5f98);
    assert_eq!(RngCore::next_u64(&mut a), {
        b.next_u64();
        b.next_u64()
    });
}

#[test]
fn test_seed_from_u64_matches_new() {
    let rng = XoroshiroEngine::seed_from_u64(12345);
    assert_eq!(rng, XoroshiroEngine::new(12345, 0));
}

#[test]
fn test_from_seed_uses_checkpoint_layout() {
    let state = XoroshiroState::from_words(0x1111, 0x2222);
    let rng = XoroshiroEngine::from_seed(state.to_bytes());
    assert_eq!(rng.state(), state);
}

#[test]
fn test_gen_range_works_through_rand() {
    let mut rng = XoroshiroEngine::new(9, 0);
    for _ in 0..1000 {
        let v: u32 = rng.gen_range(10..20);
        assert!((10..20).contains(&v));
    }
}

#[test]
fn test_gen_bool_is_deterministic() {
    let mut a = XoroshiroEngine::new(2, 1);
    let mut b = XoroshiroEngine::new(2, 1);
    for _ in 0..100 {
        assert_eq!(a.gen_bool(0.3), b.gen_bool(0.3));
    }
}
