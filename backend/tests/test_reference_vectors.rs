//! Reference vectors for xoroshiro128+ 1.0 seeded through splitmix64
//!
//! Seeding: `lower` = first splitmix64 output, `upper` = second.
//! The jumped states were cross-checked against the 2^64-th power of the
//! generator's 128x128 GF(2) transition matrix.

use xoroshiro_core_rs::{initial_state, sampling, XoroshiroEngine, XoroshiroState};

const SEED_42_STATE: XoroshiroState =
    XoroshiroState::from_words(0xbdd7_3226_2feb_6e95, 0x28ef_e333_b266_f103);

const SEED_42_OUTPUTS: [u64; 8] = [
    0xe6c7_1559_e252_5f98,
    0x13b6_9ac9_3ec0_6b57,
    0x8790_06cb_74f4_0d36,
    0x52d5_476e_e695_f446,
    0x7879_5b7b_6010_7e04,
    0xf55d_c2d9_2759_148d,
    0xd698_9b90_5c55_3e57,
    0x950e_a49b_7447_2750,
];

const SEED_0_OUTPUTS: [u64; 8] = [
    0x5099_46a4_1cd7_33a3,
    0xd805_fcac_6824_536e,
    0xdadc_02f3_e3cf_7be3,
    0x622e_4dd9_9d27_20e5,
    0xaacf_d52d_630b_52bd,
    0xa94f_c32e_b412_8023,
    0x9ee3_5983_9e68_f625,
    0xd9f1_80e0_3b68_6e4f,
];

#[test]
fn test_seed_42_initial_state() {
    assert_eq!(XoroshiroEngine::new(42, 0).state(), SEED_42_STATE);
}

#[test]
fn test_seed_42_outputs() {
    let mut rng = XoroshiroEngine::new(42, 0);
    let outputs: Vec<u64> = rng.iter().take(8).collect();
    assert_eq!(outputs, SEED_42_OUTPUTS);
}

#[test]
fn test_seed_0_outputs() {
    let mut rng = XoroshiroEngine::new(0, 0);
    assert_eq!(
        rng.state(),
        XoroshiroState::from_words(0xe220_a839_7b1d_cdaf, 0x6e78_9e6a_a1b9_65f4)
    );
    let outputs: Vec<u64> = rng.iter().take(8).collect();
    assert_eq!(outputs, SEED_0_OUTPUTS);
}

#[test]
fn test_seed_42_state_after_1000_steps() {
    let mut rng = XoroshiroEngine::new(42, 0);
    for _ in 0..1000 {
        rng.next_u64();
    }
    assert_eq!(
        rng.state(),
        XoroshiroState::from_words(0xcfe7_f299_3841_947b, 0xf10d_3051_ba86_91d2)
    );
}

#[test]
fn test_seed_42_jumped_states() {
    let mut state = SEED_42_STATE;

    state.jump();
    assert_eq!(
        state,
        XoroshiroState::from_words(0xbbd5_7edf_18ff_6512, 0x9358_6833_9bb6_176b)
    );

    state.jump();
    assert_eq!(
        state,
        XoroshiroState::from_words(0x6e0c_b612_fdfc_eede, 0x4e8c_8051_ec50_99ff)
    );

    assert_eq!(
        initial_state(42, 3),
        XoroshiroState::from_words(0xf5c1_32f9_ed91_ff15, 0x5be3_46a9_ec94_0a4c)
    );
}

#[test]
fn test_seed_0_jumped_state() {
    assert_eq!(
        initial_state(0, 1),
        XoroshiroState::from_words(0x7fd9_8245_dd36_8ba7, 0xad8c_a29f_1ded_1591)
    );
}

#[test]
fn test_worker_1_outputs() {
    let mut rng = XoroshiroEngine::new(42, 1);
    let outputs: Vec<u64> = rng.iter().take(4).collect();
    assert_eq!(
        outputs,
        [
            0x4f2d_e712_b4b5_7c7d,
            0x4aa7_b9e5_f52e_8497,
            0xb280_af5c_9a43_c0bb,
            0x04e3_bc87_d757_c16f,
        ]
    );
}

#[test]
fn test_jumped_stream_not_reachable_by_short_stepping() {
    let mut jumped = SEED_42_STATE;
    jumped.jump();

    let mut stepped = SEED_42_STATE;
    for _ in 0..10_000 {
        assert_ne!(stepped, jumped);
        stepped.step();
    }
}

#[test]
fn test_seed_42_unit_reals() {
    let mut rng = XoroshiroEngine::new(42, 0);
    assert_eq!(sampling::unit_f64(&mut rng), 0.9014752716487435);
    assert_eq!(sampling::unit_f64(&mut rng), 0.07700507558070206);
    assert_eq!(sampling::unit_f64(&mut rng), 0.5295414206238578);
}

#[test]
fn test_seed_42_booleans() {
    let mut rng = XoroshiroEngine::new(42, 0);
    let coins: Vec<bool> = (0..16).map(|_| sampling::boolean(&mut rng)).collect();
    assert_eq!(
        coins,
        [
            true, false, true, false, false, true, true, true, true, false, false, false, false,
            false, true, false,
        ]
    );
}
