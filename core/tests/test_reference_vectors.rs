//! Golden reference vectors
//!
//! The Apache seed sequence is the published xoshiro256** reference
//! (Apache Commons RNG / Blackman–Vigna). Scenario-seed values and the
//! stream fingerprints were computed once and pinned.

use xoshiro_core_rs::{
    seed_fingerprint, Xoshiro256StarStar, APACHE_REFERENCE_SEED, SCENARIO_SEED,
};

const APACHE_EXPECTED_SEQUENCE: [u64; 40] = [
    0x462c422df780c48e, 0xa82f1f6031c183e6, 0x8a113820e8d2ca8d, 0x1ac7023a26534958,
    0xac8e41d0101e109c, 0x46e34bc13edd63c4, 0x3a26776adcd665c3, 0x9ac6c9bea8fc518c,
    0x1cef0aa07cc738c4, 0x5136a5f070244b1d, 0x12e2e12edee691ff, 0x28942b20799b71b4,
    0xbe2d5c4267af2469, 0x9dbec53728b2b9b7, 0x893cf86611b14a96, 0x712c226c79f066d6,
    0x1a8a11ef81d2ac60, 0x28171739ef8f2f46, 0x073baa93525f8b1d, 0xa73c7f3cb93df678,
    0xae5633ab977a3531, 0x25314041ba2d047e, 0x31e6819dea142672, 0x9479fa694f4c2965,
    0xde5b771a968472b7, 0xf0501965d9eeb4a3, 0xef25a2a8ec90b911, 0x1f58f71a75392659,
    0x32d9547188781f3c, 0x2d13b036ccf65bc0, 0x289f9cc038dd952f, 0x6ae2d5231e50824a,
    0x75651acfb42ab170, 0x7369aeb4f10056cf, 0x0297ed632a97cf75, 0x19f534c778015b72,
    0x5d1d111c5ff182a8, 0x861cdfe8e8014b96, 0x07c6071e08112c83, 0x15601582dcf4e4fe,
];

#[test]
fn test_apache_reference_sequence() {
    let mut rng = Xoshiro256StarStar::from(APACHE_REFERENCE_SEED);

    for (i, expected) in APACHE_EXPECTED_SEQUENCE.iter().enumerate() {
        let actual = rng.next_u64();
        assert_eq!(
            actual, *expected,
            "At sequence {}, expected 0x{:016x}, got 0x{:016x}",
            i, expected, actual
        );
    }
}

#[test]
fn test_apache_state_after_first_draw() {
    let mut rng = Xoshiro256StarStar::from(APACHE_REFERENCE_SEED);
    rng.next_u64();

    assert_eq!(
        rng.get_state(),
        [
            0xbc65ce4b74be2385,
            0x15a113293779ad94,
            0x8178f32481250897,
            0x4c5037a905fe39f0,
        ]
    );
}

#[test]
fn test_apache_int32_uses_one_draw_per_value() {
    // High-bits-only policy: the low half of each draw is discarded, never
    // returned by the following call. A caching implementation would
    // return 0xf780c48e second.
    let mut rng = Xoshiro256StarStar::from(APACHE_REFERENCE_SEED);

    for (i, draw) in APACHE_EXPECTED_SEQUENCE.iter().enumerate() {
        let actual = rng.next_u32();
        assert_eq!(
            actual,
            (draw >> 32) as u32,
            "int32 #{} should be the high half of raw draw 0x{:016x}, got 0x{:08x}",
            i,
            draw,
            actual
        );
    }
}

#[test]
fn test_scenario_seed_first_draw() {
    let mut rng = Xoshiro256StarStar::from(SCENARIO_SEED);
    assert_eq!(rng.next_u64(), 0x6659d66666666ae5);
    assert_eq!(rng.next_u64(), 0xc0cc36a0f1a744b9);
    assert_eq!(rng.next_u64(), 0x9571b3578705f94f);
    assert_eq!(rng.next_u64(), 0xf88c722f6115b128);
}

#[test]
fn test_scenario_seed_state_after_first_draw() {
    let mut rng = Xoshiro256StarStar::from(SCENARIO_SEED);
    rng.next_u64();

    assert_eq!(
        rng.get_state(),
        [
            0xe56f893236305274,
            0x472503632398f65e,
            0xcdeab7a022bfb57f,
            0x73f37eeb7be954d3,
        ]
    );
}

#[test]
fn test_scenario_seed_derived_values() {
    let seed = SCENARIO_SEED;

    let mut rng = Xoshiro256StarStar::from(seed);
    assert_eq!(rng.next_u32(), 0x6659d666);
    assert_eq!(rng.next_u32(), 0xc0cc36a0);
    assert_eq!(rng.next_i32(), 0x9571b357u32 as i32);

    let mut rng = Xoshiro256StarStar::from(seed);
    assert_eq!(rng.next_f64(), 0.39980831146240237);
    assert_eq!(rng.next_f64(), 0.7531160490922533);

    let mut rng = Xoshiro256StarStar::from(seed);
    assert_eq!(rng.next_f32(), 6707670.0 / 16777216.0);
    assert_eq!(rng.next_f32(), 12635190.0 / 16777216.0);

    let mut rng = Xoshiro256StarStar::from(seed);
    assert_eq!(
        rng.next_bytes(16),
        vec![
            0xe5, 0x6a, 0x66, 0x66, 0x66, 0xd6, 0x59, 0x66, 0xb9, 0x44, 0xa7, 0xf1, 0xa0, 0x36,
            0xcc, 0xc0,
        ]
    );
}

#[test]
fn test_hundredth_draw() {
    let mut rng = Xoshiro256StarStar::from(APACHE_REFERENCE_SEED);
    let last = (0..100).map(|_| rng.next_u64()).last();
    assert_eq!(last, Some(0x77d6b314f558b969));

    let mut rng = Xoshiro256StarStar::from(SCENARIO_SEED);
    let last = (0..100).map(|_| rng.next_u64()).last();
    assert_eq!(last, Some(0xa5cd398b7e8829f8));
}

#[test]
fn test_pinned_stream_fingerprints() {
    assert_eq!(
        seed_fingerprint(APACHE_REFERENCE_SEED, 1000),
        "5a331c9c60264901cef909f4f47e2c6aa0eaef2373897a702c87d73b4a18a256"
    );
    assert_eq!(
        seed_fingerprint(SCENARIO_SEED, 1000),
        "f09f25f314474518dfde26823be54d94967076e52f94d0297228b530649aba14"
    );
}
