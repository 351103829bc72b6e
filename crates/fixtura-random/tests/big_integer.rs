use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fixtura_random::{RandomError, SecureRandom};

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

#[test]
fn big_integer_has_exact_digit_count() {
    let mut source = ChaCha8Rng::seed_from_u64(11);
    let mut random = SecureRandom::with_source(&mut source);
    for digits in 1..=100 {
        let value = random.big_integer(digits).expect("draw");
        assert_eq!(
            value.to_string().len(),
            digits,
            "wrong digit count for request of {digits}"
        );
    }
}

#[test]
fn big_integer_rejects_zero_digits() {
    let mut source = ChaCha8Rng::seed_from_u64(11);
    let mut random = SecureRandom::with_source(&mut source);
    assert!(matches!(
        random.big_integer(0),
        Err(RandomError::InvalidArgument(_))
    ));
}

#[test]
fn big_integer_is_always_positive() {
    let mut source = ChaCha8Rng::seed_from_u64(12);
    let mut random = SecureRandom::with_source(&mut source);
    for digits in [1, 9, 10, 40, 80] {
        let value = random.big_integer(digits).expect("draw");
        assert!(value > BigInt::from(0));
    }
}

#[test]
fn big_integer_below_stays_under_max() {
    let mut source = ChaCha8Rng::seed_from_u64(13);
    let mut random = SecureRandom::with_source(&mut source);
    let max = BigInt::from(1000);
    for _ in 0..100 {
        let value = random.big_integer_below(&max).expect("draw");
        assert!(value >= BigInt::from(0));
        assert!(value < max);
    }
}

#[test]
fn big_integer_below_handles_unit_max() {
    let mut source = ChaCha8Rng::seed_from_u64(13);
    let mut random = SecureRandom::with_source(&mut source);
    let value = random.big_integer_below(&BigInt::from(1)).expect("draw");
    assert_eq!(value, BigInt::from(0));
}

#[test]
fn big_integer_below_rejects_non_positive_max() {
    let mut source = ChaCha8Rng::seed_from_u64(13);
    let mut random = SecureRandom::with_source(&mut source);
    for max in [BigInt::from(0), BigInt::from(-5)] {
        assert!(matches!(
            random.big_integer_below(&max),
            Err(RandomError::InvalidArgument(_))
        ));
    }
}

#[test]
fn big_integer_between_stays_in_bounds() {
    let mut source = ChaCha8Rng::seed_from_u64(14);
    let mut random = SecureRandom::with_source(&mut source);
    let min = pow10(20);
    let max = pow10(21);
    for _ in 0..50 {
        let value = random.big_integer_between(&min, &max).expect("draw");
        assert!(value >= min);
        assert!(value < max);
    }
}

#[test]
fn big_integer_between_rejects_bad_bounds() {
    let mut source = ChaCha8Rng::seed_from_u64(14);
    let mut random = SecureRandom::with_source(&mut source);
    let cases = [
        (BigInt::from(-1), BigInt::from(10)),
        (BigInt::from(10), BigInt::from(-1)),
        (BigInt::from(0), BigInt::from(10)),
        (BigInt::from(10), BigInt::from(10)),
        (BigInt::from(20), BigInt::from(10)),
    ];
    for (min, max) in cases {
        assert!(matches!(
            random.big_integer_between(&min, &max),
            Err(RandomError::InvalidArgument(_))
        ));
    }
}

#[test]
fn big_integer_fails_after_close() {
    let mut source = ChaCha8Rng::seed_from_u64(15);
    let mut random = SecureRandom::with_source(&mut source);
    random.close().expect("close");
    assert_eq!(random.big_integer(12), Err(RandomError::Closed));
}
