//! Primality classification for spawned numbers

/// Returns true if `n` is prime (trial division up to floor(sqrt(n)))
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d: i64 = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut prime = vec![true; limit + 1];
        prime[0] = false;
        if limit >= 1 {
            prime[1] = false;
        }
        let mut i = 2;
        while i * i <= limit {
            if prime[i] {
                let mut j = i * i;
                while j <= limit {
                    prime[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        prime
    }

    #[test]
    fn test_known_primes() {
        for p in [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 97] {
            assert!(is_prime(p), "{p} should be prime");
        }
    }

    #[test]
    fn test_known_composites() {
        for n in [0, 1, 4, 6, 8, 9, 10, 12, 15, 20, 100] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn test_negative_numbers() {
        assert!(!is_prime(-1));
        assert!(!is_prime(-5));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(is_prime(999_999_999_989));
        assert!(!is_prime(999_999_999_987));
        // 7^2 * 73 * 127 * 337 * 92737 * 649657
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    #[ignore = "about 3e9 trial divisions"]
    fn test_largest_i64_prime() {
        assert!(is_prime(9_223_372_036_854_775_783));
    }

    #[test]
    fn test_agrees_with_sieve() {
        let reference = sieve(10_000);
        for (n, &expected) in reference.iter().enumerate() {
            assert_eq!(is_prime(n as i64), expected, "mismatch at {n}");
        }
    }

    #[test]
    fn test_perfect_squares_of_primes() {
        // Boundary case: the divisor equals floor(sqrt(n))
        for p in [2i64, 3, 5, 7, 97, 101] {
            assert!(!is_prime(p * p));
        }
    }

    proptest! {
        #[test]
        fn prop_product_is_composite(a in 2i64..1000, b in 2i64..1000) {
            prop_assert!(!is_prime(a * b));
        }
    }
}
