//! Prime enumeration via the Sieve of Atkin.
//!
//! The map only ever sizes its bucket array to a prime, so the single
//! operation the rest of the crate needs is `next_prime`: the smallest
//! prime strictly greater than a requested size. The sieve itself is
//! exposed too since it is independently useful and independently
//! testable.

/// All primes `<= limit`, in ascending order. Empty for `limit < 2`.
///
/// Sieve of Atkin: candidates are toggled by counting representations
/// under three quadratic forms, then multiples of squares are cleared.
/// Runs in `O(limit / log log limit)` time and `O(limit)` space.
pub fn sieve_of_atkin(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }
    let mut primes = vec![2];
    if limit >= 3 {
        primes.push(3);
    }

    let mut sieve = vec![false; limit + 1];
    let root = limit.isqrt();

    for x in 1..=root {
        for y in 1..=root {
            // n = 4x² + y² with n ≡ 1 or 5 (mod 12)
            let n = 4 * x * x + y * y;
            if n <= limit && (n % 12 == 1 || n % 12 == 5) {
                sieve[n] = !sieve[n];
            }
            // n = 3x² + y² with n ≡ 7 (mod 12)
            let n = 3 * x * x + y * y;
            if n <= limit && n % 12 == 7 {
                sieve[n] = !sieve[n];
            }
            // n = 3x² − y² with x > y and n ≡ 11 (mod 12)
            if x > y {
                let n = 3 * x * x - y * y;
                if n <= limit && n % 12 == 11 {
                    sieve[n] = !sieve[n];
                }
            }
        }
    }

    // Squares of primes (and their multiples) survive the quadratic-form
    // toggles with an odd count; clear them explicitly.
    for x in 5..=root {
        if sieve[x] {
            let sq = x * x;
            let mut m = sq;
            while m <= limit {
                sieve[m] = false;
                m += sq;
            }
        }
    }

    primes.extend((5..=limit).filter(|&n| sieve[n]));
    primes
}

/// Smallest prime strictly greater than `n`.
///
/// Sieves up to `n + 10` and doubles the limit until a prime past `n`
/// appears; for any realistic `n` the first attempt succeeds, since the
/// gap to the next prime is far below 10 + n extra candidates.
pub fn next_prime(n: usize) -> usize {
    let mut limit = n + 10;
    loop {
        if let Some(&p) = sieve_of_atkin(limit).iter().find(|&&p| p > n) {
            return p;
        }
        limit *= 2;
    }
}
