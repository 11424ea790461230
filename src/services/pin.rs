// src/services/pin.rs
// DOCUMENTATION: One-time code generation and lifetime arithmetic

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Random numeric PIN of `length` digits (leading zeros allowed)
pub fn generate_pin(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Verifications created at or before this instant are inactive
pub fn expiry_cutoff(now: DateTime<Utc>, lifetime_secs: i64) -> DateTime<Utc> {
    now - Duration::seconds(lifetime_secs)
}

/// True while the code is still inside its lifetime
pub fn is_awaiting(created_at: DateTime<Utc>, now: DateTime<Utc>, lifetime_secs: i64) -> bool {
    created_at > expiry_cutoff(now, lifetime_secs)
}

/// Whole seconds left before a new code may be requested, never negative
pub fn seconds_until_resend(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    lifetime_secs: i64,
) -> i64 {
    let remaining_ms = lifetime_secs * 1000 - (now - created_at).num_milliseconds();
    remaining_ms.max(0) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pin_is_numeric() {
        for length in [1, 4, 6, 10] {
            let pin = generate_pin(length);
            assert_eq!(pin.len(), length);
            assert!(pin.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_is_awaiting_window() {
        let now = Utc::now();
        assert!(is_awaiting(now - Duration::seconds(10), now, 180));
        assert!(is_awaiting(now - Duration::milliseconds(179_999), now, 180));
        assert!(!is_awaiting(now - Duration::seconds(180), now, 180));
        assert!(!is_awaiting(now - Duration::seconds(600), now, 180));
    }

    #[test]
    fn test_seconds_until_resend_rounds_down() {
        let now = Utc::now();
        let created = now - Duration::milliseconds(10_500);
        assert_eq!(seconds_until_resend(created, now, 180), 169);
    }

    #[test]
    fn test_seconds_until_resend_fresh_code() {
        let now = Utc::now();
        assert_eq!(seconds_until_resend(now, now, 180), 180);
    }

    #[test]
    fn test_seconds_until_resend_never_negative() {
        let now = Utc::now();
        let created = now - Duration::seconds(500);
        assert_eq!(seconds_until_resend(created, now, 180), 0);
    }
}
