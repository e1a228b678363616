//! User id generation
//!
//! Ids combine a base-36 millisecond timestamp with a random alphanumeric
//! suffix. The timestamp keeps ids roughly ordered by creation; the suffix
//! separates users registered in the same millisecond. The registry still
//! checks each new id against existing records before using it.

use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};

/// Length of the random part of an id.
const SUFFIX_LEN: usize = 9;

/// Generate a new user id for a record created at `now`.
pub fn generate_user_id(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!("{}{}", to_base36(millis), suffix)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
