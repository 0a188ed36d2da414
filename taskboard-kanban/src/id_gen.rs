//! Task and column id generation
//!
//! Ids look like `task-1718000000000-k3j9x0a2bq1`: a caller prefix, the
//! current time in milliseconds, a dash and a random base-36 suffix. Collisions
//! are unlikely but not impossible, which is why the repair pass exists.

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest suffix ever produced
pub const SUFFIX_LEN: usize = 13;

/// Prefix used for task ids
pub const TASK_PREFIX: &str = "task-";

/// Prefix used for column ids
pub const COLUMN_PREFIX: &str = "col-";

/// Generate `prefix + millis + "-" + base36 suffix`
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{prefix}{millis}-{}", random_suffix(&mut rand::rng()))
}

/// Random base-36 string. Like its JavaScript ancestor the suffix is usually
/// [`SUFFIX_LEN`] long but occasionally shorter.
fn random_suffix<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(SUFFIX_LEN - 3..=SUFFIX_LEN);
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id(TASK_PREFIX);
        let rest = id.strip_prefix(TASK_PREFIX).unwrap();
        let (millis, suffix) = rest.split_once('-').unwrap();

        assert!(millis.parse::<i64>().is_ok());
        assert!(!suffix.is_empty() && suffix.len() <= SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_id_unique_in_a_burst() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id("x-")).collect();
        assert_eq!(ids.len(), 1000);
    }
}
