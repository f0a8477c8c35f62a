//! Shared burst-activity scoring: the same group/sort/diff/threshold pattern
//! applies to the file and email sources, so it lives here once.

use chrono::NaiveDateTime;

/// Consecutive events closer than this (seconds) count toward the burst score.
pub const BURST_GAP_SECS: i64 = 300;

/// Gap assigned to a user's first event so it can never read as a burst.
pub const FIRST_EVENT_GAP_SECS: i64 = 99_999;

/// Count how many of a user's consecutive same-source events are separated by
/// at most [`BURST_GAP_SECS`]. Events are sorted by timestamp internally;
/// input order carries no meaning. Callers pass only parsable timestamps —
/// rows with malformed dates drop out of the gap sequence.
pub fn burst_score(timestamps: &[NaiveDateTime]) -> u64 {
    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();

    let mut prev: Option<NaiveDateTime> = None;
    let mut bursts = 0u64;
    for ts in sorted {
        let gap = match prev {
            Some(p) => (ts - p).num_seconds(),
            None => FIRST_EVENT_GAP_SECS,
        };
        if gap <= BURST_GAP_SECS {
            bursts += 1;
        }
        prev = Some(ts);
    }
    bursts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2010, 1, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn first_event_never_counts() {
        assert_eq!(burst_score(&[base()]), 0);
        assert_eq!(burst_score(&[]), 0);
    }

    #[test]
    fn gaps_at_and_under_threshold_count() {
        let ts = [
            base(),
            base() + Duration::seconds(100),
            base() + Duration::seconds(500),
        ];
        // gaps: sentinel, 100, 400 -> only the 100s gap is a burst
        assert_eq!(burst_score(&ts), 1);
        let exact = [base(), base() + Duration::seconds(BURST_GAP_SECS)];
        assert_eq!(burst_score(&exact), 1);
    }

    #[test]
    fn unsorted_input_is_resorted() {
        let ts = [
            base() + Duration::seconds(500),
            base(),
            base() + Duration::seconds(100),
        ];
        assert_eq!(burst_score(&ts), 1);
    }
}
