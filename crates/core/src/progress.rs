//! Derived goal progress.

use crate::subtask::Subtask;

/// Completion percentage of a subtask set, rounded half-up.
///
/// An empty set is 0%. Integer arithmetic keeps e.g. 1/3 at exactly 33 and
/// 1/2 at exactly 50 with no float drift.
#[must_use]
pub fn progress_percent(subtasks: &[Subtask]) -> u8 {
    let done = subtasks.iter().filter(|s| s.is_completed).count();
    percent_of(done, subtasks.len())
}

/// `round_half_up(100 * done / total)`, or 0 when `total` is 0.
#[must_use]
pub fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total);
    let rounded = (done * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn subtasks(done: usize, total: usize) -> Vec<Subtask> {
        (0..total)
            .map(|i| Subtask {
                id: format!("s{i}"),
                goal_id: "g".to_owned(),
                title: format!("step {i}"),
                is_completed: i < done,
                target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                created_at: 0,
            })
            .collect()
    }

    #[test]
    fn empty_set_is_zero() {
        assert_eq!(progress_percent(&[]), 0);
    }

    #[test]
    fn one_of_three_is_33() {
        assert_eq!(progress_percent(&subtasks(1, 3)), 33);
    }

    #[test]
    fn two_of_three_is_67() {
        assert_eq!(progress_percent(&subtasks(2, 3)), 67);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(percent_of(1, 2), 50);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(1, 200), 1);
        assert_eq!(percent_of(1, 201), 0);
    }

    #[test]
    fn all_done_is_100() {
        assert_eq!(progress_percent(&subtasks(4, 4)), 100);
        assert_eq!(progress_percent(&subtasks(0, 4)), 0);
    }
}
