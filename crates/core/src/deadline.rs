//! Deadline classification shown next to each goal.

use chrono::NaiveDate;
use serde::Serialize;

use crate::goal::{Goal, GoalStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "days", rename_all = "snake_case")]
pub enum DeadlineState {
    Completed,
    Archived,
    /// Target date is before today
    Overdue,
    DueToday,
    /// Due within the due-soon window
    DueSoon(i64),
    /// Active with this many days left
    OnTrack(i64),
}

impl DeadlineState {
    /// Classifies `goal` relative to `today`.
    #[must_use]
    pub fn of(goal: &Goal, today: NaiveDate, due_soon_days: i64) -> Self {
        match goal.status {
            GoalStatus::Completed => Self::Completed,
            GoalStatus::Archived => Self::Archived,
            GoalStatus::Active => {
                let days_remaining = (goal.target_date - today).num_days();
                if days_remaining < 0 {
                    Self::Overdue
                } else if days_remaining == 0 {
                    Self::DueToday
                } else if days_remaining <= due_soon_days {
                    Self::DueSoon(days_remaining)
                } else {
                    Self::OnTrack(days_remaining)
                }
            },
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match *self {
            Self::Completed => "Completed".to_owned(),
            Self::Archived => "Archived".to_owned(),
            Self::Overdue => "Overdue".to_owned(),
            Self::DueToday => "Due Today".to_owned(),
            Self::DueSoon(days) => format!("Due in {days} day{}", plural(days)),
            Self::OnTrack(days) => format!("Active ({days} day{} left)", plural(days)),
        }
    }
}

const fn plural(days: i64) -> &'static str {
    if days == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::{NewGoal, Priority};

    fn goal_due(target: NaiveDate, status: GoalStatus) -> Goal {
        NewGoal::new("g", target, Priority::Low).status(status).into_goal("g".to_owned(), 0)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn classifies_relative_to_today() {
        let today = day(10);
        let of = |target, status| DeadlineState::of(&goal_due(target, status), today, 7);
        assert_eq!(of(day(9), GoalStatus::Active), DeadlineState::Overdue);
        assert_eq!(of(day(10), GoalStatus::Active), DeadlineState::DueToday);
        assert_eq!(of(day(11), GoalStatus::Active), DeadlineState::DueSoon(1));
        assert_eq!(of(day(17), GoalStatus::Active), DeadlineState::DueSoon(7));
        assert_eq!(of(day(18), GoalStatus::Active), DeadlineState::OnTrack(8));
        assert_eq!(of(day(1), GoalStatus::Completed), DeadlineState::Completed);
        assert_eq!(of(day(1), GoalStatus::Archived), DeadlineState::Archived);
    }

    #[test]
    fn labels_pluralize() {
        assert_eq!(DeadlineState::DueSoon(1).label(), "Due in 1 day");
        assert_eq!(DeadlineState::DueSoon(3).label(), "Due in 3 days");
        assert_eq!(DeadlineState::OnTrack(12).label(), "Active (12 days left)");
    }
}
