//! In-memory filtering and sorting of goal lists.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::goal::{Goal, GoalStatus, Priority};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalSortKey {
    Title,
    TargetDate,
    #[default]
    CreatedAt,
}

impl FromStr for GoalSortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "title" => Ok(Self::Title),
            "targetdate" => Ok(Self::TargetDate),
            "createdat" => Ok(Self::CreatedAt),
            other => Err(CoreError::InvalidValue { field: "sort", value: other.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::InvalidValue { field: "order", value: other.to_owned() }),
        }
    }
}

/// Filter/sort options for a goal list. The default keeps everything,
/// newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalQuery {
    pub status: Option<GoalStatus>,
    pub priority: Option<Priority>,
    /// Case-insensitive substring over title, short description and category
    pub search: Option<String>,
    pub sort_by: GoalSortKey,
    pub order: SortOrder,
}

impl GoalQuery {
    #[must_use]
    pub fn matches(&self, goal: &Goal) -> bool {
        if self.status.is_some_and(|s| s != goal.status) {
            return false;
        }
        if self.priority.is_some_and(|p| p != goal.priority) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                [&goal.title, &goal.short_description, &goal.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            },
            _ => true,
        }
    }

    fn compare(&self, a: &Goal, b: &Goal) -> Ordering {
        let ordering = match self.sort_by {
            GoalSortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            GoalSortKey::TargetDate => a.target_date.cmp(&b.target_date),
            GoalSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Filters then sorts `goals`.
    #[must_use]
    pub fn apply(&self, goals: Vec<Goal>) -> Vec<Goal> {
        let mut kept: Vec<Goal> = goals.into_iter().filter(|g| self.matches(g)).collect();
        kept.sort_by(|a, b| self.compare(a, b));
        kept
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::goal::NewGoal;

    fn goal(title: &str, day: u32, created_at: i64, priority: Priority) -> Goal {
        NewGoal::new(title, NaiveDate::from_ymd_opt(2030, 1, day).unwrap(), priority)
            .category("Health")
            .into_goal(title.to_owned(), created_at)
    }

    fn titles(goals: &[Goal]) -> Vec<&str> {
        goals.iter().map(|g| g.title.as_str()).collect()
    }

    fn sample() -> Vec<Goal> {
        vec![
            goal("banana", 3, 10, Priority::Low),
            goal("Apple", 1, 30, Priority::High),
            goal("cherry", 2, 20, Priority::High),
        ]
    }

    #[test]
    fn default_sorts_newest_first() {
        let out = GoalQuery::default().apply(sample());
        assert_eq!(titles(&out), ["Apple", "cherry", "banana"]);
    }

    #[test]
    fn sorts_by_title_ascending_ignoring_case() {
        let query =
            GoalQuery { sort_by: GoalSortKey::Title, order: SortOrder::Asc, ..GoalQuery::default() };
        assert_eq!(titles(&query.apply(sample())), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn sorts_by_target_date_descending() {
        let query = GoalQuery { sort_by: GoalSortKey::TargetDate, ..GoalQuery::default() };
        assert_eq!(titles(&query.apply(sample())), ["banana", "cherry", "Apple"]);
    }

    #[test]
    fn filters_by_priority_and_search() {
        let query = GoalQuery {
            priority: Some(Priority::High),
            search: Some("CHER".to_owned()),
            ..GoalQuery::default()
        };
        assert_eq!(titles(&query.apply(sample())), ["cherry"]);
    }

    #[test]
    fn search_matches_category() {
        let query = GoalQuery { search: Some("health".to_owned()), ..GoalQuery::default() };
        assert_eq!(query.apply(sample()).len(), 3);
    }

    #[test]
    fn sort_key_parses_kebab_and_camel() {
        assert_eq!("target-date".parse::<GoalSortKey>().unwrap(), GoalSortKey::TargetDate);
        assert_eq!("createdAt".parse::<GoalSortKey>().unwrap(), GoalSortKey::CreatedAt);
    }
}
