use super::{create_test_storage, date};
use crate::StorageError;
use goalflow_core::{IdeaPatch, NewIdea, Priority, Rating};

#[test]
fn test_add_and_update_idea() {
    let (storage, _temp_dir) = create_test_storage();
    let idea = storage.add_idea(NewIdea::new("Start a podcast", Rating::Unset, Rating::High)).unwrap();
    assert!(!idea.is_converted);

    let patch = IdeaPatch { effort: Some(Rating::Low), ..IdeaPatch::default() };
    assert_eq!(storage.update_idea(&idea.id, patch).unwrap(), 1);

    let stored = storage.get_idea(&idea.id).unwrap().unwrap();
    assert_eq!(stored.effort, Rating::Low);
    assert_eq!(stored.impact, Rating::High);
    assert_eq!(stored.content, "Start a podcast");
}

#[test]
fn test_convert_idea_creates_linked_goal() {
    let (storage, _temp_dir) = create_test_storage();
    let content = "y".repeat(120);
    let idea = storage.add_idea(NewIdea::new(&content, Rating::Medium, Rating::Medium)).unwrap();

    let (converted, goal) = storage.convert_idea(&idea.id, date(2025, 3, 1)).unwrap();

    assert!(converted.is_converted);
    assert_eq!(converted.converted_goal_id.as_deref(), Some(goal.id.as_str()));
    assert_eq!(goal.title.chars().count(), 100);
    assert_eq!(goal.short_description, content);
    assert_eq!(goal.target_date, date(2025, 3, 31));
    assert_eq!(goal.priority, Priority::Medium);
    assert_eq!(goal.icon, "Lightbulb");
    assert_eq!(goal.progress, 0);

    assert_eq!(storage.get_goal(&goal.id).unwrap().unwrap(), goal);
    assert_eq!(storage.get_idea(&idea.id).unwrap().unwrap(), converted);
}

#[test]
fn test_convert_idea_twice_is_conflict() {
    let (storage, _temp_dir) = create_test_storage();
    let idea = storage.add_idea(NewIdea::new("Once only", Rating::Unset, Rating::Unset)).unwrap();
    storage.convert_idea(&idea.id, date(2025, 1, 1)).unwrap();

    let err = storage.convert_idea(&idea.id, date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));
    assert_eq!(storage.get_goals().unwrap().len(), 1);
}

#[test]
fn test_convert_missing_idea_creates_nothing() {
    let (storage, _temp_dir) = create_test_storage();
    let err = storage.convert_idea("ghost", date(2025, 1, 1)).unwrap_err();
    assert!(err.is_not_found());
    assert!(storage.get_goals().unwrap().is_empty());
}

#[test]
fn test_delete_converted_idea_keeps_goal() {
    let (storage, _temp_dir) = create_test_storage();
    let idea = storage.add_idea(NewIdea::new("Keep the goal", Rating::Unset, Rating::Unset)).unwrap();
    let (_, goal) = storage.convert_idea(&idea.id, date(2025, 1, 1)).unwrap();

    assert_eq!(storage.delete_idea(&idea.id).unwrap(), 1);
    assert!(storage.get_goal(&goal.id).unwrap().is_some());
}
