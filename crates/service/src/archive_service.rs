//! Whole-store export to a JSON document and import from one.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use goalflow_core::{Archive, ArchiveSummary, export_file_name, parse_import};
use goalflow_storage::StorageStats;
use goalflow_storage::traits::{ArchiveStore as _, RecordStore};
use serde_json::Value;

use crate::ServiceError;

pub struct ArchiveService {
    storage: Arc<dyn RecordStore>,
}

impl ArchiveService {
    #[must_use]
    pub fn new(storage: Arc<dyn RecordStore>) -> Self {
        Self { storage }
    }

    /// Every record plus `exportedAt` and the schema `version`.
    pub async fn export(&self) -> Result<Archive, ServiceError> {
        let archive = self.storage.snapshot().await?;
        let summary = archive.summary();
        tracing::info!(goals = summary.goals, subtasks = summary.subtasks, "Export prepared");
        Ok(archive)
    }

    /// Writes the export into `dir` under a timestamped file name and
    /// returns the path written.
    pub async fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, ServiceError> {
        let archive = self.export().await?;
        let path = dir.join(export_file_name(&Local::now()));
        let body = serde_json::to_vec_pretty(&archive)?;
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, body).await?;
        tracing::info!(path = %path.display(), "Export written");
        Ok(path)
    }

    /// Validates the whole document first; the store is only replaced once
    /// every record passed.
    pub async fn import(&self, document: Value) -> Result<ArchiveSummary, ServiceError> {
        let archive = parse_import(document)?;
        Ok(self.storage.replace_all(&archive).await?)
    }

    /// Reads and imports a JSON file.
    pub async fn import_file(&self, path: &Path) -> Result<ArchiveSummary, ServiceError> {
        let bytes = tokio::fs::read(path).await?;
        let document: Value = serde_json::from_slice(&bytes)?;
        tracing::info!(path = %path.display(), "Importing archive");
        self.import(document).await
    }

    pub async fn stats(&self) -> Result<StorageStats, ServiceError> {
        Ok(self.storage.stats().await?)
    }
}

#[cfg(test)]
mod tests {
    use goalflow_storage::Storage;
    use goalflow_storage::traits::GoalStore as _;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn open(dir: &TempDir, name: &str) -> Arc<dyn RecordStore> {
        Arc::new(Storage::open(&dir.path().join(name)).unwrap())
    }

    #[tokio::test]
    async fn export_file_imports_into_fresh_store() {
        let dir = TempDir::new().unwrap();
        let source = open(&dir, "source.db");
        source
            .add_goal(goalflow_core::NewGoal::new(
                "Exported",
                chrono::NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
                goalflow_core::Priority::Low,
            ))
            .await
            .unwrap();
        let path = ArchiveService::new(source).export_to_dir(&dir.path().join("out")).await.unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("goalflow_data_export_"));

        let target = ArchiveService::new(open(&dir, "target.db"));
        let summary = target.import_file(&path).await.unwrap();
        assert_eq!(summary.goals, 1);
        assert_eq!(target.stats().await.unwrap().goals, 1);
    }

    #[tokio::test]
    async fn legacy_document_backfills_defaults() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir, "legacy.db");
        let svc = ArchiveService::new(Arc::clone(&store));
        let document = json!({
            "goals": [{ "id": "g1", "title": "Old", "targetDate": "2024-05-01", "priority": "high" }],
            "subtasks": [{ "id": "s1", "goalId": "g1", "title": "step", "targetDate": "2024-04-01" }],
        });

        svc.import(document).await.unwrap();

        let goal = store.get_goal("g1").await.unwrap().unwrap();
        assert_eq!(goal.icon, "");
        assert_eq!(goal.short_description, "");
        assert_eq!(goal.progress, 0);
        assert_eq!(goal.status, goalflow_core::GoalStatus::Active);
        assert_eq!(svc.stats().await.unwrap().quotes, goalflow_core::SEED_QUOTES.len() as u64);
    }

    #[tokio::test]
    async fn invalid_document_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = open(&dir, "guarded.db");
        let svc = ArchiveService::new(Arc::clone(&store));
        svc.import(json!({
            "goals": [{ "id": "keep", "title": "Keep me", "targetDate": "2030-01-01", "priority": "low" }],
            "subtasks": [],
        }))
        .await
        .unwrap();

        let err = svc
            .import(json!({
                "goals": [{ "id": "g2", "targetDate": "2030-01-01", "priority": "low" }],
                "subtasks": [],
            }))
            .await
            .unwrap_err();
        assert!(err.is_invalid());

        let goals = store.get_goals().await.unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].id, "keep");
    }
}
