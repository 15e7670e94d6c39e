use std::sync::Arc;

use chrono::NaiveDate;
use goalflow_core::{Quote, quote_of_the_day};
use goalflow_storage::traits::{QuoteStore as _, RecordStore};

use crate::ServiceError;

pub struct QuoteService {
    storage: Arc<dyn RecordStore>,
}

impl QuoteService {
    #[must_use]
    pub fn new(storage: Arc<dyn RecordStore>) -> Self {
        Self { storage }
    }

    /// Same quote all day, a different one tomorrow. `None` when the quote
    /// table is empty.
    pub async fn quote_for(&self, day: NaiveDate) -> Result<Option<Quote>, ServiceError> {
        let quotes = self.storage.get_quotes().await?;
        Ok(quote_of_the_day(&quotes, day).cloned())
    }

    pub async fn all_quotes(&self) -> Result<Vec<Quote>, ServiceError> {
        Ok(self.storage.get_quotes().await?)
    }
}

#[cfg(test)]
mod tests {
    use goalflow_storage::Storage;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn quote_is_stable_within_a_day() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::open(&dir.path().join("quotes.db")).unwrap();
        let svc = QuoteService::new(Arc::new(storage));
        let day = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();

        let a = svc.quote_for(day).await.unwrap().unwrap();
        let b = svc.quote_for(day).await.unwrap().unwrap();
        let next = svc.quote_for(day.succ_opt().unwrap()).await.unwrap().unwrap();
        assert_eq!(a, b);
        assert_ne!(a.id, next.id);
        assert_eq!(svc.all_quotes().await.unwrap().len(), goalflow_core::SEED_QUOTES.len());
    }
}
