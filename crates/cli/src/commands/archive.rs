use std::path::Path;

use anyhow::Result;
use goalflow_core::today;
use goalflow_service::{ArchiveService, QuoteService};
use serde_json::json;

use crate::{open_store, print_json};

pub(crate) async fn run_quote(all: bool) -> Result<()> {
    let service = QuoteService::new(open_store()?);
    if all {
        return print_json(&service.all_quotes().await?);
    }
    match service.quote_for(today()).await? {
        Some(quote) => print_json(&quote),
        None => anyhow::bail!("no quotes stored"),
    }
}

pub(crate) async fn run_export(dir: &Path) -> Result<()> {
    let service = ArchiveService::new(open_store()?);
    let path = service.export_to_dir(dir).await?;
    print_json(&json!({ "exported": path }))
}

pub(crate) async fn run_import(file: &Path) -> Result<()> {
    let service = ArchiveService::new(open_store()?);
    let summary = service.import_file(file).await?;
    print_json(&json!({ "imported": summary }))
}
