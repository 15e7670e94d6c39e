//! Service layer for goalflow
//!
//! Business rules between the CLI and storage: progress sync after subtask
//! changes, display ordering, idea conversion and archive import/export.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod archive_service;
mod error;
mod goal_service;
mod idea_service;
mod quote_service;

pub use archive_service::ArchiveService;
pub use error::ServiceError;
pub use goal_service::{GoalDetail, GoalService};
pub use idea_service::IdeaService;
pub use quote_service::QuoteService;
