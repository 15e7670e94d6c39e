use chrono::NaiveDate;
use goalflow_core::{Goal, Idea, IdeaPatch, NewIdea, new_id, now_millis};
use rusqlite::{Connection, OptionalExtension, params};

use super::{RowPolicy, Storage, collect_rows, get_conn, goals, parse_column};
use crate::error::StorageError;

const IDEA_COLUMNS: &str = "id, content, effort, impact, is_converted, created_at, converted_goal_id";

fn row_to_idea(row: &rusqlite::Row<'_>) -> rusqlite::Result<Idea> {
    Ok(Idea {
        id: row.get(0)?,
        content: row.get(1)?,
        effort: parse_column(2, &row.get::<_, String>(2)?)?,
        impact: parse_column(3, &row.get::<_, String>(3)?)?,
        is_converted: row.get(4)?,
        created_at: row.get(5)?,
        converted_goal_id: row.get(6)?,
    })
}

pub(crate) fn insert_idea(conn: &Connection, idea: &Idea) -> Result<(), StorageError> {
    let mut stmt = conn.prepare_cached(&format!(
        "INSERT INTO ideas ({IDEA_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
    ))?;
    stmt.execute(params![
        idea.id,
        idea.content,
        idea.effort.as_str(),
        idea.impact.as_str(),
        idea.is_converted,
        idea.created_at,
        idea.converted_goal_id,
    ])?;
    Ok(())
}

fn fetch_idea(conn: &Connection, id: &str) -> Result<Option<Idea>, StorageError> {
    Ok(conn
        .query_row(&format!("SELECT {IDEA_COLUMNS} FROM ideas WHERE id = ?1"), params![id], row_to_idea)
        .optional()?)
}

pub(crate) fn fetch_all_ideas(
    conn: &Connection,
    policy: RowPolicy,
) -> Result<Vec<Idea>, StorageError> {
    let mut stmt = conn.prepare(&format!("SELECT {IDEA_COLUMNS} FROM ideas"))?;
    let rows = stmt.query_map([], row_to_idea)?;
    collect_rows(rows, policy)
}

impl Storage {
    /// # Errors
    /// Returns error if validation or the insert fails.
    pub fn add_idea(&self, input: NewIdea) -> Result<Idea, StorageError> {
        input.validate()?;
        let idea = input.into_idea(new_id(), now_millis());
        let conn = get_conn(&self.pool)?;
        insert_idea(&conn, &idea)?;
        Ok(idea)
    }

    /// All ideas, unordered.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_ideas(&self) -> Result<Vec<Idea>, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_all_ideas(&conn, RowPolicy::Skip)
    }

    /// # Errors
    /// Returns error if database query fails.
    pub fn get_idea(&self, id: &str) -> Result<Option<Idea>, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_idea(&conn, id)
    }

    /// Content/effort/impact patch. Returns rows affected.
    ///
    /// # Errors
    /// Returns error if validation or the update fails.
    pub fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<usize, StorageError> {
        patch.validate()?;
        self.transaction(|tx| {
            let Some(mut idea) = fetch_idea(tx, id)? else {
                return Ok(0);
            };
            patch.apply(&mut idea);
            Ok(tx.execute(
                "UPDATE ideas SET content = ?2, effort = ?3, impact = ?4 WHERE id = ?1",
                params![idea.id, idea.content, idea.effort.as_str(), idea.impact.as_str()],
            )?)
        })
    }

    /// Returns rows affected. A converted idea's goal is left in place.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn delete_idea(&self, id: &str) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM ideas WHERE id = ?1", params![id])?)
    }

    /// Promotes an idea into a new goal in a single transaction: the goal is
    /// inserted and the idea marked converted with a link to it, or neither.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown idea, `Conflict` if it was already
    /// converted, or error if a write fails.
    pub fn convert_idea(&self, idea_id: &str, today: NaiveDate) -> Result<(Idea, Goal), StorageError> {
        self.transaction(|tx| {
            let mut idea =
                fetch_idea(tx, idea_id)?.ok_or_else(|| StorageError::not_found("idea", idea_id))?;
            if idea.is_converted {
                return Err(StorageError::Conflict(format!(
                    "idea {idea_id} was already converted into goal {}",
                    idea.converted_goal_id.as_deref().unwrap_or("?")
                )));
            }

            let goal = idea.goal_draft(today).into_goal(new_id(), now_millis());
            goals::insert_goal(tx, &goal)?;

            idea.is_converted = true;
            idea.converted_goal_id = Some(goal.id.clone());
            tx.execute(
                "UPDATE ideas SET is_converted = 1, converted_goal_id = ?2 WHERE id = ?1",
                params![idea.id, idea.converted_goal_id],
            )?;

            tracing::info!(idea = %idea.id, goal = %goal.id, "Idea converted to goal");
            Ok((idea, goal))
        })
    }
}
