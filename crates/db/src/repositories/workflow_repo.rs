//! Transactional application of workflow transition plans.
//!
//! This is the only write path for entity status columns. A transition is
//! one atomic unit: re-read the status under a row lock, re-validate against
//! the plan, update the entity, append the history row, commit. An approval
//! that is not recorded in history is defined as not having happened.

use oia_core::types::DbId;
use oia_core::workflow::{EntityType, TransitionPlan, WorkflowError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::history::HistoryRecord;
use crate::repositories::history_repo::HistoryRepo;

/// Failures from applying a transition plan.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowApplyError {
    /// The entity's status changed between planning and applying, or any
    /// other guard-level denial detected under the lock.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// The entity row does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The transaction failed; nothing was written.
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Applies validated transition plans to entity rows.
pub struct WorkflowRepo;

impl WorkflowRepo {
    /// Read the current status of an entity, if it exists.
    ///
    /// Used by handlers to plan a transition; the plan is re-validated under
    /// a row lock in [`WorkflowRepo::apply`], so a stale read here is safe.
    pub async fn current_status(
        pool: &PgPool,
        entity_type: EntityType,
        id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        let query = format!("SELECT status FROM {} WHERE id = $1", entity_type.table());
        sqlx::query_scalar(&query).bind(id).fetch_optional(pool).await
    }

    /// Read the owner (`created_by`) of an entity, if it exists.
    pub async fn owner_of(
        pool: &PgPool,
        entity_type: EntityType,
        id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT created_by FROM {} WHERE id = $1",
            entity_type.table()
        );
        sqlx::query_scalar(&query).bind(id).fetch_optional(pool).await
    }

    /// Apply a transition plan atomically, returning the appended history row.
    ///
    /// Locks the entity row with `SELECT ... FOR UPDATE`, so of two
    /// concurrent identical transitions exactly one commits; the loser
    /// observes the already-updated status and fails with
    /// [`WorkflowError::InvalidTransition`].
    pub async fn apply(
        pool: &PgPool,
        entity_id: DbId,
        plan: &TransitionPlan,
    ) -> Result<HistoryRecord, WorkflowApplyError> {
        let table = plan.entity_type.table();
        let mut tx = pool.begin().await?;

        let current: Option<String> =
            sqlx::query_scalar(&format!("SELECT status FROM {table} WHERE id = $1 FOR UPDATE"))
                .bind(entity_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(current) = current else {
            return Err(WorkflowApplyError::NotFound {
                entity: plan.entity_type.display_name(),
                id: entity_id,
            });
        };

        if current != plan.from_status {
            return Err(WorkflowError::InvalidTransition {
                from: current,
                action: plan.action.as_str(),
            }
            .into());
        }

        if plan.sets_approval() {
            sqlx::query(&format!(
                "UPDATE {table} SET status = $2, approved_by = $3, approved_at = NOW(), \
                 updated_at = NOW() WHERE id = $1"
            ))
            .bind(entity_id)
            .bind(plan.to_status)
            .bind(plan.actor_id)
            .execute(&mut *tx)
            .await?;
        } else if plan.sets_rejection() {
            sqlx::query(&format!(
                "UPDATE {table} SET status = $2, rejected_at = NOW(), rejection_reason = $3, \
                 updated_at = NOW() WHERE id = $1"
            ))
            .bind(entity_id)
            .bind(plan.to_status)
            .bind(plan.reason.as_deref())
            .execute(&mut *tx)
            .await?;
        } else if plan.sets_reviewer() {
            sqlx::query(&format!(
                "UPDATE {table} SET status = $2, reviewed_by = $3, updated_at = NOW() \
                 WHERE id = $1"
            ))
            .bind(entity_id)
            .bind(plan.to_status)
            .bind(plan.actor_id)
            .execute(&mut *tx)
            .await?;
        } else if plan.increments_revision() {
            // revision_count only ever increases; it is never reset.
            sqlx::query(&format!(
                "UPDATE {table} SET status = $2, revision_count = revision_count + 1, \
                 updated_at = NOW() WHERE id = $1"
            ))
            .bind(entity_id)
            .bind(plan.to_status)
            .execute(&mut *tx)
            .await?;
        } else {
            sqlx::query(&format!(
                "UPDATE {table} SET status = $2, updated_at = NOW() WHERE id = $1"
            ))
            .bind(entity_id)
            .bind(plan.to_status)
            .execute(&mut *tx)
            .await?;
        }

        let record = HistoryRepo::append(
            &mut tx,
            HistoryInsert {
                id: Uuid::now_v7(),
                entity_type: plan.entity_type.as_str(),
                entity_id,
                from_status: plan.from_status,
                to_status: plan.to_status,
                action: plan.action.as_str(),
                actor_id: plan.actor_id,
                comment: plan.reason.as_deref(),
            },
        )
        .await?;

        tx.commit().await?;
        Ok(record)
    }
}

/// Borrowed insert arguments for a history row.
pub struct HistoryInsert<'a> {
    pub id: DbId,
    pub entity_type: &'static str,
    pub entity_id: DbId,
    pub from_status: &'a str,
    pub to_status: &'a str,
    pub action: &'static str,
    pub actor_id: DbId,
    pub comment: Option<&'a str>,
}
