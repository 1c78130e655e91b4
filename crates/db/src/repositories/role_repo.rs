//! Repository for the `roles` and `user_roles` tables.

use oia_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

/// Provides role lookups and user-role assignment.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles in seed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>(
            "SELECT id, name, description, created_at, updated_at FROM roles ORDER BY created_at",
        )
        .fetch_all(pool)
        .await
    }

    /// The role names held by a user, alphabetical.
    pub async fn names_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT r.name FROM roles r \
             JOIN user_roles ur ON ur.role_id = r.id \
             WHERE ur.user_id = $1 \
             ORDER BY r.name",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Replace a user's role set with the given role names.
    ///
    /// Unknown role names are ignored by the insert-select; the caller
    /// validates names against the seeded vocabulary beforehand.
    pub async fn set_roles_for_user(
        pool: &PgPool,
        user_id: DbId,
        role_names: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) \
             SELECT $1, id FROM roles WHERE name = ANY($2)",
        )
        .bind(user_id)
        .bind(role_names)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Ids of all active users holding the given role.
    pub async fn user_ids_with_role(
        pool: &PgPool,
        role_name: &str,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT u.id FROM users u \
             JOIN user_roles ur ON ur.user_id = u.id \
             JOIN roles r ON r.id = ur.role_id \
             WHERE r.name = $1 AND u.is_active = true",
        )
        .bind(role_name)
        .fetch_all(pool)
        .await
    }
}
