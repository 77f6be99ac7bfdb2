use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement};

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    password_hash: Option<String>,
    role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role,
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    let err_str = err.to_string();
    err_str.contains("duplicate key") || err_str.contains("unique constraint")
}

fn write_error(err: DbErr, email: &str) -> UserError {
    if is_unique_violation(&err) {
        UserError::DuplicateEmail(email.to_string())
    } else {
        UserError::Database(err.to_string())
    }
}

const COLUMNS: &str = "id, name, email, password_hash, role";

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let sql = format!(
            "INSERT INTO users (name, email, password_hash, role) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                input.name.into(),
                input.email.clone().into(),
                input.password_hash.into(),
                input.role.into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| write_error(e, &input.email))?
            .ok_or_else(|| UserError::Database("insert returned no row".to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = UserRow::find_by_statement(stmt).one(&self.db).await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [email.into()]);

        let row = UserRow::find_by_statement(stmt).one(&self.db).await?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: i32, input: &UpdateUser) -> UserResult<u64> {
        let sql = "UPDATE users SET name = $1, email = $2 WHERE id = $3";

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [input.name.clone().into(), input.email.clone().into(), id.into()],
        );

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(|e| write_error(e, &input.email))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> UserResult<u64> {
        let sql = "DELETE FROM users WHERE id = $1";
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let result = self.db.execute_raw(stmt).await?;

        Ok(result.rows_affected())
    }
}
