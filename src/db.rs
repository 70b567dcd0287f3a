//! SQLite pool construction and schema initialization.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Connect to the database named by `database_url`.
///
/// Foreign key enforcement is enabled on every connection; deleting a
/// question must cascade to its choices.
pub async fn connect(database_url: &str) -> sqlx::Result<SqlitePool> {
	let options = SqliteConnectOptions::from_str(database_url)?
		.create_if_missing(true)
		.foreign_keys(true);

	SqlitePoolOptions::new().connect_with(options).await
}

/// Create the polls tables if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS polls_question (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			question_text VARCHAR(200) NOT NULL,
			pub_date DATETIME NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await?;

	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS polls_choice (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			question_id INTEGER NOT NULL
				REFERENCES polls_question(id) ON DELETE CASCADE,
			choice_text VARCHAR(200) NOT NULL,
			votes INTEGER NOT NULL DEFAULT 0
		)
		"#,
	)
	.execute(pool)
	.await?;

	Ok(())
}
