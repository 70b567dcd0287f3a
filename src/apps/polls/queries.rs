//! Query and command operations over the polls tables.

use super::models::{Choice, Question};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Number of questions shown on the index page.
const LATEST_QUESTION_COUNT: i64 = 5;

/// The outcome of a vote submission.
///
/// A missing or invalid choice is a normal outcome rendered back to the
/// user, not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum VoteOutcome {
	Recorded,
	NoChoiceSelected,
}

/// The most recently published questions, newest first.
///
/// Questions dated in the future are excluded outright; at most five rows
/// are returned.
pub async fn latest_questions(pool: &SqlitePool) -> Result<Vec<Question>> {
	let questions = sqlx::query_as::<_, Question>(
		"SELECT id, question_text, pub_date FROM polls_question \
		 WHERE pub_date <= $1 ORDER BY pub_date DESC LIMIT $2",
	)
	.bind(Utc::now())
	.bind(LATEST_QUESTION_COUNT)
	.fetch_all(pool)
	.await?;

	Ok(questions)
}

/// Look up a question by id.
pub async fn get_question(pool: &SqlitePool, id: i64) -> Result<Question> {
	sqlx::query_as::<_, Question>(
		"SELECT id, question_text, pub_date FROM polls_question WHERE id = $1",
	)
	.bind(id)
	.fetch_optional(pool)
	.await?
	.ok_or(Error::NotFound)
}

/// Look up a question together with its choices.
pub async fn get_question_with_choices(
	pool: &SqlitePool,
	id: i64,
) -> Result<(Question, Vec<Choice>)> {
	let question = get_question(pool, id).await?;
	let choices = sqlx::query_as::<_, Choice>(
		"SELECT id, question_id, choice_text, votes FROM polls_choice \
		 WHERE question_id = $1 ORDER BY id",
	)
	.bind(id)
	.fetch_all(pool)
	.await?;

	Ok((question, choices))
}

/// Record a vote for `choice_id` on `question_id`.
///
/// The increment runs as a single UPDATE so concurrent votes for the same
/// choice never lose updates. A choice that is absent, or that belongs to a
/// different question, yields [`VoteOutcome::NoChoiceSelected`].
pub async fn cast_vote(
	pool: &SqlitePool,
	question_id: i64,
	choice_id: Option<i64>,
) -> Result<VoteOutcome> {
	// The question must exist regardless of the choice field.
	get_question(pool, question_id).await?;

	let Some(choice_id) = choice_id else {
		return Ok(VoteOutcome::NoChoiceSelected);
	};

	let result = sqlx::query(
		"UPDATE polls_choice SET votes = votes + 1 WHERE id = $1 AND question_id = $2",
	)
	.bind(choice_id)
	.bind(question_id)
	.execute(pool)
	.await?;

	if result.rows_affected() == 0 {
		Ok(VoteOutcome::NoChoiceSelected)
	} else {
		Ok(VoteOutcome::Recorded)
	}
}

/// Create a question (administrative/test entry point).
pub async fn create_question(
	pool: &SqlitePool,
	question_text: &str,
	pub_date: DateTime<Utc>,
) -> Result<Question> {
	let question = sqlx::query_as::<_, Question>(
		"INSERT INTO polls_question (question_text, pub_date) VALUES ($1, $2) \
		 RETURNING id, question_text, pub_date",
	)
	.bind(question_text)
	.bind(pub_date)
	.fetch_one(pool)
	.await?;

	Ok(question)
}

/// Add a choice to a question (administrative/test entry point).
pub async fn add_choice(pool: &SqlitePool, question_id: i64, choice_text: &str) -> Result<Choice> {
	let choice = sqlx::query_as::<_, Choice>(
		"INSERT INTO polls_choice (question_id, choice_text, votes) VALUES ($1, $2, 0) \
		 RETURNING id, question_id, choice_text, votes",
	)
	.bind(question_id)
	.bind(choice_text)
	.fetch_one(pool)
	.await?;

	Ok(choice)
}

/// Delete a question and, via the cascade, its choices.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<()> {
	sqlx::query("DELETE FROM polls_question WHERE id = $1")
		.bind(id)
		.execute(pool)
		.await?;

	Ok(())
}
