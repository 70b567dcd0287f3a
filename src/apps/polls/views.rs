//! Views for the polls application.
//!
//! Each view owns a pool handle and is a pure function of the request and
//! the persisted state.

use super::models::{Choice, Question};
use super::queries::{self, VoteOutcome};
use crate::error::{Error, Result};
use crate::http::{Handler, Request, Response};
use crate::shortcuts;
use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use tera::Context;

/// Message shown when a vote is submitted without a valid choice.
const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

/// Parse the `question_id` path parameter.
///
/// A non-numeric segment matched the route pattern but names no question,
/// so it takes the not-found path.
fn question_id_from(request: &Request) -> Result<i64> {
	request
		.path_param("question_id")
		.and_then(|raw| raw.parse::<i64>().ok())
		.ok_or(Error::NotFound)
}

fn detail_context(
	question: &Question,
	choices: &[Choice],
	error_message: Option<&str>,
) -> Result<Context> {
	let context = Context::from_serialize(json!({
		"question": question,
		"choices": choices,
		"error_message": error_message,
	}))?;
	Ok(context)
}

/// Index view - list the latest questions.
///
/// GET /
pub struct IndexView {
	pub pool: SqlitePool,
}

#[async_trait]
impl Handler for IndexView {
	async fn handle(&self, _request: Request) -> Result<Response> {
		let latest_question_list = queries::latest_questions(&self.pool).await?;

		let context = Context::from_serialize(json!({
			"latest_question_list": latest_question_list,
		}))?;
		shortcuts::render("polls/index.html", &context)
	}
}

/// Detail view - show a question and its vote form.
///
/// GET /{question_id}/
pub struct DetailView {
	pub pool: SqlitePool,
}

#[async_trait]
impl Handler for DetailView {
	async fn handle(&self, request: Request) -> Result<Response> {
		let question_id = question_id_from(&request)?;
		let (question, choices) =
			queries::get_question_with_choices(&self.pool, question_id).await?;

		let context = detail_context(&question, &choices, None)?;
		shortcuts::render("polls/detail.html", &context)
	}
}

/// Results view - show vote tallies for a question.
///
/// GET /{question_id}/results/
pub struct ResultsView {
	pub pool: SqlitePool,
}

#[async_trait]
impl Handler for ResultsView {
	async fn handle(&self, request: Request) -> Result<Response> {
		let question_id = question_id_from(&request)?;
		let (question, choices) =
			queries::get_question_with_choices(&self.pool, question_id).await?;

		let context = Context::from_serialize(json!({
			"question": question,
			"choices": choices,
		}))?;
		shortcuts::render("polls/results.html", &context)
	}
}

/// Vote view - record a vote and redirect to the results page.
///
/// POST /{question_id}/vote/
pub struct VoteView {
	pub pool: SqlitePool,
}

#[async_trait]
impl Handler for VoteView {
	async fn handle(&self, request: Request) -> Result<Response> {
		let question_id = question_id_from(&request)?;
		// A malformed value takes the same path as a missing field.
		let choice_id = request
			.form_data()
			.get("choice")
			.and_then(|raw| raw.parse::<i64>().ok());

		match queries::cast_vote(&self.pool, question_id, choice_id).await? {
			VoteOutcome::Recorded => {
				Ok(shortcuts::redirect(format!("/{}/results/", question_id)))
			}
			VoteOutcome::NoChoiceSelected => {
				let (question, choices) =
					queries::get_question_with_choices(&self.pool, question_id).await?;

				let context = detail_context(&question, &choices, Some(NO_CHOICE_MESSAGE))?;
				shortcuts::render("polls/detail.html", &context)
			}
		}
	}
}
