//! URL patterns for the polls application.

use super::views::{DetailView, IndexView, ResultsView, VoteView};
use crate::urls::{Route, path};
use hyper::Method;
use sqlx::SqlitePool;

pub fn url_patterns(pool: &SqlitePool) -> Vec<Route> {
	vec![
		path("/", Method::GET, IndexView { pool: pool.clone() }).with_name("index"),
		path(
			"/{question_id}/",
			Method::GET,
			DetailView { pool: pool.clone() },
		)
		.with_name("detail"),
		path(
			"/{question_id}/vote/",
			Method::POST,
			VoteView { pool: pool.clone() },
		)
		.with_name("vote"),
		path(
			"/{question_id}/results/",
			Method::GET,
			ResultsView { pool: pool.clone() },
		)
		.with_name("results"),
	]
}
