use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A poll question with its publication timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
	pub id: i64,
	pub question_text: String,
	pub pub_date: DateTime<Utc>,
}

impl Question {
	/// Check if the question was published recently (within the last day,
	/// and not in the future).
	pub fn was_published_recently(&self) -> bool {
		let now = Utc::now();
		let one_day_ago = now - Duration::days(1);
		self.pub_date >= one_day_ago && self.pub_date <= now
	}
}

/// An answer option belonging to a question, with its vote tally.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
	pub id: i64,
	pub question_id: i64,
	pub choice_text: String,
	pub votes: i32,
}
