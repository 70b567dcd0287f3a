//! Application error types and their HTTP representations.

use crate::http::Response;

/// Errors surfaced by the query and presentation layers.
///
/// `NotFound` is a routine outcome (a request naming a missing question) and
/// is never logged as an application failure; storage and template failures
/// surface as 500 responses.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("object not found")]
	NotFound,
	#[error("method not allowed")]
	MethodNotAllowed,
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("template error: {0}")]
	Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// True for failures worth logging as server errors.
	pub fn is_server_error(&self) -> bool {
		matches!(self, Error::Database(_) | Error::Template(_))
	}
}

impl From<Error> for Response {
	fn from(error: Error) -> Self {
		match error {
			Error::NotFound => Response::not_found().with_body("Not Found"),
			Error::MethodNotAllowed => Response::method_not_allowed(),
			Error::Database(_) | Error::Template(_) => {
				Response::internal_server_error().with_body("Internal Server Error")
			}
		}
	}
}
