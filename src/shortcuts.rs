//! Shortcut helpers translating view results into HTTP responses.

use crate::error::Result;
use crate::http::Response;
use crate::templates;
use tera::Context;

/// Render a template to an HTTP 200 HTML response.
pub fn render(template_name: &str, context: &Context) -> Result<Response> {
	let html = templates::render(template_name, context)?;
	Ok(Response::ok()
		.with_body(html)
		.with_header("content-type", "text/html; charset=utf-8"))
}

/// Redirect (302 Found) to `location`.
pub fn redirect(location: impl AsRef<str>) -> Response {
	Response::temporary_redirect(location)
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::StatusCode;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_render_produces_html_response() {
		let context = Context::from_serialize(json!({
			"latest_question_list": [],
		}))
		.unwrap();

		let response = render("polls/index.html", &context).unwrap();

		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(
			response
				.headers
				.get("content-type")
				.unwrap()
				.to_str()
				.unwrap(),
			"text/html; charset=utf-8"
		);
		let body_str = String::from_utf8(response.body.to_vec()).unwrap();
		assert!(body_str.contains("No polls are available."));
	}

	#[rstest]
	fn test_render_unknown_template_is_an_error() {
		let context = Context::new();
		assert!(render("polls/missing.html", &context).is_err());
	}

	#[rstest]
	fn test_redirect() {
		let response = redirect("/3/results/");

		assert_eq!(response.status, StatusCode::FOUND);
		assert_eq!(
			response.headers.get("location").unwrap().to_str().unwrap(),
			"/3/results/"
		);
	}
}
