use bytes::Bytes;
use hyper::header::{HeaderValue, LOCATION};
use hyper::{HeaderMap, StatusCode};

/// HTTP response representation produced by handlers.
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 404 Not Found status.
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a Response with HTTP 405 Method Not Allowed status.
	pub fn method_not_allowed() -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
	}

	/// Create a Response with HTTP 500 Internal Server Error status.
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Create a Response with HTTP 302 Found (temporary redirect).
	pub fn temporary_redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location)
	}

	/// Set the response body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set a header, silently dropping values that are not valid header text.
	pub fn with_header(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
		if let Ok(value) = HeaderValue::from_str(value.as_ref()) {
			self.headers.insert(name, value);
		}
		self
	}

	/// Add a Location header to the response (typically used for redirects).
	pub fn with_location(mut self, location: impl AsRef<str>) -> Self {
		if let Ok(value) = HeaderValue::from_str(location.as_ref()) {
			self.headers.insert(LOCATION, value);
		}
		self
	}
}
