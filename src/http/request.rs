use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use std::collections::HashMap;
use std::net::SocketAddr;

/// HTTP request representation handed to handlers.
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Parameters extracted from the matched path pattern (e.g. `{question_id}`).
	pub path_params: HashMap<String, String>,
	pub query_params: HashMap<String, String>,
	pub remote_addr: Option<SocketAddr>,
}

impl Request {
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			path_params: HashMap::new(),
			query_params,
			remote_addr: None,
		}
	}

	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Parse query parameters from the URI.
	fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						// Split on the first '=' only so values may contain '='
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Get the request path.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Get a parameter captured from the matched path pattern.
	pub fn path_param(&self, name: &str) -> Option<&str> {
		self.path_params.get(name).map(String::as_str)
	}

	/// Set a path parameter (called by the router during dispatch).
	pub fn set_path_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(name.into(), value.into());
	}

	/// Decode the body as an `application/x-www-form-urlencoded` form.
	///
	/// Repeated fields keep the last value; an undecodable body yields an
	/// empty form, the lenient treatment browser submissions get.
	pub fn form_data(&self) -> HashMap<String, String> {
		serde_urlencoded::from_bytes::<Vec<(String, String)>>(&self.body)
			.map(|pairs| pairs.into_iter().collect())
			.unwrap_or_default()
	}
}

/// Builder for [`Request`], used by the server glue and by tests.
pub struct RequestBuilder {
	method: Method,
	uri: String,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	fn new() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn build(self) -> Result<Request, hyper::http::uri::InvalidUri> {
		let uri: Uri = self.uri.parse()?;
		Ok(Request::new(
			self.method,
			uri,
			Version::HTTP_11,
			self.headers,
			self.body,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_query_params() {
		let request = Request::builder()
			.method(Method::GET)
			.uri("/search?q=polls&page=2")
			.build()
			.unwrap();

		assert_eq!(request.query_params.get("q"), Some(&"polls".to_string()));
		assert_eq!(request.query_params.get("page"), Some(&"2".to_string()));
	}

	#[rstest]
	fn test_query_value_may_contain_equals() {
		let request = Request::builder()
			.uri("/callback?token=a=b")
			.build()
			.unwrap();

		assert_eq!(request.query_params.get("token"), Some(&"a=b".to_string()));
	}

	#[rstest]
	fn test_path_strips_query() {
		let request = Request::builder().uri("/1/?ref=home").build().unwrap();

		assert_eq!(request.path(), "/1/");
	}

	#[rstest]
	fn test_form_data_decodes_urlencoded_body() {
		let request = Request::builder()
			.method(Method::POST)
			.uri("/1/vote/")
			.body("choice=3")
			.build()
			.unwrap();

		let form = request.form_data();
		assert_eq!(form.get("choice"), Some(&"3".to_string()));
	}

	#[rstest]
	fn test_form_data_empty_body() {
		let request = Request::builder()
			.method(Method::POST)
			.uri("/1/vote/")
			.build()
			.unwrap();

		assert!(request.form_data().is_empty());
	}

	#[rstest]
	fn test_path_param_roundtrip() {
		let mut request = Request::builder().uri("/42/").build().unwrap();
		request.set_path_param("question_id", "42");

		assert_eq!(request.path_param("question_id"), Some("42"));
		assert_eq!(request.path_param("missing"), None);
	}
}
