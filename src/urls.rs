//! URL routing: path patterns, routes, and the dispatching router.

use crate::error::{Error, Result};
use crate::http::{Handler, Request, Response};
use async_trait::async_trait;
use hyper::Method;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

/// Compiled path pattern with `{param}` placeholders.
pub struct PathPattern {
	raw: String,
	regex: Regex,
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compile a pattern like `/{question_id}/vote/` into an anchored regex.
	///
	/// Placeholders match a single path segment. Patterns are static route
	/// configuration, so a malformed one is a startup panic rather than a
	/// recoverable error.
	pub fn new(pattern: &str) -> Self {
		let mut param_names = Vec::new();
		let mut regex_pattern = String::from("^");
		let mut rest = pattern;
		while let Some(start) = rest.find('{') {
			let (literal, tail) = rest.split_at(start);
			regex_pattern.push_str(&regex::escape(literal));
			let end = tail.find('}').expect("unclosed '{' in path pattern");
			param_names.push(tail[1..end].to_string());
			regex_pattern.push_str("([^/]+)");
			rest = &tail[end + 1..];
		}
		regex_pattern.push_str(&regex::escape(rest));
		regex_pattern.push('$');

		let regex = Regex::new(&regex_pattern).expect("invalid path pattern");
		Self {
			raw: pattern.to_string(),
			regex,
			param_names,
		}
	}

	/// Match a request path, returning captured parameters on success.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		let captures = self.regex.captures(path)?;
		Some(
			self.param_names
				.iter()
				.cloned()
				.zip(
					captures
						.iter()
						.skip(1)
						.flatten()
						.map(|m| m.as_str().to_string()),
				)
				.collect(),
		)
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}
}

/// Route definition combining a path pattern, an HTTP method, and a handler.
pub struct Route {
	pattern: PathPattern,
	method: Method,
	handler: Arc<dyn Handler>,
	pub name: Option<String>,
}

impl Route {
	pub fn new(pattern: &str, method: Method, handler: Arc<dyn Handler>) -> Self {
		Self {
			pattern: PathPattern::new(pattern),
			method,
			handler,
			name: None,
		}
	}

	/// Create a route from a concrete handler, wrapping it in `Arc` internally.
	pub fn from_handler<H>(pattern: &str, method: Method, handler: H) -> Self
	where
		H: Handler + 'static,
	{
		Self::new(pattern, method, Arc::new(handler))
	}

	/// Set the name of the route.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn path(&self) -> &str {
		self.pattern.as_str()
	}
}

/// Convenience constructor for route tables.
pub fn path<H>(pattern: &str, method: Method, handler: H) -> Route
where
	H: Handler + 'static,
{
	Route::from_handler(pattern, method, handler)
}

/// Dispatching router: the first route whose pattern and method match wins.
pub struct Router {
	routes: Vec<Route>,
}

impl Router {
	pub fn new() -> Self {
		Self { routes: Vec::new() }
	}

	pub fn add_route(&mut self, route: Route) {
		self.routes.push(route);
	}

	/// Mount routes under a prefix (e.g. an app's patterns under `/polls/`).
	pub fn mount(&mut self, prefix: &str, routes: Vec<Route>) {
		let prefix = prefix.trim_end_matches('/');
		for route in routes {
			let pattern = format!("{}{}", prefix, route.pattern.as_str());
			self.routes.push(Route {
				pattern: PathPattern::new(&pattern),
				method: route.method,
				handler: route.handler,
				name: route.name,
			});
		}
	}

	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Resolve the request to a handler and invoke it.
	///
	/// A path that matches no route yields `NotFound`; a path that matches
	/// only with a different method yields `MethodNotAllowed`.
	pub async fn dispatch(&self, mut request: Request) -> Result<Response> {
		let mut path_matched = false;
		for route in &self.routes {
			if let Some(params) = route.pattern.matches(request.path()) {
				if route.method == request.method {
					for (name, value) in params {
						request.set_path_param(name, value);
					}
					return route.handler.handle(request).await;
				}
				path_matched = true;
			}
		}

		if path_matched {
			Err(Error::MethodNotAllowed)
		} else {
			Err(Error::NotFound)
		}
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Handler for Router {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.dispatch(request).await
	}
}
