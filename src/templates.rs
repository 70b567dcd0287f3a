//! Runtime template engine with the application's templates compiled in.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
	let mut tera = Tera::default();

	tera.add_raw_template(
		"polls/index.html",
		include_str!("../templates/polls/index.html"),
	)
	.expect("failed to register polls/index.html");

	tera.add_raw_template(
		"polls/detail.html",
		include_str!("../templates/polls/detail.html"),
	)
	.expect("failed to register polls/detail.html");

	tera.add_raw_template(
		"polls/results.html",
		include_str!("../templates/polls/results.html"),
	)
	.expect("failed to register polls/results.html");

	tera
});

/// Render a registered template with the given context.
///
/// Templates are named with the `.html` suffix, so variable output is
/// HTML-escaped by Tera.
pub fn render(template_name: &str, context: &Context) -> tera::Result<String> {
	TEMPLATES.render(template_name, context)
}
