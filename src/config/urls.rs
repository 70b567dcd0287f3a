//! Project URL configuration.

use crate::apps::polls;
use crate::urls::Router;
use sqlx::SqlitePool;

/// Build the project router, mounting the polls app at the site root.
pub fn routes(pool: &SqlitePool) -> Router {
	let mut router = Router::new();
	router.mount("/", polls::urls::url_patterns(pool));
	router
}
