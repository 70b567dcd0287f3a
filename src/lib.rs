//! polls-web - a server-rendered polling application.
//!
//! Users browse recently published questions, vote for one of a question's
//! choices, and view the tallied results. The crate is laid out the way a
//! small site project is:
//!
//! - [`apps::polls`] - the domain app: models, queries, views, URL patterns
//! - [`config`] - project URL configuration
//! - [`http`] / [`urls`] / [`server`] - request/response types, routing, and
//!   the hyper serving loop
//! - [`templates`] / [`shortcuts`] - Tera rendering and view helpers
//! - [`db`] / [`conf`] - SQLite pool setup and environment settings

pub mod apps;
pub mod conf;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod server;
pub mod shortcuts;
pub mod templates;
pub mod urls;
