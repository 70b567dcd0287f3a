//! The polls application: questions, choices, votes.

pub mod models;
pub mod queries;
pub mod urls;
pub mod views;
