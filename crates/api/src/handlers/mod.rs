pub mod admin;
pub mod auth;
pub mod comments;
pub mod config;
pub mod location_reports;
pub mod videos;
pub mod votes;
