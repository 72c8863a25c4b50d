pub mod auth;
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces for the API endpoints
pub mod interfaces;
/// Service implementations for the session
pub mod services;
