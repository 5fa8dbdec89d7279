//! Configuration management for the mood playlist service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. It provides a centralized way to
//! manage application configuration including the catalog and streaming API
//! credentials, endpoint URLs, and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error: in a deployed service the
/// configuration usually arrives through the process environment. Only a
/// present-but-unreadable file is reported.
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded or absent,
/// or an error string if a present file cannot be parsed.
///
/// # Example
///
/// ```
/// use moodlist::config;
///
/// fn main() {
///     if let Err(e) = config::load_env() {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the recommendation service should listen.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Last.fm API key used for tag-indexed catalog lookups.
///
/// # Panics
///
/// Panics if the `LASTFM_API_KEY` environment variable is not set.
pub fn lastfm_api_key() -> String {
    env::var("LASTFM_API_KEY").expect("LASTFM_API_KEY must be set")
}

/// Returns the Last.fm Web API base URL.
///
/// # Panics
///
/// Panics if the `LASTFM_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let url = lastfm_api_url(); // e.g., "https://ws.audioscrobbler.com/2.0/"
/// ```
pub fn lastfm_api_url() -> String {
    env::var("LASTFM_API_URL").expect("LASTFM_API_URL must be set")
}

/// Returns the Spotify API client ID for the client-credentials exchange.
///
/// Retrieves the `SPOTIFY_API_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_CLIENT_ID").expect("SPOTIFY_API_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for the client-credentials exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_CLIENT_SECRET").expect("SPOTIFY_API_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for track search
/// and playlist operations.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_api_url(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify token endpoint URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL used for the `client_credentials` grant that backs the shared
/// service credential.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_token_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
