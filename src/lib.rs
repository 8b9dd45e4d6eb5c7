//! Consumption Dashboard Gateway Library
//!
//! This library provides the backend for the consumption dashboard single-page
//! application. It exchanges Tibber OAuth authorization codes for access tokens,
//! proxies consumption profile downloads from SVK, exposes the public part of the
//! configuration to the browser and optionally serves the built frontend.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the gateway routes
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for configuration and upstream calls
//! - `server` - Router construction and the HTTP listener
//! - `svk` - SVK consumption profile client
//! - `tibber` - Tibber OAuth token exchange client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use consumption_gateway::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> consumption_gateway::Res<()> {
//!     config::load_env();
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config, None).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod svk;
pub mod tibber;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the edges of the application (startup, serving) where any error
/// is reported to the operator rather than mapped to an HTTP response.
/// Keeps the Send + Sync bounds required across await points.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for startup notices and the
/// per-request access log.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Server stopped");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only for
/// unrecoverable startup failures such as a port that cannot be bound.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}: {}", addr, e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems: failed upstream calls, rejected tokens and
/// configuration that prevents startup.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
