//! SVK (Svenska kraftnät) consumption profile downloads.
//!
//! The profile service is public and unauthenticated; the gateway only relays
//! it so the browser avoids cross-origin restrictions.

pub mod profile;

pub use profile::ProfileFetcher;
