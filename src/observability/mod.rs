//! Observability
//!
//! Logging goes through `tracing`. Each call site tags its line with an
//! [`Event`] name and structured fields; installing a subscriber is up to
//! the application.
//!
//! ```ignore
//! tracing::debug!(event = %Event::CommandBuilt, class = "GameScore", "Query command built");
//! ```

mod events;

pub use events::Event;
