//! Markdown formatting for records, collections and operation outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as "Created exercise with ID: ..." or
//! an empty-collection message. Everything renders as markdown so the CLI can
//! pass it straight to its terminal renderer.
//!
//! - [`collections`]: [`Listing`], a titled collection with empty handling
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`] success/failure lines
//! - [`datetime`]: timestamp and calendar date formatting
//!
//! ```rust
//! use coach_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Category created".to_string());
//! assert_eq!(status.to_string(), "Success: Category created\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Listing;
pub use datetime::{LocalDateTime, MaybeDateTime};
pub use results::{CreateResult, DeleteResult, Labeled, UpdateResult};
pub use status::OperationStatus;
