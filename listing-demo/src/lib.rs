//! A terminal listing of 187 mock users.
//!
//! - [`users`] - the mock dataset, its columns and the table configuration
//! - [`source`] - the [`QueryAdapter`](source::QueryAdapter) trait and the mock
//!   user source behind it
//! - [`client`] - cached, retrying, cancellable loads keyed by
//!   [`QueryKey`](listing::QueryKey)
//! - [`app`] - key/mouse bindings and the event loop
//! - [`paths`] - log file location and rotation

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod paths;
pub mod source;
pub mod users;

pub use app::App;
pub use client::{Completion, Fetcher, QueryClient};
pub use config::{AdapterConfig, RetryConfig};
pub use error::FetchError;
pub use source::{MockUserSource, Page, QueryAdapter};
pub use users::User;
