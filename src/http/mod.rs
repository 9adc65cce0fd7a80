//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace layer)
//!     → dispatch.rs (path lookup in the redirect table)
//!         hit  → response.rs (302 Found + Location)
//!         miss → fallback service (fallback.rs by default), request untouched
//!     → Send to client
//! ```

pub mod dispatch;
pub mod fallback;
pub mod response;
pub mod server;

pub use dispatch::{Decision, Dispatcher};
pub use server::RedirectServer;
