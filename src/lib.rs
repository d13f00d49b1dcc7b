//! # jsend
//!
//! Construction and serialization of [JSend](https://github.com/omniti-labs/jsend)
//! API responses:
//! - A validated, immutable [`Response`] value
//! - A fluent [`Builder`] that stages fields and validates once at `build()`
//! - JSON serialization with the JSend omission rules applied
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Builder                    │
//! │  success()/fail()/error()  data()  code() …  │
//! │         (loose staging, no checks)           │
//! └─────────────────────┬────────────────────────┘
//!                       │ build()
//! ┌─────────────────────▼────────────────────────┐
//! │            Response::from_parts              │
//! │         (five-check validation gate)         │
//! └─────────────────────┬────────────────────────┘
//!                       │
//! ┌─────────────────────▼────────────────────────┐
//! │                  Response                    │
//! │       to_map() / to_json() / Display         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use jsend::Response;
//! use serde_json::json;
//!
//! let response = Response::builder()
//!     .error()
//!     .message("database unreachable")
//!     .code(503)
//!     .build()?;
//!
//! assert_eq!(response.status(), "error");
//! assert_eq!(
//!     response.to_json(),
//!     json!({
//!         "status": "error",
//!         "data": null,
//!         "errors": null,
//!         "code": 503,
//!         "message": "database unreachable",
//!     })
//!     .to_string()
//! );
//! # Ok::<(), jsend::JsendError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod status;

pub mod builder;
pub mod response;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use builder::Builder;
pub use error::{JsendError, Result};
pub use response::{Code, Response};
pub use status::Status;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the jsend crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
