//! Request middleware.
//!
//! Purpose: cross-cutting response concerns applied to every route, namely
//! trace correlation and the uniform JSON content type.

pub mod json_content_type;
pub mod trace;

pub use json_content_type::JsonContentType;
pub use trace::Trace;
