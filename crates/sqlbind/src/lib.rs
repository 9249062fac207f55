//! # sqlbind
//!
//! A fluent builder for named-placeholder SQL statements.
//!
//! `sqlbind` accumulates a parameterized statement string and the matching
//! set of bound parameter values one clause at a time. Nothing is ever
//! executed: the finished text and its `:name` parameters are meant to be
//! handed to a database driver's prepared-statement API.
//!
//! ## Features
//!
//! - **SQL explicit**: the statement text is an ordinary string, assembled
//!   clause by clause
//! - **Named placeholders**: every bound value gets a `:column` placeholder,
//!   tracked in insertion order
//! - **Permissive by contract**: odd input renders odd but non-crashing
//!   text; [`StatementBuilder::validate`] surfaces typed diagnostics for
//!   callers who want to reject it
//! - **No execution, no I/O**: pure in-memory string and map manipulation
//!
//! ## Example
//!
//! ```
//! use sqlbind::StatementBuilder;
//!
//! let mut sb = StatementBuilder::new();
//! sb.set_table("posts").and_where("id", "=", 32).limit(1);
//! let sql = sb.update([("title", "renamed")]);
//!
//! assert_eq!(sql, "UPDATE posts SET title=:title WHERE id=:id LIMIT 1");
//! assert_eq!(sb.parameters().len(), 2);
//! ```

pub mod error;
pub mod statement;
pub mod value;

mod render;

pub use error::{BuildError, BuildResult};
pub use statement::{ParamMap, StatementBuilder};
pub use value::Value;
