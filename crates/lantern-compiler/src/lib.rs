//! Lantern compiler — turns the textual type and domain expressions of a
//! config file into the domain-annotated parameter tree of `lantern-ir`.
//!
//! Three cooperating passes, consumed leaves-first:
//! - [`schema`]: type expression → domain-less node skeleton
//! - [`domain`]: domain expression applied to the skeleton in lock-step,
//!   once per domain kind
//! - [`config`]: container-level validation and per-parameter orchestration
//!
//! Parsing is all-or-nothing: the first failure aborts the whole parse and
//! nothing is returned. All entry points are stateless free functions and
//! safe to call concurrently.

pub mod config;
pub mod domain;
pub mod error;
pub mod schema;

pub use config::{load_config, parse_config};
pub use domain::apply_domain;
pub use error::ConfigError;
pub use schema::parse_type_expr;
