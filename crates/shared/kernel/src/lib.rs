//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and the layered config loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use slugeq_kernel::config::load_config;
//! use slugeq_kernel::domain::config::SlugEqConfig;
//!
//! let cfg: SlugEqConfig = load_config(Some("config/local")).unwrap_or_default();
//! ```
pub mod config;

pub use slugeq_domain as domain;
