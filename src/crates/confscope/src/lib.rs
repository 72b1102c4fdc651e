//! Per-type configuration with validation, file loading and thread-scoped overrides.
//!
//! Any type can adopt a configuration mixin and gain a type-level option
//! store, default values, an allow-list of keys, mandatory keys, YAML/JSON
//! file loading, and temporary per-thread overrides.
//!
//! # Modules
//!
//! ## Classes (`class`)
//!
//! [`ConfigClass`] holds one type's declarations and base store and
//! mediates every read and write:
//!
//! ```rust,ignore
//! use confscope::ConfigClass;
//!
//! let mailer = ConfigClass::new("Mailer");
//! mailer
//!     .declare_defaults([("port", 25)])
//!     .declare_allowed_keys(["host", "port"])
//!     .declare_mandatory_keys(["host"]);
//!
//! mailer.configure([("host", "smtp.example.com")])?;
//! mailer.assert_valid()?;
//! ```
//!
//! ## Mixin (`configurable`)
//!
//! The [`Configurable`] trait and [`configurable!`] macro attach a static
//! class to a type:
//!
//! ```rust,ignore
//! use confscope::{configurable, Configurable};
//!
//! struct Mailer;
//! configurable!(Mailer, |class| {
//!     class.declare_allowed_keys(["host", "port"]);
//! });
//!
//! Mailer::configure_from_file("config/mailer.yml")?;
//! let host = Mailer::get("host")?;
//! ```
//!
//! ## Scopes (`scope`)
//!
//! Overrides visible only to the current thread, restored on every exit
//! path including panics:
//!
//! ```rust,ignore
//! Mailer::with_config([("host", "localhost")], || {
//!     send_test_mail();
//! })?;
//! ```
//!
//! ## Loading (`loader`)
//!
//! Reads `.yaml`, `.yml` and `.json` files into a raw key/value mapping.

mod class;
mod configurable;
pub mod error;
pub mod loader;
pub mod scope;
mod store;

// Re-export commonly used types
pub use class::{ClassId, ConfigClass};
pub use configurable::Configurable;
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use loader::{load_raw_config, RawConfig};
pub use scope::ConfigScope;
pub use serde_json::Value;
pub use store::ConfigStore;
