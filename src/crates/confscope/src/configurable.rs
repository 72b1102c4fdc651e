//! The `Configurable` mixin.
//!
//! Implementing [`Configurable`] gives a type its own [`ConfigClass`] and
//! exposes the whole configuration surface as associated functions, so
//! callers write `Mailer::get("host")` instead of threading a class value
//! around. The [`configurable!`](crate::configurable) macro is the usual way
//! to implement it.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::class::ConfigClass;
use crate::error::ConfigResult;
use crate::loader::RawConfig;

/// A type with type-level configuration.
///
/// Only [`config_class`](Configurable::config_class) needs implementing; every
/// other function delegates to the returned class.
pub trait Configurable: 'static {
    /// The class holding this type's configuration.
    fn config_class() -> &'static ConfigClass;

    /// See [`ConfigClass::initialize`].
    fn initialize() -> &'static ConfigClass {
        Self::config_class().initialize()
    }

    /// See [`ConfigClass::configure`].
    fn configure<I, K, V>(options: I) -> ConfigResult<&'static ConfigClass>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::config_class().configure(options)
    }

    /// See [`ConfigClass::configure_with`].
    fn configure_with<F>(configure: F) -> ConfigResult<&'static ConfigClass>
    where
        F: FnOnce(&ConfigClass) -> ConfigResult<()>,
    {
        Self::config_class().configure_with(configure)
    }

    /// See [`ConfigClass::configure_from_file`].
    fn configure_from_file(path: impl AsRef<Path>) -> ConfigResult<&'static ConfigClass> {
        Self::config_class().configure_from_file(path)
    }

    /// See [`ConfigClass::configure_from_file_with`].
    fn configure_from_file_with<F>(
        path: impl AsRef<Path>,
        configure: F,
    ) -> ConfigResult<&'static ConfigClass>
    where
        F: FnOnce(&ConfigClass, &RawConfig) -> ConfigResult<()>,
    {
        Self::config_class().configure_from_file_with(path, configure)
    }

    /// See [`ConfigClass::get`].
    fn get(key: &str) -> ConfigResult<Option<Value>> {
        Self::config_class().get(key)
    }

    /// See [`ConfigClass::get_as`].
    fn get_as<T: DeserializeOwned>(key: &str) -> ConfigResult<Option<T>> {
        Self::config_class().get_as(key)
    }

    /// See [`ConfigClass::set`].
    fn set(key: impl Into<String>, value: impl Into<Value>) -> ConfigResult<&'static ConfigClass> {
        Self::config_class().set(key, value)
    }

    /// See [`ConfigClass::reset`].
    fn reset() -> &'static ConfigClass {
        Self::config_class().reset()
    }

    /// See [`ConfigClass::is_blank`].
    fn is_blank(key: &str) -> ConfigResult<bool> {
        Self::config_class().is_blank(key)
    }

    /// See [`ConfigClass::validate`].
    fn validate() -> bool {
        Self::config_class().validate()
    }

    /// See [`ConfigClass::assert_valid`].
    fn assert_valid() -> ConfigResult<()> {
        Self::config_class().assert_valid()
    }

    /// See [`ConfigClass::with_config`].
    fn with_config<I, K, V, F, R>(options: I, body: F) -> ConfigResult<R>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
        F: FnOnce() -> R,
    {
        Self::config_class().with_config(options, body)
    }
}

/// Implement [`Configurable`] for a type.
///
/// The class is created on first use and named after the type. The optional
/// closure-like block runs once, right after creation, and is where the
/// declarations go.
///
/// ```rust
/// use confscope::{configurable, Configurable};
///
/// struct Mailer;
///
/// configurable!(Mailer, |class| {
///     class
///         .declare_defaults([("port", 25)])
///         .declare_allowed_keys(["host", "port"]);
/// });
///
/// Mailer::configure([("host", "smtp.example.com")]).unwrap();
/// assert_eq!(Mailer::get("port").unwrap(), Some(confscope::Value::from(25)));
/// assert!(Mailer::set("user", "bob").is_err());
/// ```
#[macro_export]
macro_rules! configurable {
    ($ty:ty) => {
        $crate::configurable!($ty, |_class| {});
    };
    ($ty:ty, |$class:ident| $declare:block) => {
        impl $crate::Configurable for $ty {
            fn config_class() -> &'static $crate::ConfigClass {
                static CLASS: ::std::sync::OnceLock<$crate::ConfigClass> =
                    ::std::sync::OnceLock::new();
                CLASS.get_or_init(|| {
                    let $class = $crate::ConfigClass::new(::std::stringify!($ty));
                    let _ = $declare;
                    $class
                })
            }
        }
    };
}
