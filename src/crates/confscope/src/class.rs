//! Configurable classes.
//!
//! A [`ConfigClass`] carries everything one configurable type owns: its
//! declared defaults, allow-list and mandatory keys, and its base
//! [`ConfigStore`]. All reads and writes go through key validation and then
//! resolve against the current thread's override (see [`crate::scope`]) or,
//! when none is active, the base store.
//!
//! ```text
//! get/set ──► validate_key ──► with_store ──┬─► thread override (if any)
//!                                          └─► base store (lazy from defaults)
//! ```
//!
//! The base store is shared by every thread. It sits behind a lock, so
//! concurrent writes are memory-safe, but two threads writing the base store
//! see each other's changes in whatever order they land. Use
//! [`ConfigClass::with_config`] for independent per-thread configuration.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, ValidationError};
use crate::loader::{load_raw_config, RawConfig};
use crate::scope::{self, ConfigScope};
use crate::store::ConfigStore;

static NEXT_CLASS_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`ConfigClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(u64);

impl ClassId {
    fn next() -> Self {
        Self(NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Metadata declared once while setting up a class.
#[derive(Debug, Clone, Default)]
struct Declarations {
    defaults: Option<HashMap<String, Value>>,
    allowed_keys: Option<Vec<String>>,
    mandatory_keys: Option<Vec<String>>,
}

/// Configuration storage and validation rules for one configurable type.
///
/// # Example
///
/// ```rust
/// use confscope::ConfigClass;
///
/// let mailer = ConfigClass::new("Mailer");
/// mailer
///     .declare_defaults([("port", 25)])
///     .declare_allowed_keys(["host", "port"])
///     .declare_mandatory_keys(["host"]);
///
/// mailer.configure([("host", "smtp.example.com")]).unwrap();
/// assert_eq!(mailer.get("port").unwrap(), Some(confscope::Value::from(25)));
/// assert!(mailer.set("user", "bob").is_err());
/// mailer.assert_valid().unwrap();
/// ```
pub struct ConfigClass {
    id: ClassId,
    name: String,
    declarations: RwLock<Declarations>,
    base: RwLock<Option<ConfigStore>>,
}

impl ConfigClass {
    /// Create a class with no declarations and no base store yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ClassId::next(),
            name: name.into(),
            declarations: RwLock::new(Declarations::default()),
            base: RwLock::new(None),
        }
    }

    /// Identity used to key thread-local overrides.
    pub fn id(&self) -> ClassId {
        self.id
    }

    /// Name used in logs and error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // DECLARATIONS
    // =========================================================================

    /// Declare default option values. Replaces earlier defaults.
    ///
    /// Defaults seed the base store when it is first created or reset.
    pub fn declare_defaults<I, K, V>(&self, defaults: I) -> &Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let defaults = defaults
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.declarations.write().defaults = Some(defaults);
        self
    }

    /// Restrict the keys that may be read or written. Replaces an earlier allow-list.
    pub fn declare_allowed_keys<I, K>(&self, keys: I) -> &Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.declarations.write().allowed_keys = Some(collect_keys(keys));
        self
    }

    /// Declare the keys that must be non-blank for the configuration to be valid.
    pub fn declare_mandatory_keys<I, K>(&self, keys: I) -> &Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.declarations.write().mandatory_keys = Some(collect_keys(keys));
        self
    }

    /// Declared defaults, if any.
    pub fn defaults(&self) -> Option<HashMap<String, Value>> {
        self.declarations.read().defaults.clone()
    }

    /// Declared allow-list, if any.
    pub fn allowed_keys(&self) -> Option<Vec<String>> {
        self.declarations.read().allowed_keys.clone()
    }

    /// Declared mandatory keys, if any.
    pub fn mandatory_keys(&self) -> Option<Vec<String>> {
        self.declarations.read().mandatory_keys.clone()
    }

    // =========================================================================
    // KEY VALIDATION AND ACCESS
    // =========================================================================

    /// Returns true if no allow-list is declared or `key` is on it.
    pub fn is_valid_key(&self, key: &str) -> bool {
        match &self.declarations.read().allowed_keys {
            Some(allowed) => allowed.iter().any(|k| k == key),
            None => true,
        }
    }

    /// Fails with [`ConfigError::InvalidKey`] if `key` is not allowed.
    pub fn validate_key(&self, key: &str) -> ConfigResult<()> {
        let declarations = self.declarations.read();
        match &declarations.allowed_keys {
            Some(allowed) if !allowed.iter().any(|k| k == key) => Err(ConfigError::InvalidKey {
                key: key.to_string(),
                allowed: allowed.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Read `key` from the effective store.
    ///
    /// Unset keys and keys explicitly set to `null` both read as `None`.
    pub fn get(&self, key: &str) -> ConfigResult<Option<Value>> {
        self.validate_key(key)?;
        Ok(self.with_store(|store| store.get(key).filter(|v| !v.is_null()).cloned()))
    }

    /// Read `key` and deserialize it into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<Option<T>> {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Write `key` into the effective store.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> ConfigResult<&Self> {
        let key = key.into();
        self.validate_key(&key)?;
        let value = value.into();
        self.with_store(|store| store.set(key, value));
        Ok(self)
    }

    /// Single entry point for attribute-style access.
    ///
    /// `None` performs a validated read. `Some(value)` performs a validated
    /// write and returns the written value.
    pub fn access(&self, key: &str, value: Option<Value>) -> ConfigResult<Option<Value>> {
        match value {
            None => self.get(key),
            Some(value) => {
                self.set(key, value.clone())?;
                Ok(Some(value))
            }
        }
    }

    /// Returns true if `key` is unset, `null`, or an empty string, array or object.
    pub fn is_blank(&self, key: &str) -> ConfigResult<bool> {
        Ok(is_blank_value(self.get(key)?.as_ref()))
    }

    /// Returns true if no mandatory keys are declared or none of them is blank.
    pub fn validate(&self) -> bool {
        self.blank_mandatory_keys().is_empty()
    }

    /// Fails if no store exists yet for this class, or if mandatory keys are blank.
    ///
    /// Unlike reads, this never creates the base store.
    pub fn assert_valid(&self) -> ConfigResult<()> {
        if !self.has_store() {
            return Err(ValidationError::EmptyConfiguration {
                class: self.name.clone(),
            }
            .into());
        }

        let missing = self.blank_mandatory_keys();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingMandatory {
                class: self.name.clone(),
                keys: missing,
            }
            .into())
        }
    }

    /// Copy of the store the current thread resolves against.
    pub fn snapshot(&self) -> ConfigStore {
        self.with_store(|store| store.clone())
    }

    /// Returns true if the current thread has an active override for this class.
    pub fn is_overridden(&self) -> bool {
        scope::has_override(self.id)
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Make sure the base store exists, creating it from the defaults if needed.
    pub fn initialize(&self) -> &Self {
        self.ensure_base(&mut self.base.write());
        self
    }

    /// Assign every option through the validated write path, in iteration order.
    ///
    /// Stops at the first rejected key; earlier assignments stay in place.
    pub fn configure<I, K, V>(&self, options: I) -> ConfigResult<&Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.initialize();
        debug!("Configuring {} from options", self.name);
        self.assign_all(options)?;
        Ok(self)
    }

    /// Hand the class to `configure` so it can assign options itself.
    pub fn configure_with<F>(&self, configure: F) -> ConfigResult<&Self>
    where
        F: FnOnce(&Self) -> ConfigResult<()>,
    {
        self.initialize();
        debug!("Configuring {} from callback", self.name);
        configure(self)?;
        Ok(self)
    }

    /// Load `path` and assign every top-level key through the validated write path.
    pub fn configure_from_file(&self, path: impl AsRef<Path>) -> ConfigResult<&Self> {
        self.initialize();
        let raw = load_raw_config(path.as_ref())?;
        debug!(
            "Configuring {} from {:?} ({} keys)",
            self.name,
            path.as_ref(),
            raw.len()
        );
        self.assign_all(raw)?;
        Ok(self)
    }

    /// Load `path` and hand the raw data to `configure`.
    ///
    /// Nothing is assigned implicitly; the callback decides what to keep.
    pub fn configure_from_file_with<F>(
        &self,
        path: impl AsRef<Path>,
        configure: F,
    ) -> ConfigResult<&Self>
    where
        F: FnOnce(&Self, &RawConfig) -> ConfigResult<()>,
    {
        self.initialize();
        let raw = load_raw_config(path.as_ref())?;
        debug!(
            "Configuring {} from {:?} via callback",
            self.name,
            path.as_ref()
        );
        configure(self, &raw)?;
        Ok(self)
    }

    /// Rebuild the base store from the defaults.
    ///
    /// Active thread-local overrides are left alone.
    pub fn reset(&self) -> &Self {
        let fresh = self.fresh_store();
        *self.base.write() = Some(fresh);
        debug!("Reset configuration for {}", self.name);
        self
    }

    /// Run `body` with `options` applied on top of the current effective configuration.
    ///
    /// The override is visible only to the current thread and is removed when
    /// `body` returns or panics. If an option is rejected, `body` is not run
    /// and nothing stays overridden.
    pub fn with_config<I, K, V, F, R>(&self, options: I, body: F) -> ConfigResult<R>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
        F: FnOnce() -> R,
    {
        let _scope = self.scope(options)?;
        Ok(body())
    }

    /// Guard form of [`with_config`](Self::with_config).
    ///
    /// The override lasts until the returned [`ConfigScope`] is dropped.
    pub fn scope<I, K, V>(&self, options: I) -> ConfigResult<ConfigScope<'_>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let snapshot = self.snapshot();
        let scope = ConfigScope::install(self, snapshot);
        self.assign_all(options)?;
        Ok(scope)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Run `f` against the thread override if present, else the base store.
    fn with_store<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut ConfigStore) -> R,
    {
        match scope::with_override(self.id, f) {
            Ok(result) => result,
            Err(f) => {
                let mut base = self.base.write();
                f(self.ensure_base(&mut base))
            }
        }
    }

    /// Create the base store from the defaults unless it already exists.
    fn ensure_base<'s>(&self, base: &'s mut Option<ConfigStore>) -> &'s mut ConfigStore {
        base.get_or_insert_with(|| {
            debug!("Initialized configuration for {}", self.name);
            self.fresh_store()
        })
    }

    fn fresh_store(&self) -> ConfigStore {
        ConfigStore::new(self.declarations.read().defaults.as_ref())
    }

    fn has_store(&self) -> bool {
        scope::has_override(self.id) || self.base.read().is_some()
    }

    fn assign_all<I, K, V>(&self, options: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in options {
            self.set(key, value)?;
        }
        Ok(())
    }

    fn blank_mandatory_keys(&self) -> Vec<String> {
        let Some(mandatory) = self.mandatory_keys() else {
            return Vec::new();
        };
        self.with_store(|store| {
            mandatory
                .into_iter()
                .filter(|key| is_blank_value(store.get(key).filter(|v| !v.is_null())))
                .collect()
        })
    }
}

impl std::fmt::Debug for ConfigClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Released before taking the base lock; `with_store` locks in the other order.
        let declarations = self.declarations.read().clone();
        f.debug_struct("ConfigClass")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("allowed_keys", &declarations.allowed_keys)
            .field("mandatory_keys", &declarations.mandatory_keys)
            .field("initialized", &self.base.read().is_some())
            .finish()
    }
}

fn collect_keys<I, K>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let mut collected: Vec<String> = Vec::new();
    for key in keys {
        let key = key.into();
        if !collected.contains(&key) {
            collected.push(key);
        }
    }
    collected
}

fn is_blank_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn allowed() -> ConfigClass {
        let class = ConfigClass::new("Allowed");
        class.declare_allowed_keys(["key"]);
        class
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ConfigClass::new("A");
        let b = ConfigClass::new("A");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_any_key_valid_without_allow_list() {
        let class = ConfigClass::new("Open");
        assert!(class.is_valid_key("anything"));
        class.set("not_allowed_key", "bla").unwrap();
        assert_eq!(class.get("not_allowed_key").unwrap(), Some(json!("bla")));
    }

    #[test]
    fn test_allow_list_rejects_reads_and_writes() {
        let class = allowed();

        let err = class.set("other", "v").unwrap_err();
        assert_eq!(err.to_string(), "other is not allowed, use one of [key]");
        assert!(class.get("other").unwrap_err().is_invalid_key());

        class.set("key", "v").unwrap();
        assert_eq!(class.get("key").unwrap(), Some(json!("v")));
    }

    #[test]
    fn test_declarations_last_write_wins() {
        let class = ConfigClass::new("Redeclared");
        class.declare_allowed_keys(["a"]).declare_allowed_keys(["b"]);
        assert!(!class.is_valid_key("a"));
        assert!(class.is_valid_key("b"));
        assert!(class.get("a").unwrap_err().is_invalid_key());

        let class = ConfigClass::new("RedeclaredDefaults");
        class
            .declare_defaults([("x", 1)])
            .declare_defaults([("y", 2)]);
        class.reset();
        assert_eq!(class.get("x").unwrap(), None);
        assert_eq!(class.get("y").unwrap(), Some(json!(2)));
    }

    #[test]
    fn test_lazy_and_explicit_initialization_agree() {
        let lazy = ConfigClass::new("Lazy");
        lazy.declare_defaults([("key", "value")]);
        assert_eq!(lazy.get("key").unwrap(), Some(json!("value")));

        let explicit = ConfigClass::new("Explicit");
        explicit.declare_defaults([("key", "value")]);
        assert!(explicit.assert_valid().is_err());
        explicit.initialize();
        explicit.assert_valid().unwrap();
        assert_eq!(explicit.snapshot(), lazy.snapshot());
    }

    #[test]
    fn test_scope_guards_dropped_out_of_order() {
        let class = ConfigClass::new("OutOfOrder");
        class.configure([("key", "original")]).unwrap();

        let outer = class.scope([("key", "a")]).unwrap();
        let inner = class.scope([("key", "b")]).unwrap();

        drop(outer);
        assert!(class.is_overridden());
        assert_eq!(class.get("key").unwrap(), Some(json!("b")));

        drop(inner);
        assert!(!class.is_overridden());
        assert_eq!(class.get("key").unwrap(), Some(json!("original")));
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let class = ConfigClass::new("Dupes");
        class.declare_mandatory_keys(["host", "host", "port"]);
        assert_eq!(
            class.mandatory_keys(),
            Some(vec!["host".to_string(), "port".to_string()])
        );
    }

    #[test]
    fn test_defaults_seed_base_store_lazily() {
        let class = ConfigClass::new("Default");
        class.declare_defaults([("key", "value")]);

        assert_eq!(class.get("key").unwrap(), Some(json!("value")));
        assert_eq!(class.get("missing").unwrap(), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let class = ConfigClass::new("Default");
        class.declare_defaults([("key", "value")]);

        class.configure([("key", "bla"), ("extra", "x")]).unwrap();
        assert_eq!(class.get("key").unwrap(), Some(json!("bla")));

        class.reset();
        assert_eq!(class.get("key").unwrap(), Some(json!("value")));
        assert_eq!(class.get("extra").unwrap(), None);
    }

    #[test]
    fn test_null_reads_as_none() {
        let class = ConfigClass::new("Nulls");
        class.set("secret", Value::Null).unwrap();
        assert_eq!(class.get("secret").unwrap(), None);
        assert!(class.is_blank("secret").unwrap());
    }

    #[test]
    fn test_access_dispatch() {
        let class = allowed();
        assert_eq!(class.access("key", Some(json!("w"))).unwrap(), Some(json!("w")));
        assert_eq!(class.access("key", None).unwrap(), Some(json!("w")));
        assert!(class.access("nope", None).is_err());
        assert!(class.access("nope", Some(json!(1))).is_err());
    }

    #[test]
    fn test_get_as_deserializes() {
        let class = ConfigClass::new("Typed");
        class.configure([("port", json!(2525)), ("hosts", json!(["a", "b"]))]).unwrap();

        assert_eq!(class.get_as::<u16>("port").unwrap(), Some(2525));
        assert_eq!(
            class.get_as::<Vec<String>>("hosts").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(class.get_as::<u16>("missing").unwrap(), None);
        assert!(matches!(class.get_as::<u16>("hosts"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_is_blank_values() {
        let class = ConfigClass::new("Blank");
        class
            .configure([
                ("empty_str", json!("")),
                ("empty_list", json!([])),
                ("empty_map", json!({})),
                ("zero", json!(0)),
                ("falsy", json!(false)),
                ("text", json!("x")),
            ])
            .unwrap();

        assert!(class.is_blank("unset").unwrap());
        assert!(class.is_blank("empty_str").unwrap());
        assert!(class.is_blank("empty_list").unwrap());
        assert!(class.is_blank("empty_map").unwrap());
        assert!(!class.is_blank("zero").unwrap());
        assert!(!class.is_blank("falsy").unwrap());
        assert!(!class.is_blank("text").unwrap());
    }

    #[test]
    fn test_validate_without_mandatory_keys() {
        let class = ConfigClass::new("NoMandatory");
        assert!(class.validate());
    }

    #[test]
    fn test_assert_valid_lifecycle() {
        let class = ConfigClass::new("Mandatory");
        class.declare_mandatory_keys(["key"]);

        let err = class.assert_valid().unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::EmptyConfiguration { .. })
        ));
        // Checking must not have created the store.
        assert!(matches!(
            class.assert_valid().unwrap_err().as_validation(),
            Some(ValidationError::EmptyConfiguration { .. })
        ));

        class.configure(Vec::<(String, Value)>::new()).unwrap();
        match class.assert_valid().unwrap_err().as_validation() {
            Some(ValidationError::MissingMandatory { keys, .. }) => {
                assert_eq!(keys, &vec!["key".to_string()]);
            }
            other => panic!("expected missing mandatory, got {:?}", other),
        }

        class.configure([("key", "x")]).unwrap();
        class.assert_valid().unwrap();
        assert!(class.validate());
    }

    #[test]
    fn test_missing_mandatory_lists_only_blank_keys() {
        let class = ConfigClass::new("PartlyMandatory");
        class.declare_mandatory_keys(["host", "port", "user"]);
        class.configure([("port", json!(25))]).unwrap();

        match class.assert_valid().unwrap_err().as_validation() {
            Some(ValidationError::MissingMandatory { keys, .. }) => {
                assert_eq!(keys, &vec!["host".to_string(), "user".to_string()]);
            }
            other => panic!("expected missing mandatory, got {:?}", other),
        }
    }

    #[test]
    fn test_configure_stops_at_first_invalid_key() {
        let class = ConfigClass::new("Partial");
        class.declare_allowed_keys(["a", "c"]);

        let err = class
            .configure([("a", 1), ("b", 2), ("c", 3)])
            .unwrap_err();
        assert!(err.is_invalid_key());
        assert_eq!(class.get("a").unwrap(), Some(json!(1)));
        assert_eq!(class.get("c").unwrap(), None);
    }

    #[test]
    fn test_configure_with_callback() {
        let class = ConfigClass::new("Callback");
        let value = class
            .configure_with(|config| {
                config.set("key", "bla")?;
                Ok(())
            })
            .unwrap()
            .get("key")
            .unwrap();
        assert_eq!(value, Some(json!("bla")));
    }

    #[test]
    fn test_configure_with_callback_error_propagates() {
        let class = allowed();
        let result = class.configure_with(|config| {
            config.set("not_allowed_key", "bla")?;
            Ok(())
        });
        assert!(result.unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let class = ConfigClass::new("Init");
        class.initialize().set("key", "kept").unwrap();
        class.initialize();
        assert_eq!(class.get("key").unwrap(), Some(json!("kept")));
    }

    #[test]
    fn test_with_config_overrides_and_restores() {
        let class = ConfigClass::new("Scoped");
        class.configure([("key", "value")]).unwrap();

        let seen = class
            .with_config([("key", "bla")], || class.get("key").unwrap())
            .unwrap();
        assert_eq!(seen, Some(json!("bla")));
        assert_eq!(class.get("key").unwrap(), Some(json!("value")));
        assert!(!class.is_overridden());
    }

    #[test]
    fn test_with_config_invalid_option_skips_body() {
        let class = allowed();
        class.set("key", "base").unwrap();

        let mut ran = false;
        let result = class.with_config([("key", "tmp"), ("other", "x")], || ran = true);

        assert!(result.unwrap_err().is_invalid_key());
        assert!(!ran);
        assert!(!class.is_overridden());
        assert_eq!(class.get("key").unwrap(), Some(json!("base")));
    }

    #[test]
    fn test_override_writes_do_not_touch_base() {
        let class = ConfigClass::new("Isolated");
        class.configure([("key", "base")]).unwrap();

        class
            .with_config([("other", "tmp")], || {
                class.set("key", "changed").unwrap();
                assert_eq!(class.get("key").unwrap(), Some(json!("changed")));
            })
            .unwrap();

        assert_eq!(class.get("key").unwrap(), Some(json!("base")));
        assert_eq!(class.get("other").unwrap(), None);
    }

    #[test]
    fn test_reset_inside_scope_leaves_override() {
        let class = ConfigClass::new("ResetScoped");
        class.declare_defaults([("key", "default")]);
        class.configure([("key", "base")]).unwrap();

        class
            .with_config([("key", "tmp")], || {
                class.reset();
                assert_eq!(class.get("key").unwrap(), Some(json!("tmp")));
            })
            .unwrap();

        assert_eq!(class.get("key").unwrap(), Some(json!("default")));
    }

    #[test]
    fn test_debug_output() {
        let class = allowed();
        let debug = format!("{:?}", class);
        assert!(debug.contains("Allowed"));
        assert!(debug.contains("initialized: false"));
    }
}
