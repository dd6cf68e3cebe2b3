//! Macros to reduce boilerplate in configuration records
//!
//! Layers, views and view states all carry a free-form attribute bag next to
//! their typed fields. This module generates the accessors for that bag.

/// Macro to implement the free-form attribute accessors
///
/// This generates implementations for:
/// - set(), with()
/// - get(), remove()
/// - attributes()
///
/// Usage:
/// ```ignore
/// impl MyRecord {
///     impl_attribute_bag!(attributes);
/// }
/// ```
#[macro_export]
macro_rules! impl_attribute_bag {
    ($attributes_field:ident) => {
        /// Stores `value` under the camelCase form of `key`, replacing any
        /// earlier value stored under either spelling.
        pub fn set<T: serde::Serialize + ?Sized>(
            &mut self,
            key: impl Into<String>,
            value: &T,
        ) -> $crate::Result<&mut Self> {
            let key = key.into();
            let value = $crate::json::to_value(&key, value)?;
            let key = $crate::json::naming::external_name(&key).into_owned();
            self.$attributes_field.insert(key, value);
            Ok(self)
        }

        /// Chaining variant of `set`
        pub fn with<T: serde::Serialize>(
            mut self,
            key: impl Into<String>,
            value: T,
        ) -> $crate::Result<Self> {
            self.set(key, &value)?;
            Ok(self)
        }

        pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
            self.$attributes_field
                .get($crate::json::naming::external_name(key).as_ref())
        }

        pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
            self.$attributes_field
                .shift_remove($crate::json::naming::external_name(key).as_ref())
        }

        pub fn attributes(&self) -> &$crate::json::JsonMap {
            &self.$attributes_field
        }
    };
}
