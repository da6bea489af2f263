// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence conversion surface.
//!
//! Generated store converters implement [`ValueConverter`]; the generated
//! convention helpers install them into a [`ModelConfig`], which a
//! persistence layer consults to map identifier columns. Registration is
//! per wrapper *type*, not per property — one call covers the whole model.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut config = ModelConfig::new();
//! configure_user_id_conventions(&mut config);
//!
//! let conv = config.conversion_for::<UserId>().unwrap();
//! assert_eq!(conv.to_store(&id), id.to_string());
//! ```

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt
};

use crate::error::ParseIdError;

/// Bidirectional conversion between an identifier type and its stored
/// string form.
pub trait ValueConverter<T> {
    /// Render the identifier for storage.
    fn to_store(&self, id: &T) -> String;

    /// Reconstruct the identifier from its stored form.
    fn from_store(&self, raw: &str) -> Result<T, ParseIdError>;
}

/// Type-keyed registry of value conversions for a persistence model.
///
/// The strongly-typed analogue of a model-configuration object: each entry
/// maps one identifier type to the converter used for every occurrence of
/// that type in the model.
#[derive(Default)]
pub struct ModelConfig {
    conversions: HashMap<TypeId, Box<dyn Any + Send + Sync>>
}

impl ModelConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `C` as the conversion for every `T` in the model.
    ///
    /// A later registration for the same `T` replaces the earlier one.
    pub fn have_conversion<T, C>(&mut self) -> &mut Self
    where
        T: 'static,
        C: ValueConverter<T> + Default + Send + Sync + 'static
    {
        let converter: Box<dyn ValueConverter<T> + Send + Sync> = Box::new(C::default());
        self.conversions.insert(TypeId::of::<T>(), Box::new(converter));
        self
    }

    /// Look up the conversion registered for `T`, if any.
    #[must_use]
    pub fn conversion_for<T: 'static>(&self) -> Option<&(dyn ValueConverter<T> + Send + Sync)> {
        self.conversions
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Box<dyn ValueConverter<T> + Send + Sync>>())
            .map(Box::as_ref)
    }

    /// Number of registered conversions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    /// Whether no conversions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("conversions", &self.conversions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelConfig, ValueConverter};
    use crate::error::ParseIdError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TagId(u64);

    #[derive(Debug, Default)]
    struct TagIdConverter;

    impl ValueConverter<TagId> for TagIdConverter {
        fn to_store(&self, id: &TagId) -> String {
            format!("tag_{}", id.0)
        }

        fn from_store(&self, raw: &str) -> Result<TagId, ParseIdError> {
            raw.strip_prefix("tag_")
                .and_then(|rest| rest.parse().ok())
                .map(TagId)
                .ok_or(ParseIdError::new("tag"))
        }
    }

    #[test]
    fn registered_conversion_is_found() {
        let mut config = ModelConfig::new();
        config.have_conversion::<TagId, TagIdConverter>();

        let conv = config.conversion_for::<TagId>().unwrap();

        assert_eq!(conv.to_store(&TagId(7)), "tag_7");
        assert_eq!(conv.from_store("tag_7").unwrap(), TagId(7));
    }

    #[test]
    fn unregistered_type_has_no_conversion() {
        let config = ModelConfig::new();

        assert!(config.conversion_for::<TagId>().is_none());
        assert!(config.is_empty());
    }

    #[test]
    fn re_registration_replaces_and_keeps_one_entry() {
        let mut config = ModelConfig::new();
        config.have_conversion::<TagId, TagIdConverter>();
        config.have_conversion::<TagId, TagIdConverter>();

        assert_eq!(config.len(), 1);
    }

    #[test]
    fn from_store_surfaces_parse_error() {
        let mut config = ModelConfig::new();
        config.have_conversion::<TagId, TagIdConverter>();

        let conv = config.conversion_for::<TagId>().unwrap();

        assert!(conv.from_store("post_7").is_err());
    }
}
