// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

// The artifact family strongid-gen emits for
// `#[strong_id(Ulid)] struct User`, checked in here so the generated
// shape is compiled and exercised end to end: wrapper, serde adapter,
// store converter and convention helper.

use ulid::Ulid;

/// Strongly-typed identifier for `User`, backed by `Ulid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId {
    /// The wrapped backing value.
    pub value: Ulid,
}

impl UserId {
    /// Identifier wrapping the backing type's zero value.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            value: <Ulid as ::strongid::IdValue>::zero(),
        }
    }

    /// Identifier wrapping a freshly generated unique value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: <Ulid as ::strongid::IdValue>::new_unique(),
        }
    }

    /// Parse the wire format, reporting only success or failure.
    #[must_use]
    pub fn try_parse(text: &str) -> ::core::option::Option<Self> {
        ::strongid::codec::deserialize(text)
    }

    /// Parse the wire format.
    pub fn parse(text: &str) -> ::core::result::Result<Self, ::strongid::ParseIdError> {
        ::strongid::codec::parse(text)
    }
}

impl ::strongid::StrongId for UserId {
    type Value = Ulid;

    const PREFIX: &'static str = "user";

    fn from_value(value: Self::Value) -> Self {
        Self { value }
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

impl ::core::default::Default for UserId {
    fn default() -> Self {
        Self::empty()
    }
}

impl ::core::fmt::Display for UserId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(&::strongid::codec::serialize(self))
    }
}

impl ::core::str::FromStr for UserId {
    type Err = ::strongid::ParseIdError;

    fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl ::serde::Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        serializer.serialize_str(&::strongid::codec::serialize(self))
    }
}

impl<'de> ::serde::Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;

        Self::parse(&raw).map_err(::serde::de::Error::custom)
    }
}

/// Bidirectional `UserId` ⇄ `String` conversion for the persistence layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserIdToStringConverter;

impl ::strongid::ValueConverter<UserId> for UserIdToStringConverter {
    fn to_store(&self, id: &UserId) -> ::std::string::String {
        ::strongid::codec::serialize(id)
    }

    fn from_store(&self, raw: &str) -> ::core::result::Result<UserId, ::strongid::ParseIdError> {
        UserId::parse(raw)
    }
}

/// Register the `UserId` ⇄ `String` conversion as a model-wide convention.
pub fn configure_user_id_conventions(config: &mut ::strongid::ModelConfig) {
    config.have_conversion::<UserId, UserIdToStringConverter>();
}

fn main() {
    // Round trip: text form back to the same identifier.
    let id = UserId::new();
    let text = id.to_string();
    assert!(text.starts_with("user_"));
    assert_eq!(UserId::parse(&text).unwrap(), id);

    // Foreign prefixes never parse.
    let foreign = text.replace("user_", "account_");
    assert!(UserId::try_parse(&foreign).is_none());
    assert!(UserId::parse(&foreign).is_err());

    // Empty sentinel wraps the zero value.
    assert_eq!(UserId::empty().value, Ulid::nil());
    assert_eq!(UserId::default(), UserId::empty());

    // JSON representation is the same wire string.
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{text}\""));
    let back: UserId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);

    // Convention registration installs the store conversion model-wide.
    let mut config = ::strongid::ModelConfig::new();
    configure_user_id_conventions(&mut config);
    let conversion = config.conversion_for::<UserId>().unwrap();
    assert_eq!(conversion.to_store(&id), text);
    assert_eq!(conversion.from_store(&text).unwrap(), id);
}
