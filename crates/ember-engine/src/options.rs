//! App metadata applied to the backend during startup.

use std::fmt;

use url::Url;

/// Semantic app version, rendered as `major.minor.patch`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AppVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl AppVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl Default for AppVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Metadata property keys understood by every backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MetadataKey {
    Name,
    Version,
    Identifier,
    Creator,
    Copyright,
    Url,
    Type,
}

impl MetadataKey {
    pub const ALL: [MetadataKey; 7] = [
        MetadataKey::Name,
        MetadataKey::Version,
        MetadataKey::Identifier,
        MetadataKey::Creator,
        MetadataKey::Copyright,
        MetadataKey::Url,
        MetadataKey::Type,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::Name => "name",
            MetadataKey::Version => "version",
            MetadataKey::Identifier => "identifier",
            MetadataKey::Creator => "creator",
            MetadataKey::Copyright => "copyright",
            MetadataKey::Url => "url",
            MetadataKey::Type => "type",
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game metadata.
///
/// Writable until [`Game::run`](crate::core::Game::run) starts; afterwards
/// only a shared borrow is available. Only the URL is validated here, by
/// parsing it on assignment. Any other value the backend rejects surfaces
/// as [`GameError::Metadata`](crate::GameError::Metadata).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub app_name: String,
    pub version: AppVersion,
    /// Reverse-DNS style identifier.
    pub identifier: String,
    pub creator: String,
    pub copyright: String,
    /// Parsed when assigned, so a malformed URL never reaches the backend.
    pub url: Url,
    /// Free-form app kind, e.g. "game", "application", "mediaplayer".
    pub app_type: String,
}

const DEFAULT_URL: &str = "https://github.com/ember-engine/ember";

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            app_name: "Ember Game".to_string(),
            version: AppVersion::default(),
            identifier: "game.ember.engine".to_string(),
            creator: "Ember Contributors".to_string(),
            copyright: "Copyright (C) 2026 The Ember Contributors".to_string(),
            url: Url::parse(DEFAULT_URL).expect("default url is well-formed"),
            app_type: "game".to_string(),
        }
    }
}

impl GameOptions {
    pub fn app_name(mut self, v: impl Into<String>) -> Self {
        self.app_name = v.into();
        self
    }

    pub fn version(mut self, v: AppVersion) -> Self {
        self.version = v;
        self
    }

    pub fn identifier(mut self, v: impl Into<String>) -> Self {
        self.identifier = v.into();
        self
    }

    pub fn creator(mut self, v: impl Into<String>) -> Self {
        self.creator = v.into();
        self
    }

    pub fn copyright(mut self, v: impl Into<String>) -> Self {
        self.copyright = v.into();
        self
    }

    pub fn url(mut self, v: Url) -> Self {
        self.url = v;
        self
    }

    /// Parses `v` and sets it as the project URL.
    pub fn try_url(self, v: &str) -> Result<Self, url::ParseError> {
        Ok(self.url(Url::parse(v)?))
    }

    pub fn app_type(mut self, v: impl Into<String>) -> Self {
        self.app_type = v.into();
        self
    }

    /// Value written to the backend for `key`.
    ///
    /// Empty strings map to `None` so the backend clears the property
    /// instead of storing an empty value.
    pub fn metadata_value(&self, key: MetadataKey) -> Option<String> {
        let value = match key {
            MetadataKey::Name => self.app_name.clone(),
            MetadataKey::Version => self.version.to_string(),
            MetadataKey::Identifier => self.identifier.clone(),
            MetadataKey::Creator => self.creator.clone(),
            MetadataKey::Copyright => self.copyright.clone(),
            MetadataKey::Url => self.url.to_string(),
            MetadataKey::Type => self.app_type.clone(),
        };
        (!value.is_empty()).then_some(value)
    }

    /// All metadata properties in the order they are applied.
    pub fn metadata(&self) -> impl Iterator<Item = (MetadataKey, Option<String>)> + '_ {
        MetadataKey::ALL
            .into_iter()
            .map(|key| (key, self.metadata_value(key)))
    }
}
