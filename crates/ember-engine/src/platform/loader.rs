use std::fmt;

use super::backend::{Backend, BackendError};

/// Target platform, derived from the OS identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    FreeBsd,
    Other(&'static str),
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` identifier.
    pub fn from_os(os: &'static str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "freebsd" => Platform::FreeBsd,
            other => Platform::Other(other),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::FreeBsd => "freebsd",
            Platform::Other(os) => os,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy producing a backend for a given platform.
///
/// Injected into [`Game`](crate::core::Game) at construction and consulted
/// once per run, right before the backend is initialized.
pub trait BackendLoader {
    type Backend: Backend;

    fn load(&self, platform: Platform) -> Result<Self::Backend, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_map_to_variants() {
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("freebsd"), Platform::FreeBsd);
    }

    #[test]
    fn unknown_identifier_is_preserved() {
        let p = Platform::from_os("haiku");
        assert_eq!(p, Platform::Other("haiku"));
        assert_eq!(p.to_string(), "haiku");
    }

    #[test]
    fn current_round_trips_through_as_str() {
        assert_eq!(Platform::current().as_str(), std::env::consts::OS);
    }
}
