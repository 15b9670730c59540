use std::str::FromStr;

use crate::error::LoadError;

/// Where the user wants the document to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Url,
    Local,
}

impl SourceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Local => "local",
        }
    }
}

impl FromStr for SourceMode {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(Self::Url),
            "local" => Ok(Self::Local),
            other => Err(LoadError::UnknownSource(other.to_owned())),
        }
    }
}

/// The document currently handed to the flipbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Remote(String),
    /// Object URL created for a locally picked file. Must be revoked once replaced.
    Local(String),
}

impl Document {
    pub fn url(&self) -> &str {
        match self {
            Self::Remote(url) | Self::Local(url) => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("url".parse::<SourceMode>(), Ok(SourceMode::Url));
        assert_eq!("local".parse::<SourceMode>(), Ok(SourceMode::Local));
        for mode in [SourceMode::Url, SourceMode::Local] {
            assert_eq!(mode.as_str().parse::<SourceMode>(), Ok(mode));
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        assert_eq!(
            "ftp".parse::<SourceMode>(),
            Err(LoadError::UnknownSource("ftp".into()))
        );
        assert!(matches!(
            "URL".parse::<SourceMode>(),
            Err(LoadError::UnknownSource(_))
        ));
    }
}
