use thiserror::Error;

/// Why a load or toggle request could not be carried out.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Please enter a valid PDF URL.")]
    EmptyUrl,
    #[error("Please select a valid PDF file.")]
    MissingFile,
    #[error("Unknown PDF source: {0}.")]
    UnknownSource(String),
    #[error("Could not open the selected file: {0}")]
    ObjectUrl(String),
    #[error("Could not render the flipbook: {0}")]
    Render(String),
}

impl LoadError {
    /// True when the request was rejected before anything on screen changed.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Render(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_render_failures_follow_a_state_change() {
        assert!(LoadError::EmptyUrl.is_validation());
        assert!(LoadError::MissingFile.is_validation());
        assert!(LoadError::UnknownSource("ftp".into()).is_validation());
        assert!(LoadError::ObjectUrl("denied".into()).is_validation());
        assert!(!LoadError::Render("boom".into()).is_validation());
    }

    #[test]
    fn unknown_source_message() {
        assert_eq!(
            LoadError::UnknownSource("ftp".into()).to_string(),
            "Unknown PDF source: ftp."
        );
    }
}
