use leptos::logging;

use crate::{
    direction::Direction,
    error::LoadError,
    flipbook::Flipbook,
    source::{Document, SourceMode},
};

/// Owns what is on screen: the loaded document and its page order.
///
/// Both only change through [`Controller::load`] and
/// [`Controller::toggle_direction`], and a request rejected by validation
/// leaves them untouched.
pub struct Controller<F: Flipbook> {
    flipbook: F,
    document: Option<Document>,
    direction: Direction,
}

impl<F: Flipbook> Controller<F> {
    pub fn new(flipbook: F, direction: Direction) -> Self {
        Self {
            flipbook,
            document: None,
            direction,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Text for the direction toggle button in the current state.
    pub fn toggle_label(&self) -> &'static str {
        self.direction.toggle_label()
    }

    /// Loads a document from the source named by `mode` ("url" or "local").
    ///
    /// `url` is only read in url mode and `file` only in local mode.
    pub fn load(
        &mut self,
        mode: &str,
        url: &str,
        file: Option<&F::File>,
    ) -> Result<(), LoadError> {
        let document = match mode.parse::<SourceMode>()? {
            SourceMode::Url => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(LoadError::EmptyUrl);
                }
                Document::Remote(url.to_owned())
            }
            SourceMode::Local => {
                let file = file.ok_or(LoadError::MissingFile)?;
                Document::Local(self.flipbook.object_url(file)?)
            }
        };
        logging::log!("loading {}", document.url());
        self.replace(document);
        self.render()
    }

    /// Flips the page order and re-renders the current document.
    ///
    /// The direction changes even if rendering fails.
    pub fn toggle_direction(&mut self) -> Result<(), LoadError> {
        self.direction = self.direction.toggled();
        logging::log!("direction is now {:?}", self.direction);
        self.render()
    }

    /// Renders `url` without user input, e.g. a remembered document on startup.
    pub fn open_remote(&mut self, url: &str) -> Result<(), LoadError> {
        self.load(SourceMode::Url.as_str(), url, None)
    }

    fn replace(&mut self, document: Document) {
        if let Some(Document::Local(old)) = self.document.replace(document) {
            self.flipbook.revoke(&old);
        }
    }

    fn render(&mut self) -> Result<(), LoadError> {
        let Some(document) = &self.document else {
            logging::log!("no document loaded, nothing to render");
            return Ok(());
        };
        self.flipbook.render(document.url(), self.direction)
    }
}
