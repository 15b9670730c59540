use leptos::logging;
use wasm_bindgen::prelude::*;

use crate::{direction::Direction, error::LoadError};

#[wasm_bindgen]
extern "C" {
    // provided by the page (see index.html)
    #[wasm_bindgen(catch, js_name = loadFlipbook)]
    fn load_flipbook(document: &str, rtl: bool) -> Result<(), JsValue>;
}

/// The rendering side the controller drives.
pub trait Flipbook {
    type File;

    fn render(&mut self, document: &str, direction: Direction) -> Result<(), LoadError>;

    /// Creates a URL the renderer can fetch `file` from.
    fn object_url(&mut self, file: &Self::File) -> Result<String, LoadError>;

    fn revoke(&mut self, url: &str);
}

/// `loadFlipbook` on the page's global scope, fed with object URLs for local files.
#[derive(Debug, Default)]
pub struct Browser;

impl Flipbook for Browser {
    type File = web_sys::File;

    fn render(&mut self, document: &str, direction: Direction) -> Result<(), LoadError> {
        load_flipbook(document, direction.is_rtl()).map_err(|e| LoadError::Render(describe(&e)))
    }

    fn object_url(&mut self, file: &web_sys::File) -> Result<String, LoadError> {
        web_sys::Url::create_object_url_with_blob(file)
            .map_err(|e| LoadError::ObjectUrl(describe(&e)))
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            logging::warn!("failed to revoke {url}: {e:?}");
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
