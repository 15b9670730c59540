use std::{cell::RefCell, rc::Rc};

use leptos::{expect_context, logging, provide_context};

use crate::{controller::Controller, direction::Direction, flipbook::Flipbook, source::Document};

const KEY: &str = "c";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub rtl: bool,
    /// Last remote document that was loaded. Object URLs die with the page, so
    /// local files are never remembered.
    pub document: Option<String>,
}

impl Config {
    pub fn direction(&self) -> Direction {
        Direction::from_rtl(self.rtl)
    }

    /// Copies what should survive a reload out of `controller`.
    pub fn remember<F: Flipbook>(&mut self, controller: &Controller<F>) {
        self.rtl = controller.direction().is_rtl();
        self.document = match controller.document() {
            Some(Document::Remote(url)) => Some(url.clone()),
            Some(Document::Local(_)) | None => None,
        };
    }

    pub fn save(&self) {
        let Ok(Some(storage)) = leptos::window().local_storage() else {
            return;
        };

        if let Err(e) = storage.set_item(KEY, &self.to_storage_string()) {
            logging::warn!("failed to save config: {e:?}");
        }
    }

    fn to_storage_string(&self) -> String {
        format!("{}:{}", self.rtl, self.document.as_deref().unwrap_or(""))
    }

    fn parse(s: &str) -> Option<Config> {
        let (rtl, document) = s.split_once(':')?;
        Some(Config {
            rtl: rtl.parse::<bool>().ok()?,
            document: (!document.is_empty()).then(|| document.to_owned()),
        })
    }
}

fn load() -> Option<Config> {
    let Ok(Some(storage)) = leptos::window().local_storage() else {
        return None;
    };
    let Ok(Some(config_string)) = storage.get_item(KEY) else {
        return None;
    };
    Config::parse(&config_string)
}

pub fn init() -> Rc<RefCell<Config>> {
    let config = Rc::new(RefCell::new(load().unwrap_or_default()));
    provide_context(config.clone());
    config
}

pub fn get() -> Rc<RefCell<Config>> {
    expect_context::<Rc<RefCell<Config>>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_keeps_url_colons() {
        let config = Config {
            rtl: true,
            document: Some("https://example.com:8080/a.pdf".into()),
        };
        assert_eq!(Config::parse(&config.to_storage_string()), Some(config));
    }

    #[test]
    fn empty_document() {
        let config = Config::default();
        assert_eq!(config.to_storage_string(), "false:");
        assert_eq!(Config::parse("false:"), Some(config));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(Config::parse(""), None);
        assert_eq!(Config::parse("true"), None);
        assert_eq!(Config::parse("yes:a.pdf"), None);
    }

    struct Noop;

    impl Flipbook for Noop {
        type File = ();

        fn render(&mut self, _: &str, _: Direction) -> Result<(), crate::LoadError> {
            Ok(())
        }

        fn object_url(&mut self, _: &()) -> Result<String, crate::LoadError> {
            Ok("blob:local".into())
        }

        fn revoke(&mut self, _: &str) {}
    }

    #[test]
    fn remembers_remote_documents_only() {
        let mut controller = Controller::new(Noop, Direction::Ltr);
        let mut config = Config::default();

        controller.load("url", "a.pdf", None).unwrap();
        controller.toggle_direction().unwrap();
        config.remember(&controller);
        assert_eq!(
            config,
            Config {
                rtl: true,
                document: Some("a.pdf".into()),
            }
        );

        controller.load("local", "", Some(&())).unwrap();
        config.remember(&controller);
        assert_eq!(config.document, None);
        assert!(config.rtl);
    }

    #[test]
    fn direction_follows_rtl() {
        let mut config = Config::default();
        assert_eq!(config.direction(), Direction::Ltr);
        config.rtl = true;
        assert_eq!(config.direction(), Direction::Rtl);
    }
}
