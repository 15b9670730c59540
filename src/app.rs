use std::{cell::RefCell, rc::Rc};

use leptos::*;

use crate::{
    components::{DirectionToggle, SourceForm},
    config,
    controller::Controller,
    error::LoadError,
    flipbook::Browser,
};

// local storage usage (non-normative)
// "c" => "{rtl}:{remote url or empty}"

pub type SharedController = Rc<RefCell<Controller<Browser>>>;

/// Shows `error` in a blocking alert.
pub fn report(error: &LoadError) {
    logging::warn!("{error:?}");
    if let Err(e) = window().alert_with_message(&error.to_string()) {
        logging::error!("failed to show alert: {e:?}");
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = config::init();
    let controller: SharedController = Rc::new(RefCell::new(Controller::new(
        Browser,
        config.borrow().direction(),
    )));
    provide_context(controller.clone());

    // the flipbook container has to be in the DOM before rendering into it
    if let Some(url) = config.borrow().document.clone() {
        request_animation_frame(move || {
            if let Err(e) = controller.borrow_mut().open_remote(&url) {
                logging::warn!("failed to reopen {url}: {e}");
            }
        });
    }

    view! {
        <main>
            <div class="flex flex-col min-h-screen mx-auto px-2 pb-2 pt-2 md:pt-10">
                <div class="flex flex-wrap items-center gap-3 font-sans text-base">
                    <SourceForm />
                    <DirectionToggle />
                </div>
                <div id="flipbook" class="flex-1 mt-6"></div>
            </div>
        </main>
    }
}
