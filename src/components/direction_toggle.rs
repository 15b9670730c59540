use leptos::*;

use crate::{
    app::{report, SharedController},
    config,
};

#[component]
pub fn DirectionToggle() -> impl IntoView {
    let controller = expect_context::<SharedController>();
    let config = config::get();
    let (label, set_label) = create_signal(controller.borrow().toggle_label());

    let on_click = move |_| {
        let result = {
            let mut controller = controller.borrow_mut();
            let result = controller.toggle_direction();
            set_label.set(controller.toggle_label());
            let mut config = config.borrow_mut();
            config.remember(&*controller);
            config.save();
            result
        };
        if let Err(e) = result {
            report(&e);
        }
    };

    view! {
        <button
            id="toggleDirectionBtn"
            class="rounded-lg px-3 py-1 active:bg-sky-500"
            on:click=on_click>
            {label}
        </button>
    }
}
