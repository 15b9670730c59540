use leptos::*;

use crate::{
    app::{report, SharedController},
    config,
    source::SourceMode,
};

#[component]
pub fn SourceForm() -> impl IntoView {
    let controller = expect_context::<SharedController>();
    let config = config::get();
    let remembered_url = config.borrow().document.clone().unwrap_or_default();

    let source_element: NodeRef<html::Select> = create_node_ref();
    let url_element: NodeRef<html::Input> = create_node_ref();
    let file_element: NodeRef<html::Input> = create_node_ref();

    let (mode, set_mode) = create_signal(SourceMode::Url.as_str().to_owned());
    let is_mode = move |m: SourceMode| mode.with(|mode| mode == m.as_str());

    let on_load = move |_| {
        let (Some(source), Some(url), Some(file)) =
            (source_element.get(), url_element.get(), file_element.get())
        else {
            return;
        };
        let file = file.files().and_then(|files| files.get(0));

        let result = {
            let mut controller = controller.borrow_mut();
            let result = controller.load(&source.value(), &url.value(), file.as_ref());
            if !matches!(result, Err(ref e) if e.is_validation()) {
                let mut config = config.borrow_mut();
                config.remember(&*controller);
                config.save();
            }
            result
        };
        if let Err(e) = result {
            report(&e);
        }
    };

    view! {
        <select
            id="pdfSource"
            class="rounded-lg px-2 py-1 bg-1"
            node_ref=source_element
            on:change=move |ev| set_mode.set(event_target_value(&ev))>
            <option value="url" selected=true>"PDF URL"</option>
            <option value="local">"Local file"</option>
        </select>
        <input
            id="pdfUrl"
            class="rounded-lg px-2 py-1 flex-1"
            class:hidden=move || !is_mode(SourceMode::Url)
            type="url"
            placeholder="https://example.com/book.pdf"
            value=remembered_url
            node_ref=url_element />
        <input
            id="pdfFile"
            class:hidden=move || !is_mode(SourceMode::Local)
            type="file"
            accept="application/pdf"
            node_ref=file_element />
        <button
            id="loadPdfBtn"
            class="rounded-lg px-3 py-1 active:bg-sky-500"
            on:click=on_load>
            "Load"
        </button>
    }
}
