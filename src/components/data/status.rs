//! Loading and error indicators for data views.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/data/status.module.css");

/// Status line shown above a data view.
///
/// Shows nothing while idle, a loading hint while a request is in flight,
/// and the error message with a retry button after a failure. Stale data
/// stays visible underneath in every case.
#[component]
pub fn DataStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(message) = error.get() {
                view! {
                    <div class=css::error role="alert">
                        <span class=css::icon><Icon icon=ic::WARNING /></span>
                        <span class=css::message>{message}</span>
                        <button class=css::retry on:click=move |_| on_retry.run(())>
                            <Icon icon=ic::RETRY />
                            "Retry"
                        </button>
                    </div>
                }
                .into_any()
            } else if loading.get() {
                view! { <div class=css::loading>"Loading…"</div> }.into_any()
            } else {
                ().into_any()
            }
        }}
    }
}
