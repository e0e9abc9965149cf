//! Loading / error banner with a retry action for list pages.

use leptos::prelude::*;

/// Shows a spinner while `loading`, or the error text and a retry button.
#[component]
pub fn FetchStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="fetch-status fetch-status--loading" aria-busy="true">"Loading..."</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <div class="fetch-status fetch-status--error" role="alert">
                <p>{move || error.get().unwrap_or_default()}</p>
                <button class="fetch-status__retry" on:click=move |_| on_retry.run(())>
                    "Try again"
                </button>
            </div>
        </Show>
    }
}
