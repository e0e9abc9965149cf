//! Static 403 page for signed-in users outside their role area.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::access::LOGIN_PATH;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_back = move |_| navigate(LOGIN_PATH, NavigateOptions::default());

    view! {
        <div class="unauthorized-page">
            <h1 class="unauthorized-page__code">"403"</h1>
            <p class="unauthorized-page__message">"You do not have permission to view this page."</p>
            <button class="unauthorized-page__back" on:click=on_back>
                "Back to login"
            </button>
        </div>
    }
}
