//! Full-page navigation outside the client-side router.
//!
//! Logout and session invalidation reload the app at `/login` so that every
//! signal and in-flight task from the old session is dropped with the page.

/// Replace the current document with `path`. No-op outside the browser.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                leptos::logging::warn!("navigation to {path} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
