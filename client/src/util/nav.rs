//! Full-page navigation helpers.
//!
//! After a session change the app reloads through `location.href` so every
//! component starts from the freshly written token.

/// Navigate the browser to `path`, replacing the current document.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::warn!("navigation to {path} was rejected");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// `/verify-email` pre-filled with `email`.
pub fn verify_email_path(email: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let encoded: String = js_sys::encode_uri_component(email).into();
        format!("/verify-email?email={encoded}")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format!("/verify-email?email={email}")
    }
}
