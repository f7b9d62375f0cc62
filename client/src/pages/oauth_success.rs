//! Landing page after the Google OAuth callback.
//!
//! Collects the token the server parked in the hand-off cookie, stores it like
//! any other login, then sends the user to their landing page.

use leptos::prelude::*;

use crate::session::Session;

#[component]
pub fn OAuthSuccessPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::take_oauth_token().await {
                    Ok(token) => {
                        session.login(&token);
                        crate::util::nav::hard_redirect(session.landing_path());
                    }
                    Err(e) => {
                        log::warn!("oauth hand-off failed: {e}");
                        error.set(Some(e.message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, error);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show
                    when=move || error.get().is_some()
                    fallback=|| view! { <p>"Signing you in..."</p> }
                >
                    <p class="auth-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    <a href="/login" class="btn auth-button">"Back to sign in"</a>
                </Show>
            </div>
        </div>
    }
}
