//! Email verification page.
//!
//! Pre-fills the address from `?email=`. If the backend answers with a token
//! the user is signed in directly; otherwise they continue to login.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::forms::validate_verification;
use crate::session::Session;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let query = use_query_map();
    let email = RwSignal::new(query.get_untracked().get("email").map(|v| v.to_string()).unwrap_or_default());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verification(&email.get(), &code.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let payload = crate::net::types::VerifyEmailRequest { email: email_value, code: code_value };
                match crate::net::api::verify_email(&payload).await {
                    Ok(resp) => {
                        if let Some(token) = resp.token {
                            session.login(&token);
                            crate::util::nav::hard_redirect(session.landing_path());
                        } else {
                            crate::util::nav::hard_redirect("/login");
                        }
                    }
                    Err(e) => {
                        error.set(Some(e.message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, email_value, code_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify your email"</h1>
                <p class="auth-card__subtitle">"We sent a 6-digit code to your inbox."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input auth-input--code"
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
