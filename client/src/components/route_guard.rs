//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a page region and renders it only once the session satisfies the
//! guard's policy. SSR and the first client render always show the
//! `Checking` placeholder, so hydration never flashes protected content; the
//! real check runs in an effect after mount.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::{GuardPolicy, GuardState, PendingRedirect, ROUTES, advance};
use crate::session::Session;

/// Render `children` only while `policy` is satisfied; otherwise show the
/// policy's loading text and navigate to its fallback after `REDIRECT_DELAY`.
///
/// Re-evaluates on every client-side navigation and whenever the tab becomes
/// visible again, so a token that expired while the tab was idle is noticed.
#[component]
pub fn RouteGuard(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let state = RwSignal::new(GuardState::Checking);
    let pending = PendingRedirect::new();
    let label = policy.loading_label.clone();

    let check = {
        let pending = pending.clone();
        move || {
            let Some(step) = advance(&session, &policy, &state.get_untracked(), &pending) else {
                return;
            };
            if let Some(redirect) = step.redirect {
                log::debug!("guard redirecting to {}", redirect.to);
                #[cfg(feature = "hydrate")]
                {
                    let pending = pending.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(crate::routing::REDIRECT_DELAY).await;
                        pending.fire(redirect.ticket, || {
                            let options = leptos_router::NavigateOptions { replace: true, ..Default::default() };
                            navigate(&redirect.to, options);
                        });
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (redirect, &navigate);
                }
            }
            state.set(step.state);
        }
    };

    let on_navigation = check.clone();
    Effect::new(move || {
        let _ = pathname.get();
        on_navigation();
    });

    #[cfg(feature = "hydrate")]
    {
        use leptos::leptos_dom::helpers::{document, window_event_listener_untyped};

        let on_visible = check.clone();
        let handle = window_event_listener_untyped("visibilitychange", move |_| {
            if document().visibility_state() == web_sys::VisibilityState::Visible {
                on_visible();
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = check;
    }

    on_cleanup(move || pending.cancel());

    view! {
        <Show
            when=move || state.get().renders_children()
            fallback=move || {
                let label = label.clone();
                view! {
                    <div class="route-guard" aria-busy="true">
                        <p class="route-guard__status">
                            {move || match state.get() {
                                GuardState::Redirecting { .. } => label.clone(),
                                _ => "Loading...".to_owned(),
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Guard `children` with whatever the route table registers for `route`.
#[component]
pub fn Guarded(route: &'static str, children: ChildrenFn) -> impl IntoView {
    match GuardPolicy::for_route(ROUTES.classify(route)) {
        Some(policy) => view! { <RouteGuard policy=policy>{children()}</RouteGuard> }.into_any(),
        None => children(),
    }
}
