//! Global header and footer.
//!
//! Both render only on routes the route table marks as showing chrome; auth
//! pages and role dashboards get the full viewport.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::ROUTES;
use crate::session::Session;
use crate::state::cart::CartState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = StoredValue::new(expect_context::<Session>());
    let cart = expect_context::<RwSignal<CartState>>();
    let pathname = use_location().pathname;
    let signed_in = RwSignal::new(false);

    // Client-only: SSR has no token, and the first client render must match it.
    Effect::new(move || {
        let _ = pathname.get();
        signed_in.set(session.with_value(Session::is_authenticated));
    });

    // Copy so the nested `Show` closures can each hold it.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.with_value(Session::logout);
        signed_in.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            crate::util::nav::hard_redirect("/login");
        });
    };

    view! {
        <Show when=move || ROUTES.shows_chrome(&pathname.get())>
            <header class="site-header">
                <a href="/" class="site-header__brand">"Green Thicks"</a>
                <nav class="site-header__nav">
                    <a href="/cart" class="site-header__cart">
                        "Cart (" {move || cart.get().item_count()} ")"
                    </a>
                    <Show
                        when=move || signed_in.get()
                        fallback=|| view! { <a href="/login" class="site-header__login">"Sign in"</a> }
                    >
                        <a href="/favorites">"Favorites"</a>
                        <a href="/profile">"Profile"</a>
                        <button class="btn site-header__logout" on:click=on_logout>
                            "Sign out"
                        </button>
                    </Show>
                </nav>
            </header>
        </Show>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let pathname = use_location().pathname;
    view! {
        <Show when=move || ROUTES.shows_chrome(&pathname.get())>
            <footer class="site-footer">
                <p>"Green Thicks: fresh organic groceries, delivered."</p>
            </footer>
        </Show>
    }
}
