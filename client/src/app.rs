//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chrome::{SiteFooter, SiteHeader};
use crate::components::route_guard::Guarded;
use crate::pages::dashboards::{AdminDashboard, CheckoutPage, DeliveryDashboard, ProfilePage, SellerDashboard};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::oauth_success::OAuthSuccessPage;
use crate::pages::shop::{CartPage, FavoritesPage};
use crate::pages::signup::SignupPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::session::Session;
use crate::state::cart::CartState;
use crate::state::favorites::FavoritesState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and shop contexts, then routes every page through the
/// guard the route table assigns to its path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Session::browser());

    let cart = RwSignal::new(CartState::default());
    let favorites = RwSignal::new(FavoritesState::default());
    provide_context(cart);
    provide_context(favorites);

    // Restore persisted shop state after hydration so the first render matches SSR.
    Effect::new(move || {
        cart.set(CartState::load());
        favorites.set(FavoritesState::load());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/greenthicks.css"/>
        <Title text="Green Thicks"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded route="/login"><LoginPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <Guarded route="/signup"><SignupPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("verify-email")
                        view=|| view! { <Guarded route="/verify-email"><VerifyEmailPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("success"))
                        view=|| view! { <Guarded route="/auth/success"><OAuthSuccessPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Guarded route="/profile"><ProfilePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("favorites")
                        view=|| view! { <Guarded route="/favorites"><FavoritesPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("checkout")
                        view=|| view! { <Guarded route="/checkout"><CheckoutPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <Guarded route="/admin"><AdminDashboard/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("delivery")
                        view=|| view! { <Guarded route="/delivery"><DeliveryDashboard/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("seller")
                        view=|| view! { <Guarded route="/seller"><SellerDashboard/></Guarded> }
                    />
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
