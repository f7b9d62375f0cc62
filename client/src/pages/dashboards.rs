//! Signed-in areas: profile and the admin, delivery and seller dashboards.
//!
//! Access is decided by the route guard wrapping each page. Every action these
//! pages trigger is authorized again by the backend.

use leptos::prelude::*;

use crate::session::{Claims, Session};

/// Claims of the signed-in user, read after mount.
fn use_claims() -> RwSignal<Option<Claims>> {
    let session = expect_context::<Session>();
    let claims = RwSignal::new(None::<Claims>);
    Effect::new(move || claims.set(session.claims()));
    claims
}

fn user_label(claims: Option<&Claims>) -> String {
    claims
        .and_then(|c| c.raw.get("email").and_then(|v| v.as_str()).map(str::to_owned).or_else(|| c.user_id.clone()))
        .unwrap_or_else(|| "you".to_owned())
}

#[component]
fn DashboardFrame(title: &'static str, children: Children) -> impl IntoView {
    let claims = use_claims();
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <a href="/" class="dashboard-page__home">"Green Thicks"</a>
                <h1>{title}</h1>
                <span class="dashboard-page__user">{move || user_label(claims.get().as_ref())}</span>
            </header>
            <section class="dashboard-page__body">{children()}</section>
        </div>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <DashboardFrame title="Admin">
            <p>"Manage products, sellers, delivery partners and orders."</p>
        </DashboardFrame>
    }
}

#[component]
pub fn DeliveryDashboard() -> impl IntoView {
    view! {
        <DashboardFrame title="Deliveries">
            <p>"Your assigned deliveries for today."</p>
        </DashboardFrame>
    }
}

#[component]
pub fn SellerDashboard() -> impl IntoView {
    view! {
        <DashboardFrame title="Seller">
            <p>"Your listings and incoming orders."</p>
        </DashboardFrame>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let claims = use_claims();
    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            <p>"Signed in as " {move || user_label(claims.get().as_ref())}</p>
            <p>
                "Role: "
                {move || claims.get().and_then(|c| c.role).unwrap_or_else(|| "customer".to_owned())}
            </p>
        </div>
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <p>"Review your cart and choose a delivery slot."</p>
        </div>
    }
}

#[cfg(test)]
#[path = "dashboards_test.rs"]
mod dashboards_test;
