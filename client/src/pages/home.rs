//! Public landing page with a featured-produce shelf.

use leptos::prelude::*;

use crate::state::cart::{CartItem, CartState, format_price};
use crate::state::favorites::FavoritesState;

/// A product shown on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Featured {
    pub id: &'static str,
    pub name: &'static str,
    pub price_cents: u64,
}

pub const FEATURED: &[Featured] = &[
    Featured { id: "spinach-250g", name: "Organic Spinach (250 g)", price_cents: 4_500 },
    Featured { id: "tomato-1kg", name: "Heirloom Tomatoes (1 kg)", price_cents: 8_900 },
    Featured { id: "millet-500g", name: "Foxtail Millet (500 g)", price_cents: 6_000 },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Fresh from the farm"</h1>
                <p>"Certified organic vegetables, grains and staples."</p>
            </section>
            <section class="home-page__shelf">
                {FEATURED.iter().map(|p| view! { <ProductCard product=*p/> }).collect_view()}
            </section>
        </div>
    }
}

#[component]
fn ProductCard(product: Featured) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let favorites = expect_context::<RwSignal<FavoritesState>>();

    let add_to_cart = move |_: leptos::ev::MouseEvent| {
        cart.update(|c| {
            c.add(CartItem {
                product_id: product.id.to_owned(),
                name: product.name.to_owned(),
                unit_price_cents: product.price_cents,
                quantity: 1,
            });
            c.save();
        });
    };
    let toggle_favorite = move |_: leptos::ev::MouseEvent| {
        favorites.update(|f| {
            f.toggle(product.id);
            f.save();
        });
    };

    view! {
        <article class="product-card">
            <h2 class="product-card__name">{product.name}</h2>
            <p class="product-card__price">{format_price(product.price_cents)}</p>
            <button class="btn" on:click=add_to_cart>"Add to cart"</button>
            <button class="btn btn--ghost" on:click=toggle_favorite>
                {move || if favorites.get().contains(product.id) { "♥" } else { "♡" }}
            </button>
        </article>
    }
}
