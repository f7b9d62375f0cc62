//! Cart and favorites pages.

use leptos::prelude::*;

use super::home::FEATURED;
use crate::state::cart::{CartState, format_price};
use crate::state::favorites::FavoritesState;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let set_quantity = move |id: String, qty: u32| {
        cart.update(|c| {
            c.set_quantity(&id, qty);
            c.save();
        });
    };

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            <Show
                when=move || !cart.get().items.is_empty()
                fallback=|| view! { <p>"Your cart is empty."</p> }
            >
                <ul class="cart-page__lines">
                    {move || {
                        cart.get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let dec_id = item.product_id.clone();
                                let inc_id = item.product_id.clone();
                                let qty = item.quantity;
                                view! {
                                    <li class="cart-line">
                                        <span class="cart-line__name">{item.name.clone()}</span>
                                        <button class="btn" on:click=move |_| set_quantity(dec_id.clone(), qty.saturating_sub(1))>
                                            "-"
                                        </button>
                                        <span class="cart-line__qty">{qty}</span>
                                        <button class="btn" on:click=move |_| set_quantity(inc_id.clone(), qty + 1)>
                                            "+"
                                        </button>
                                        <span class="cart-line__total">{format_price(item.line_total_cents())}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <p class="cart-page__total">"Total: " {move || format_price(cart.get().total_cents())}</p>
                <a href="/checkout" class="btn">"Checkout"</a>
            </Show>
        </div>
    }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesState>>();

    let names = move || {
        let favs = favorites.get();
        favs.product_ids
            .iter()
            .map(|id| {
                FEATURED
                    .iter()
                    .find(|p| p.id == id.as_str())
                    .map_or_else(|| id.clone(), |p| p.name.to_owned())
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="favorites-page">
            <h1>"Favorites"</h1>
            <Show
                when=move || !favorites.get().product_ids.is_empty()
                fallback=|| view! { <p>"No favorites yet."</p> }
            >
                <ul>
                    {move || names().into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
