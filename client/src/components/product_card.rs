//! Card for a single tracked product.

use leptos::prelude::*;

use catalog::Product;

use crate::state::products::{NO_IMAGE_MESSAGE, ProductCard as CardModel};

/// A product card with image, price, seller, description, and source link.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let card = CardModel::from(&product);
    let alt = card.title.clone();

    view! {
        <article class="product-card" data-product-id=card.key>
            <div class="product-card__image">
                {match card.image_url {
                    Some(src) => view! { <img src=src alt=alt loading="lazy"/> }.into_any(),
                    None => view! { <span class="product-card__no-image">{NO_IMAGE_MESSAGE}</span> }.into_any(),
                }}
            </div>
            <h3 class="product-card__title">{card.title}</h3>
            <div class="product-card__meta">
                <span class="product-card__price">{card.price}</span>
                <span class="product-card__seller">{card.seller}</span>
            </div>
            {card.description.map(|d| view! { <p class="product-card__description">{d}</p> })}
            {card.sentiment.map(|s| view! { <span class="product-card__sentiment">{s}</span> })}
            {card.recommendation.map(|r| view! { <p class="product-card__advice">{r}</p> })}
            <div class="product-card__footer">
                {card.added.map(|a| view! { <span class="product-card__added">{a}</span> })}
                <a class="product-card__link" href=card.link target="_blank" rel="noopener noreferrer">
                    "View Product →"
                </a>
            </div>
        </article>
    }
}
