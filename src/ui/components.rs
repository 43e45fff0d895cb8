/// Reusable UI components

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::events::{add_request_for, CartEvent, ADD_BUTTON_CLASS};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Red action button, used for destructive actions like clearing the cart
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let style = "padding: 10px 20px; border: none; border-radius: 4px; font-size: 14px; cursor: pointer; font-weight: 500; background-color: #f44336; color: white;";

    html! {
        <button
            id={props.id.clone()}
            class="danger-button"
            onclick={props.onclick.clone()}
            {style}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductListProps {
    pub catalog: Catalog,
    pub currency: AttrValue,
    pub on_event: Callback<CartEvent>,
}

/// Catalog entries with one "Add to Cart" button each.
/// A single click handler on the list resolves which button was hit.
#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    let onclick = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(event) = e
                .target_dyn_into::<Element>()
                .and_then(|target| add_request_for(&target))
            {
                on_event.emit(event);
            }
        })
    };

    html! {
        <ul id="product-list" class="product-list" {onclick}>
            {for props.catalog.products().iter().map(|product| html! {
                <li key={product.id.to_string()} class="product-item">
                    {product.label(&props.currency)}
                    {" "}
                    <button class={ADD_BUTTON_CLASS} data-id={product.id.to_string()}>
                        {"Add to Cart"}
                    </button>
                </li>
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct CartListProps {
    pub cart: Cart,
    pub currency: AttrValue,
    #[prop_or_default]
    pub empty_message: Option<AttrValue>,
}

#[function_component(CartList)]
pub fn cart_list(props: &CartListProps) -> Html {
    // The placeholder sits outside the list so an empty cart is still an empty <ul>
    let placeholder = props
        .empty_message
        .clone()
        .filter(|_| props.cart.is_empty());

    html! {
        <>
            <ul id="cart-list" class="cart-list">
                {for props.cart.items().iter().map(|item| html! {
                    <li class="cart-item">{item.label(&props.currency)}</li>
                })}
            </ul>
            if let Some(message) = placeholder {
                <p class="cart-empty">{message}</p>
            }
        </>
    }
}
