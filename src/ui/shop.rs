/// Shop page: product catalog, cart, and the clear button

use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::events::CartEvent;
use crate::storage::{open_session_backend, CartStore};
use crate::ui::components::{Button, CartList, ProductList};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShopProps {
    #[prop_or_default]
    pub config: ShopConfig,
    #[prop_or_default]
    pub catalog: Catalog,
}

#[function_component(Shop)]
pub fn shop(props: &ShopProps) -> Html {
    let store = use_memo(
        (props.config.storage_key.clone(), props.catalog.clone()),
        |(key, catalog)| CartStore::new(open_session_backend(), key.clone(), catalog.clone()),
    );

    // Whatever the session already holds is shown on first render
    let cart = {
        let store = store.clone();
        use_state(move || store.load_cart())
    };

    // A new storage key means a different cart; show that one instead
    {
        let store = store.clone();
        let cart = cart.clone();
        use_effect_with(props.config.storage_key.clone(), move |_| {
            cart.set(store.load_cart());
            || ()
        });
    }

    let on_event = {
        let store = store.clone();
        let cart = cart.clone();
        Callback::from(move |event: CartEvent| {
            cart.set(store.dispatch(event));
        })
    };

    let on_clear = on_event.reform(|_: MouseEvent| CartEvent::ClearRequested);

    let currency = AttrValue::from(props.config.currency_symbol.clone());
    let empty_message = props
        .config
        .empty_state_message
        .clone()
        .map(AttrValue::from);

    html! {
        <div class="shop">
            <h1>{"Products"}</h1>
            <ProductList
                catalog={props.catalog.clone()}
                currency={currency.clone()}
                on_event={on_event}
            />

            <h2>{"Shopping Cart"}</h2>
            <CartList
                cart={(*cart).clone()}
                currency={currency}
                empty_message={empty_message}
            />
            <Button id="clear-cart-btn" onclick={on_clear}>
                {"Clear Cart"}
            </Button>
        </div>
    }
}
