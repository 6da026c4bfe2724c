use yew::prelude::*;

mod api;
mod browser;
mod competition;
mod competitor_card;
mod competitor_form;
mod config;
mod image_host;
mod sort_select;
mod styles;

use crate::competition::Competition;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="min-h-screen bg-gray-900">
            <Competition />
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
