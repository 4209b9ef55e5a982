use crate::{Model, Msg};
use yew::prelude::*;

pub fn render_theme_toggle(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="top-right">
            <button
                id="theme-toggle"
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                title={ if model.theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
            >
                { if model.theme == "light" {
                    html! { <i class="fa-solid fa-sun"></i> }
                } else {
                    html! { <i class="fa-solid fa-moon"></i> }
                }}
            </button>
        </div>
    }
}
