use crate::{Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_help(ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class="help-section">
            <h2>{"Find a Specialist"}</h2>
            <p>
                {"If your results indicate High or Critical risk, please locate a \
                  dermatologist immediately."}
            </p>

            <button
                class="analyze-btn primary"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.callback(|_| Msg::OpenSpecialistSearch).emit(())
                })}
            >
                <i class="fa-solid fa-map-location-dot"></i>
                {" Find Dermatologists on Google Maps"}
            </button>

            <div class="help-warning">
                <i class="fa-solid fa-triangle-exclamation"></i>
                {" IMPORTANT: do not attempt to self-treat based on this AI analysis. \
                  Always seek professional medical validation."}
            </div>
        </div>
    }
}
