use crate::{Model, Msg};
use shared::knowledge;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub fn render_dictionary(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectCondition(select.value())
    });

    let record = knowledge::lookup_exact(&model.selected_condition);

    html! {
        <div class="dictionary-section">
            <h2>{"Medical Knowledge Base"}</h2>
            <p>{"Browse the database of skin conditions known to this model."}</p>

            <select class="condition-select" onchange={onchange}>
                { for knowledge::condition_names().into_iter().map(|name| {
                    let selected = name == model.selected_condition;
                    html! { <option value={name.clone()} selected={selected}>{ name }</option> }
                })}
            </select>

            {
                match record {
                    Some(record) => html! {
                        <div class="condition-card">
                            <h3>{ &model.selected_condition }</h3>
                            <p><strong>{"Definition: "}</strong>{ &record.description }</p>
                            <p><strong>{"Causes: "}</strong>{ &record.causes }</p>
                            <p><strong>{"Treatment: "}</strong>{ &record.treatment }</p>
                        </div>
                    },
                    None => html! {
                        <p class="no-results-message">{"Select a condition to learn more."}</p>
                    },
                }
            }
        </div>
    }
}
