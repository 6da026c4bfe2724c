use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct CompetitorFormProps {
    pub name: AttrValue,
    pub submitting: bool,
    pub on_name: Callback<String>,
    pub on_image: Callback<Option<File>>,
    pub on_submit: Callback<()>,
}

#[function_component(CompetitorForm)]
pub fn competitor_form(props: &CompetitorFormProps) -> Html {
    let oninput = {
        let on_name = props.on_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name.emit(input.value());
        })
    };

    let onchange = {
        let on_image = props.on_image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_image.emit(input.files().and_then(|files| files.get(0)));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form {onsubmit} class={combine_classes(CARD_SECTION, SPACE_Y_BASE)}>
            <h2 class={HEADING_MD}>{"Add Competitor"}</h2>
            <div class={INPUT_GROUP}>
                <label class={TEXT_LABEL}>{"Name"}</label>
                <input
                    type="text"
                    class={INPUT_BASE}
                    placeholder="Cookie name"
                    value={props.name.clone()}
                    {oninput}
                />
            </div>
            <div class={INPUT_GROUP}>
                <label class={TEXT_LABEL}>{"Image"}</label>
                <input type="file" accept="image/*" class={TEXT_MUTED} {onchange} />
            </div>
            <button type="submit" class={button_primary()} disabled={props.submitting}>
                {if props.submitting { "Adding..." } else { "Add Competitor" }}
            </button>
        </form>
    }
}
