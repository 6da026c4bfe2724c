use web_sys::HtmlSelectElement;
use yew::prelude::*;
use shared::SortCriteria;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct SortSelectProps {
    pub value: SortCriteria,
    pub on_change: Callback<SortCriteria>,
}

#[function_component(SortSelect)]
pub fn sort_select(props: &SortSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value().parse().unwrap_or_default());
        })
    };

    html! {
        <div class={combine_classes(CARD_SECTION, "mt-6")}>
            <h2 class={HEADING_SM}>{"Sort Competitors"}</h2>
            <select class={INPUT_BASE} {onchange}>
                { for SortCriteria::ALL.iter().map(|criteria| html! {
                    <option value={criteria.as_str()} selected={*criteria == props.value}>
                        {criteria.label()}
                    </option>
                }) }
            </select>
        </div>
    }
}
