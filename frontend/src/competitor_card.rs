use uuid::Uuid;
use yew::prelude::*;
use shared::{Category, Competitor};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct CompetitorCardProps {
    pub competitor: Competitor,
    /// Votes this browser session may still cast, per category.
    pub flavor_remaining: u8,
    pub looks_remaining: u8,
    pub on_vote: Callback<(Uuid, Category)>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(CompetitorCard)]
pub fn competitor_card(props: &CompetitorCardProps) -> Html {
    let competitor = &props.competitor;
    let id = competitor.id;

    let vote_button = |category: Category, remaining: u8| {
        let on_vote = props.on_vote.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_vote.emit((id, category)));
        html! {
            <button class={combine_classes(BUTTON_BASE, BUTTON_SUCCESS)} {onclick}>
                {format!("Vote {} ({} left)", category.label(), remaining)}
            </button>
        }
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <div class={CARD_HOVER_SCALE}>
            <img
                src={competitor.image_url.clone()}
                alt={competitor.name.clone()}
                class="w-full h-40 object-cover rounded-md mb-3"
            />
            <h3 class={HEADING_SM}>{competitor.name.clone()}</h3>
            <div class={combine_classes(STATS_CARD, STATS_CARD_INFO)}>
                <p>{format!("Flavor: {}", competitor.flavor_votes)}</p>
                <p>{format!("Looks: {}", competitor.looks_votes)}</p>
            </div>
            <div class={FLEX_BETWEEN}>
                {vote_button(Category::Flavor, props.flavor_remaining)}
                {vote_button(Category::Looks, props.looks_remaining)}
            </div>
            <button class={combine_classes(BUTTON_BASE, &combine_classes(BUTTON_DANGER, "w-full mt-3"))} onclick={on_delete}>
                {"Delete"}
            </button>
        </div>
    }
}
