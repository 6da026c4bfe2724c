use std::rc::Rc;
use uuid::Uuid;
use web_sys::File;
use yew::prelude::*;
use shared::{
    add_competitor, cast_vote, remove_competitor, Category, CompetitionSession, Competitor,
    CompetitorRepository, ImageCleanup, Resynced, Result, SortCriteria, VoteTicket,
};
use crate::{
    api::ApiClient,
    browser,
    competitor_card::CompetitorCard,
    competitor_form::CompetitorForm,
    config::CONFIG,
    image_host::HostedImageUploader,
    sort_select::SortSelect,
    styles::*,
};

pub enum Msg {
    SignedIn(Result<()>),
    Listed(Result<Vec<Competitor>>),
    NameChanged(String),
    ImageChanged(Option<File>),
    Add,
    Added(Result<Resynced<Competitor>>),
    Vote(Uuid, Category),
    Voted(VoteTicket, Result<Resynced<Competitor>>),
    Delete(Uuid),
    Deleted(String, Result<Resynced<ImageCleanup>>),
    SortChanged(SortCriteria),
}

/// The whole page: add form, sort dropdown and competitor grid.
pub struct Competition {
    session: CompetitionSession<File>,
    api: ApiClient,
    images: Rc<HostedImageUploader>,
    submitting: bool,
    /// Bumped after each successful add so the form remounts empty.
    form_generation: u32,
}

impl Competition {
    fn apply_listing(&mut self, listing: Result<Vec<Competitor>>) {
        match listing {
            Ok(competitors) => self.session.apply_listing(competitors),
            Err(e) => browser::report("Error fetching competitors", &e),
        }
    }
}

impl Component for Competition {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = ApiClient::new(CONFIG.api_base_url);

        let signing_in = api.clone();
        ctx.link().send_future(async move {
            Msg::SignedIn(signing_in.sign_in_anonymously().await)
        });

        Self {
            session: CompetitionSession::new(),
            api,
            images: Rc::new(HostedImageUploader::new(CONFIG.image_host_url, CONFIG.upload_preset)),
            submitting: false,
            form_generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SignedIn(Ok(())) => {
                browser::log("Signed in anonymously");
                let api = self.api.clone();
                ctx.link().send_future(async move { Msg::Listed(api.list().await) });
                true
            }
            Msg::SignedIn(Err(e)) => {
                browser::report("Error signing in", &e);
                false
            }
            Msg::Listed(listing) => {
                self.apply_listing(listing);
                true
            }
            Msg::NameChanged(name) => {
                self.session.set_name(name);
                true
            }
            Msg::ImageChanged(image) => {
                self.session.set_image(image);
                false
            }
            Msg::Add => {
                if self.submitting {
                    return false;
                }
                let entry = match self.session.prepare_entry() {
                    Ok(entry) => entry,
                    Err(e) => {
                        browser::report("Error adding competitor", &e);
                        return false;
                    }
                };

                self.submitting = true;
                let api = self.api.clone();
                let images = self.images.clone();
                ctx.link().send_future(async move {
                    Msg::Added(add_competitor(&api, &*images, entry).await)
                });
                true
            }
            Msg::Added(result) => {
                self.submitting = false;
                match result {
                    Ok(Resynced { outcome, listing }) => {
                        browser::log(&format!("Added competitor {}", outcome.name));
                        self.session.entry_submitted();
                        self.form_generation = self.form_generation.wrapping_add(1);
                        self.apply_listing(listing);
                    }
                    Err(e) => browser::report("Error adding competitor", &e),
                }
                true
            }
            Msg::Vote(id, category) => {
                match self.session.prepare_vote(id, category) {
                    Ok(ticket) => {
                        let api = self.api.clone();
                        ctx.link().send_future(async move {
                            Msg::Voted(ticket, cast_vote(&api, ticket).await)
                        });
                        true
                    }
                    Err(e) => {
                        browser::report("Error voting", &e);
                        false
                    }
                }
            }
            Msg::Voted(ticket, result) => match result {
                Ok(Resynced { listing, .. }) => {
                    if let Err(e) = self.session.vote_landed(ticket) {
                        browser::report("Error voting", &e);
                    }
                    self.apply_listing(listing);
                    true
                }
                Err(e) => {
                    self.session.vote_failed(ticket);
                    browser::report("Error voting", &e);
                    true
                }
            },
            Msg::Delete(id) => {
                let Some(competitor) = self.session.find(id).cloned() else {
                    return false;
                };
                if !browser::confirm(&format!("Are you sure you want to delete {}?", competitor.name)) {
                    return false;
                }

                let api = self.api.clone();
                let images = self.images.clone();
                ctx.link().send_future(async move {
                    let result = remove_competitor(&api, &*images, &competitor).await;
                    Msg::Deleted(competitor.name, result)
                });
                false
            }
            Msg::Deleted(name, result) => match result {
                Ok(Resynced { outcome, listing }) => {
                    match outcome {
                        ImageCleanup::Destroyed => browser::log(&format!("Deleted {} and its image", name)),
                        ImageCleanup::Failed(e) => browser::report("Error deleting image", &e),
                    }
                    self.apply_listing(listing);
                    true
                }
                Err(e) => {
                    browser::report("Error deleting competitor", &e);
                    false
                }
            },
            Msg::SortChanged(criteria) => {
                self.session.set_sort(criteria);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class={BG_PAGE}>
                <div class={CONTAINER}>
                    <h1 class={HEADING_LG}>{"Cookie Competition"}</h1>
                    if !self.api.is_signed_in() {
                        <p class={TEXT_MUTED}>{"Connecting..."}</p>
                    }
                    <CompetitorForm
                        key={self.form_generation.to_string()}
                        name={AttrValue::from(self.session.name().to_string())}
                        submitting={self.submitting}
                        on_name={link.callback(Msg::NameChanged)}
                        on_image={link.callback(Msg::ImageChanged)}
                        on_submit={link.callback(|_: ()| Msg::Add)}
                    />
                    <SortSelect
                        value={self.session.sort_by()}
                        on_change={link.callback(Msg::SortChanged)}
                    />
                    <div class={combine_classes(GRID_COLS_3, "mt-6")}>
                        { for self.session.competitors().iter().map(|competitor| html! {
                            <CompetitorCard
                                key={competitor.id.to_string()}
                                competitor={competitor.clone()}
                                flavor_remaining={self.session.remaining_votes(competitor.id, Category::Flavor)}
                                looks_remaining={self.session.remaining_votes(competitor.id, Category::Looks)}
                                on_vote={link.callback(|(id, category): (Uuid, Category)| Msg::Vote(id, category))}
                                on_delete={link.callback(Msg::Delete)}
                            />
                        }) }
                    </div>
                </div>
            </div>
        }
    }
}
