use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::anilist::{fetch_anime, AnimeDetails};
use crate::components::loading::LoadingPlaceholder;
use crate::fetch_state::{FetchState, LiveFlag};
use crate::links::{open_external, watch_url};
use crate::markup::{background_image_style, render_remote_description};

#[derive(Properties, PartialEq)]
pub struct AnimePageProps {
    pub id: u32,
}

fn render_details(details: &AnimeDetails) -> Html {
    let on_watch = {
        let url = watch_url(details.id, details.accent_color());
        Callback::from(move |_: MouseEvent| open_external(&url))
    };

    let studios: Vec<&str> = details.studios.nodes.iter().map(|studio| studio.name.as_str()).collect();

    html! {
        <>
            {
                if let Some(style) = details.banner_image.as_deref().and_then(background_image_style) {
                    html! { <div class="anime-banner" style={style}></div> }
                } else {
                    html! {}
                }
            }
            <div class="anime-header">
                {
                    if let Some(cover) = &details.cover_image.large {
                        html! { <img class="anime-cover" src={cover.clone()} alt={details.display_title()} /> }
                    } else {
                        html! {}
                    }
                }
                <div class="anime-summary">
                    <h1 style={format!("color: {};", details.accent_color())}>{details.display_title()}</h1>
                    <div class="anime-facts">
                        <span>{details.airing_range()}</span>
                        {
                            if let Some(episodes) = details.episodes {
                                html! { <span>{format!("{} episodes", episodes)}</span> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(status) = details.status_label() {
                                html! { <span>{status}</span> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if !studios.is_empty() {
                                html! { <span>{studios.join(", ")}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <button class="primary-button watch-button" onclick={on_watch}>{"Watch"}</button>
                </div>
            </div>
            {
                match &details.description {
                    Some(description) => render_remote_description(description),
                    None => html! { <p class="remote-description">{"No description available."}</p> },
                }
            }
            {
                if !details.characters.nodes.is_empty() {
                    html! {
                        <section class="anime-people">
                            <h2>{"Characters"}</h2>
                            <div class="people-grid">
                                { for details.characters.nodes.iter().map(|character| {
                                    let name = character.name.full.clone().unwrap_or_else(|| "Unknown".to_string());
                                    let image = character.image.as_ref().and_then(|image| image.medium.clone());
                                    html! {
                                        <div class="person-card">
                                            {
                                                if let Some(image) = image {
                                                    html! { <img src={image} alt={name.clone()} loading="lazy" /> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <span>{name}</span>
                                        </div>
                                    }
                                }) }
                            </div>
                        </section>
                    }
                } else {
                    html! {}
                }
            }
            {
                if !details.staff.nodes.is_empty() {
                    html! {
                        <section class="anime-people">
                            <h2>{"Staff"}</h2>
                            <ul class="staff-list">
                                { for details.staff.nodes.iter().map(|member| html! {
                                    <li>
                                        <span>{member.name.full.clone().unwrap_or_else(|| "Unknown".to_string())}</span>
                                        <span class="staff-role">{member.primary_occupations.join(", ")}</span>
                                    </li>
                                }) }
                            </ul>
                        </section>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[function_component(AnimePage)]
pub fn anime_page(props: &AnimePageProps) -> Html {
    let state = use_state(FetchState::<AnimeDetails>::default);
    // Bumped by the retry button to run the lookup again
    let attempt = use_state(|| 0u32);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(id, _attempt)| {
                let id = *id;
                let live = LiveFlag::new();
                state.set(FetchState::Loading);
                {
                    let live = live.clone();
                    spawn_local(async move {
                        let result = fetch_anime(id).await;
                        if live.is_live() {
                            state.set(FetchState::from_result(result));
                        } else {
                            log::debug!("Discarding stale lookup for {}", id);
                        }
                    });
                }
                move || live.clear()
            },
            (props.id, *attempt),
        );
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
    };

    html! {
        <div class="anime-page">
            {
                match &*state {
                    FetchState::Loading => html! { <LoadingPlaceholder message={"Loading anime details...".to_string()} /> },
                    FetchState::Failed(message) => html! {
                        <div class="anime-error">
                            <h2>{"Couldn't load this anime"}</h2>
                            <p>{message.clone()}</p>
                            <button class="secondary-button" onclick={on_retry}>{"Retry"}</button>
                        </div>
                    },
                    FetchState::Loaded(details) => render_details(details),
                }
            }
            <style>
                {r#"
                .anime-page {
                    padding: 74px 2rem 4rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    color: #fff;
                }
                .anime-banner {
                    height: 240px;
                    background-size: cover;
                    background-position: center;
                    border-radius: 0 0 16px 16px;
                    margin: 0 -2rem 2rem;
                }
                .anime-header {
                    display: flex;
                    gap: 2rem;
                    align-items: flex-start;
                    margin-bottom: 2rem;
                }
                .anime-cover {
                    width: 200px;
                    border-radius: 12px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                }
                .anime-summary h1 {
                    margin-top: 0;
                    font-size: 2.5rem;
                }
                .anime-facts {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .anime-facts span {
                    background: rgba(30, 144, 255, 0.15);
                    border-radius: 999px;
                    padding: 0.2rem 0.75rem;
                    font-size: 0.9rem;
                }
                .remote-description {
                    color: #bbb;
                    line-height: 1.6;
                }
                .people-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(120px, 1fr));
                    gap: 1rem;
                }
                .person-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 0.5rem;
                }
                .person-card img {
                    width: 100px;
                    height: 140px;
                    object-fit: cover;
                    border-radius: 8px;
                }
                .staff-list li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.4rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .staff-role {
                    color: #999;
                }
                .anime-error {
                    text-align: center;
                    padding: 4rem 1rem;
                }
                .anime-error p {
                    color: #ff6b6b;
                }
                @media (max-width: 768px) {
                    .anime-header {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
