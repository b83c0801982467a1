use yew::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::links::open_external;
use crate::markup::background_image_style;
use crate::models::catalog::CatalogKind;
use crate::rotator::{RotatorAction, RotatorState};

#[derive(Properties, PartialEq)]
pub struct FeaturedBannerProps {
    pub kind: CatalogKind,
    pub rotator: UseReducerHandle<RotatorState>,
}

#[function_component(FeaturedBanner)]
pub fn featured_banner(props: &FeaturedBannerProps) -> Html {
    let FeaturedBannerProps { kind, rotator } = props;

    let entry = match rotator.current() {
        Ok(entry) => entry,
        Err(_) => {
            return html! { <LoadingPlaceholder message={format!("Loading featured {}...", kind.title().to_lowercase())} /> };
        }
    };

    let on_details = {
        let rotator = rotator.clone();
        let id = entry.id.clone();
        Callback::from(move |_: MouseEvent| {
            rotator.dispatch(RotatorAction::Select(id.clone()));
        })
    };

    let on_action = {
        let link = entry.link.clone();
        Callback::from(move |_: MouseEvent| open_external(&link))
    };

    html! {
        <section class="featured-banner" key={entry.id.clone()}>
            <div class="featured-image" style={background_image_style(&entry.image_url)}></div>
            <div class="featured-content">
                <span class="featured-label">{format!("Featured {}", kind.title())}</span>
                <h2>{entry.name.clone()}</h2>
                <p>{entry.description.clone()}</p>
                <div class="featured-meta">
                    <span class="entry-kind">{entry.kind.clone()}</span>
                    <span class="entry-validity">{entry.detailed_info.validity.clone()}</span>
                    <span class="entry-region">{entry.detailed_info.region.clone()}</span>
                </div>
                <div class="featured-actions">
                    <button class="primary-button" onclick={on_action}>{kind.action_label()}</button>
                    <button class="secondary-button" onclick={on_details}>{"Details"}</button>
                </div>
                <div class="featured-dots">
                    { for (0..rotator.len()).map(|i| html! {
                        <span class={classes!("dot", (i == rotator.index()).then(|| "active"))}></span>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .featured-banner {
                    position: relative;
                    display: flex;
                    min-height: 320px;
                    border-radius: 16px;
                    overflow: hidden;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    margin-bottom: 2rem;
                    animation: featuredFade 0.6s ease-in-out;
                }
                @keyframes featuredFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .featured-image {
                    flex: 1;
                    background-size: cover;
                    background-position: center;
                }
                .featured-content {
                    flex: 1;
                    padding: 2rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .featured-label {
                    color: #7EB2FF;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                }
                .featured-content h2 {
                    font-size: 2rem;
                    margin: 0;
                }
                .featured-content p {
                    color: #bbb;
                    margin: 0;
                }
                .featured-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .featured-meta span {
                    background: rgba(30, 144, 255, 0.15);
                    border-radius: 999px;
                    padding: 0.2rem 0.75rem;
                    font-size: 0.85rem;
                }
                .featured-actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: auto;
                }
                .featured-dots {
                    display: flex;
                    gap: 0.4rem;
                }
                .featured-dots .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.25);
                }
                .featured-dots .dot.active {
                    background: #7EB2FF;
                }
                @media (max-width: 768px) {
                    .featured-banner {
                        flex-direction: column;
                    }
                    .featured-image {
                        min-height: 180px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
