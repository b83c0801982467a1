use yew::prelude::*;
use web_sys::HtmlSelectElement;

use crate::components::detail_modal::DetailModal;
use crate::components::entry_card::EntryCard;
use crate::components::featured_banner::FeaturedBanner;
use crate::components::loading::LoadingPlaceholder;
use crate::hooks::use_featured_rotator;
use crate::models::catalog::CatalogKind;
use crate::rotator::RotatorAction;

#[derive(Properties, PartialEq)]
pub struct CatalogPageProps {
    pub kind: CatalogKind,
}

#[function_component(CatalogPage)]
pub fn catalog_page(props: &CatalogPageProps) -> Html {
    let kind = props.kind;
    let rotator = use_featured_rotator(kind);
    let facet = use_state(|| None::<String>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let catalog = rotator.catalog();

    let on_select = {
        let rotator = rotator.clone();
        Callback::from(move |id: String| rotator.dispatch(RotatorAction::Select(id)))
    };

    let on_close = {
        let rotator = rotator.clone();
        Callback::from(move |_: ()| rotator.dispatch(RotatorAction::ClearSelection))
    };

    let on_facet_change = {
        let facet = facet.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            facet.set(if value.is_empty() { None } else { Some(value) });
        })
    };

    html! {
        <div class="catalog-page">
            <section class="catalog-hero">
                <h1>{kind.title()}</h1>
            </section>
            <FeaturedBanner {kind} rotator={rotator.clone()} />
            {
                if catalog.is_empty() {
                    html! { <LoadingPlaceholder /> }
                } else {
                    html! {
                        <>
                            <div class="catalog-toolbar">
                                <label for="facet">{"Category"}</label>
                                <select id="facet" onchange={on_facet_change}>
                                    <option value="" selected={facet.is_none()}>{"All"}</option>
                                    { for catalog.kinds().into_iter().map(|kind| html! {
                                        <option value={kind.to_string()} selected={facet.as_deref() == Some(kind)}>{kind}</option>
                                    }) }
                                </select>
                            </div>
                            <div class="catalog-grid">
                                { for catalog.filter_by_kind(facet.as_deref()).map(|entry| html! {
                                    <EntryCard key={entry.id.clone()} entry={entry.clone()} on_select={on_select.clone()} />
                                }) }
                            </div>
                        </>
                    }
                }
            }
            {
                if let Some(entry) = rotator.inspected() {
                    html! {
                        <DetailModal
                            entry={entry.clone()}
                            action_label={kind.action_label()}
                            on_close={on_close}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .catalog-page {
                    padding: 94px 2rem 4rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    color: #fff;
                }
                .catalog-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .catalog-toolbar {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    color: #999;
                }
                .catalog-toolbar select {
                    background: #1a1a1a;
                    color: #fff;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    border-radius: 8px;
                    padding: 0.4rem 0.75rem;
                }
                .catalog-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .entry-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .entry-card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-5px);
                }
                .entry-card-image {
                    width: 100%;
                    height: 140px;
                    object-fit: cover;
                }
                .entry-card-body {
                    padding: 1rem;
                }
                .entry-card-body h3 {
                    margin: 0.5rem 0;
                }
                .entry-card-body p {
                    color: #999;
                    font-size: 0.9rem;
                }
                .entry-kind {
                    color: #7EB2FF;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                }
                .entry-validity {
                    font-size: 0.8rem;
                    color: #bbb;
                }
                "#}
            </style>
        </div>
    }
}
