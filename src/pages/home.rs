use yew::prelude::*;
use yew_router::components::Link;

use crate::components::detail_modal::DetailModal;
use crate::components::featured_banner::FeaturedBanner;
use crate::hooks::use_featured_rotator;
use crate::models::catalog::CatalogKind;
use crate::rotator::{RotatorAction, RotatorState};
use crate::Route;

fn render_inspected(kind: CatalogKind, rotator: &UseReducerHandle<RotatorState>) -> Html {
    match rotator.inspected() {
        Some(entry) => {
            let on_close = {
                let rotator = rotator.clone();
                Callback::from(move |_: ()| rotator.dispatch(RotatorAction::ClearSelection))
            };
            html! {
                <DetailModal entry={entry.clone()} action_label={kind.action_label()} {on_close} />
            }
        }
        None => html! {},
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let accounts = use_featured_rotator(CatalogKind::Accounts);
    let tools = use_featured_rotator(CatalogKind::Tools);

    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{"Premium accounts and tools, in one place"}</h1>
                <p>{"Browse the curated lists or wait for the next featured pick."}</p>
            </section>

            <section class="home-section">
                <div class="home-section-header">
                    <h2>{CatalogKind::Accounts.title()}</h2>
                    <Link<Route> to={Route::Accounts} classes="see-all-link">{"See all"}</Link<Route>>
                </div>
                <FeaturedBanner kind={CatalogKind::Accounts} rotator={accounts.clone()} />
            </section>

            <section class="home-section">
                <div class="home-section-header">
                    <h2>{CatalogKind::Tools.title()}</h2>
                    <Link<Route> to={Route::Tools} classes="see-all-link">{"See all"}</Link<Route>>
                </div>
                <FeaturedBanner kind={CatalogKind::Tools} rotator={tools.clone()} />
            </section>

            { render_inspected(CatalogKind::Accounts, &accounts) }
            { render_inspected(CatalogKind::Tools, &tools) }

            <style>
                {r#"
                .home-page {
                    padding: 94px 2rem 4rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    color: #fff;
                }
                .home-hero {
                    text-align: center;
                    padding: 4rem 1rem;
                }
                .home-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .home-hero p {
                    color: #999;
                    font-size: 1.2rem;
                }
                .home-section-header {
                    display: flex;
                    align-items: baseline;
                    justify-content: space-between;
                }
                .see-all-link {
                    color: #7EB2FF;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
