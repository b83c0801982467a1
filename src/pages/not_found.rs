use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"There is nothing here. The catalog is a click away."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">{"Back to home"}</Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    padding: 160px 2rem;
                    text-align: center;
                    color: #fff;
                }
                .not-found-page p {
                    color: #999;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
