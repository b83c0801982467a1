use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod anilist;
mod config;
mod data;
mod fetch_state;
mod hooks;
mod links;
mod markup;
mod rotator;
mod timer;
mod models {
    pub mod catalog;
}
mod components {
    pub mod detail_modal;
    pub mod entry_card;
    pub mod featured_banner;
    pub mod loading;
}
mod pages {
    pub mod anime;
    pub mod catalog;
    pub mod home;
    pub mod not_found;
}

use models::catalog::CatalogKind;
use pages::{
    anime::AnimePage,
    catalog::CatalogPage,
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/accounts")]
    Accounts,
    #[at("/tools")]
    Tools,
    #[at("/anime/:id")]
    Anime { id: u32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Accounts => {
            info!("Rendering Accounts page");
            // Keyed so switching tables remounts the page and its rotator
            html! { <CatalogPage key="accounts" kind={CatalogKind::Accounts} /> }
        },
        Route::Tools => {
            info!("Rendering Tools page");
            html! { <CatalogPage key="tools" kind={CatalogKind::Tools} /> }
        },
        Route::Anime { id } => {
            info!("Rendering Anime page for {}", id);
            html! { <AnimePage key={id.to_string()} {id} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            is_scrolled.set(scroll_y > 80.0);
                        }
                    }
                });

                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not watch scrolling: {:?}", e);
                }

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                })
            } else {
                Box::new(|| ())
            };

            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"showcase"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Accounts} classes="nav-link">
                            {"Accounts"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Tools} classes="nav-link">
                            {"Tools"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
