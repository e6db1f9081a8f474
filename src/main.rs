use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod models;
mod storage;
mod components {
    pub mod animated_background;
    pub mod features;
    pub mod hero;
    pub mod testimonials;
    pub mod trip_form;
}
mod pages {
    pub mod home;
    pub mod itinerary;
}

use pages::{
    home::{section_title, Home, NAV_SECTIONS},
    itinerary::ItineraryPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/itinerary")]
    Itinerary,
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
        Route::Itinerary => {
            info!("Rendering Itinerary page");
            html! { <ItineraryPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: String,
    pub on_section: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, on_section } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(y > 80.0);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let book_now = {
        let on_section = on_section.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_section.emit("form".to_string());
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
                <div class="nav-logo">
                    <div class="nav-logo-mark"><span>{"P"}</span></div>
                    <span class="nav-logo-text">{"Planora"}</span>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { NAV_SECTIONS.iter().map(|section| {
                        let onclick = {
                            let on_section = on_section.clone();
                            let menu_open = menu_open.clone();
                            let section = section.to_string();
                            Callback::from(move |_: MouseEvent| {
                                menu_open.set(false);
                                on_section.emit(section.clone());
                            })
                        };
                        html! {
                            <button
                                class={classes!("nav-link", (active == section).then(|| "active"))}
                                {onclick}
                            >
                                {section_title(section)}
                            </button>
                        }
                    }).collect::<Html>() }
                    <button class="nav-book-button" onclick={book_now}>
                        {"Book Now"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        transition: box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to bottom right, #3b82f6, #a855f7, #ec4899);
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.25rem;
                        transform: rotate(12deg);
                        transition: transform 0.3s;
                    }
                    .nav-logo-mark:hover {
                        transform: rotate(0deg);
                    }
                    .nav-logo-text {
                        font-size: 1.875rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #3b82f6, #a855f7, #ec4899);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        font-size: 1rem;
                        font-weight: 500;
                        color: #4b5563;
                        cursor: pointer;
                        padding-bottom: 0.5rem;
                        border-bottom: 2px solid transparent;
                        transition: all 0.3s;
                    }
                    .nav-link:hover {
                        color: #111827;
                    }
                    .nav-link.active {
                        color: #2563eb;
                        border-bottom-color: #6366f1;
                    }
                    .nav-book-button {
                        padding: 0.625rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        font-weight: 500;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #374151;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 5rem;
                            left: 0;
                            right: 0;
                            padding: 1rem;
                            background: #fff;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting Planora");
    yew::Renderer::<App>::new().render();
}
