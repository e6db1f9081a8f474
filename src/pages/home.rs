use yew::prelude::*;
use gloo_timers::callback::Timeout;
use chrono::{Datelike, Local};
use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::Nav;
use crate::components::{
    animated_background::AnimatedBackground,
    features::FeaturesSection,
    hero::HeroSection,
    testimonials::TestimonialsSection,
    trip_form::TripRequestForm,
};

/// Anchors linked from the nav bar and footer quick links.
pub const NAV_SECTIONS: [&str; 4] = ["home", "features", "testimonials", "contact"];

pub fn section_title(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Smooth-scrolls to the element with `id`. Returns false if it isn't on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id));

    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            debug!("Scrolled to #{}", id);
            true
        }
        None => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_section: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"Contact Us"}</h3>
                    <div class="footer-contact">
                        <div>{"✉ contact@travelai.com"}</div>
                        <div>{"☎ +1 (555) 123-4567"}</div>
                        <div>{"📍 123 Travel Street, Adventure City"}</div>
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul class="footer-links">
                        { NAV_SECTIONS.iter().map(|section| {
                            let onclick = {
                                let on_section = props.on_section.clone();
                                let section = section.to_string();
                                Callback::from(move |_: MouseEvent| on_section.emit(section.clone()))
                            };
                            html! {
                                <li><button {onclick}>{section_title(section)}</button></li>
                            }
                        }).collect::<Html>() }
                    </ul>
                </div>

                <div>
                    <h3>{"Follow Us"}</h3>
                    <div class="footer-social">
                        <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                        <a href="https://twitter.com" target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                        <a href="https://facebook.com" target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                    </div>
                </div>

                <div>
                    <h3>{"Newsletter"}</h3>
                    <p class="footer-muted">{"Subscribe to our newsletter for travel tips and exclusive offers."}</p>
                    <div class="newsletter">
                        <input type="email" placeholder="Your email" />
                        <button>{"Subscribe"}</button>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} Planora. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let active_section = use_state(|| "home".to_string());

    let on_section = {
        let active_section = active_section.clone();
        Callback::from(move |id: String| {
            if scroll_to_section(&id) {
                active_section.set(id);
            }
        })
    };

    // Arriving from another route via "/#form" and friends.
    {
        let on_section = on_section.clone();
        use_effect_with_deps(
            move |_| {
                let hash = window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();
                let target = hash.trim_start_matches('#').to_string();
                // Wait a tick so the sections are in the DOM.
                let timeout = (!target.is_empty()).then(|| {
                    Timeout::new(100, move || on_section.emit(target))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="main-layout">
            <AnimatedBackground />
            <Nav active={(*active_section).clone()} on_section={on_section.clone()} />

            <main class="main-content">
                <section id="home">
                    <HeroSection />
                </section>

                <section id="features" class="layout-section">
                    <div class="section-veil veil-white"></div>
                    <div class="section-body">
                        <FeaturesSection />
                    </div>
                </section>

                <section id="testimonials" class="layout-section">
                    <div class="section-veil veil-gray"></div>
                    <div class="section-body">
                        <TestimonialsSection />
                    </div>
                </section>

                <section id="form" class="layout-section">
                    <div class="section-veil veil-strong"></div>
                    <div class="section-body">
                        <TripRequestForm />
                    </div>
                </section>
            </main>

            <Footer {on_section} />

            <style>
                {r#"
                    .main-layout {
                        position: relative;
                        min-height: 100vh;
                        background: rgba(249, 250, 251, 0.9);
                    }
                    .main-content {
                        position: relative;
                        z-index: 10;
                    }
                    .layout-section {
                        position: relative;
                        padding: 5rem 0;
                    }
                    .section-veil {
                        position: absolute;
                        inset: 0;
                        backdrop-filter: blur(4px);
                    }
                    .veil-white { background: rgba(255, 255, 255, 0.8); }
                    .veil-gray { background: rgba(249, 250, 251, 0.8); }
                    .veil-strong { background: rgba(255, 255, 255, 0.9); backdrop-filter: blur(12px); }
                    .section-body {
                        position: relative;
                        z-index: 10;
                    }
                    .site-footer {
                        position: relative;
                        z-index: 10;
                        background: rgba(17, 24, 39, 0.95);
                        color: #fff;
                        padding: 3rem 2rem;
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .footer-grid h3 {
                        font-size: 1.125rem;
                        margin-bottom: 1rem;
                    }
                    .footer-contact div {
                        margin-bottom: 0.5rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-links button {
                        background: none;
                        border: none;
                        color: #d1d5db;
                        cursor: pointer;
                        padding: 0.25rem 0;
                    }
                    .footer-links button:hover, .footer-social a:hover {
                        color: #fff;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        color: #d1d5db;
                        text-decoration: none;
                    }
                    .footer-muted {
                        color: #d1d5db;
                    }
                    .newsletter {
                        display: flex;
                    }
                    .newsletter input {
                        flex: 1;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.5rem 0 0 0.5rem;
                    }
                    .newsletter button {
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        padding: 0.5rem 1rem;
                        border-radius: 0 0.5rem 0.5rem 0;
                        cursor: pointer;
                    }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        text-align: center;
                        color: #9ca3af;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_titles_are_capitalised() {
        let titles: Vec<String> = NAV_SECTIONS.iter().map(|s| section_title(s)).collect();
        assert_eq!(titles, vec!["Home", "Features", "Testimonials", "Contact"]);
        assert_eq!(section_title(""), "");
    }
}
