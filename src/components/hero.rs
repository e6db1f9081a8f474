use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlMediaElement;

use crate::config;
use crate::pages::home::scroll_to_section;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Media {
    Image { src: &'static str, alt: &'static str },
    Video { src: &'static str, poster: &'static str },
}

pub const BACKGROUNDS: [Media; 4] = [
    Media::Image {
        src: "https://images.pexels.com/photos/1624438/pexels-photo-1624438.jpeg",
        alt: "Mountain landscape",
    },
    Media::Video {
        src: "https://player.vimeo.com/external/434045526.sd.mp4?s=c27eecc69a27dbc4ff2b87d38afc35f1a9e7c02e&profile_id=164&oauth2_token_id=57447761",
        poster: "https://images.pexels.com/photos/1624438/pexels-photo-1624438.jpeg",
    },
    Media::Image {
        src: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
        alt: "Mountain peaks",
    },
    Media::Video {
        src: "https://player.vimeo.com/external/517090081.sd.mp4?s=60b9db30e3bf0e756a9bfcb7fee7b8b92e546b38&profile_id=164&oauth2_token_id=57447761",
        poster: "https://images.pexels.com/photos/2356045/pexels-photo-2356045.jpeg",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Rotation state for the hero backgrounds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Carousel {
    pub current: usize,
    pub playing: bool,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, playing: true, len }
    }

    pub fn advance(self) -> Self {
        Self { current: next_index(self.current, self.len), ..self }
    }

    /// Out of range indexes leave the carousel untouched.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { current: index, ..self }
        } else {
            self
        }
    }

    pub fn toggle_playing(self) -> Self {
        Self { playing: !self.playing, ..self }
    }

    /// The state the rotation timer should move to, if it should run at all.
    pub fn pending_rotation(self) -> Option<Self> {
        self.playing.then(|| self.advance())
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let carousel = use_state(|| Carousel::new(BACKGROUNDS.len()));
    let video_ref = use_node_ref();

    // Re-armed on every index or play state change, so a manual pick
    // gets the full interval before the next rotation.
    {
        let state = *carousel;
        let rotate = carousel.clone();
        use_effect_with_deps(
            move |state: &Carousel| {
                let timeout = state.pending_rotation().map(|next| {
                    Timeout::new(config::HERO_ROTATE_MS, move || {
                        debug!("Hero background -> {}", next.current);
                        rotate.set(next);
                    })
                });
                move || drop(timeout)
            },
            state,
        );
    }

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |(_, playing): &(usize, bool)| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    video.set_muted(!*playing);
                    if *playing {
                        let _ = video.play();
                    } else {
                        let _ = video.pause();
                    }
                }
                || ()
            },
            (carousel.current, carousel.playing),
        );
    }

    let toggle_playing = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.set(carousel.toggle_playing());
        })
    };

    let create_itinerary = Callback::from(|_: MouseEvent| {
        scroll_to_section("form");
    });

    let background = match BACKGROUNDS[carousel.current] {
        Media::Video { src, poster } => html! {
            <video
                ref={video_ref}
                class="hero-media"
                autoplay={true}
                loop={true}
                muted={!carousel.playing}
                playsinline={true}
                poster={poster}
            >
                <source src={src} type="video/mp4" />
            </video>
        },
        Media::Image { src, alt } => html! {
            <img class="hero-media" src={src} alt={alt} />
        },
    };

    html! {
        <div class="hero-section">
            <div class="hero-background">
                <div class="hero-slide" key={carousel.current}>
                    { background }
                </div>
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-controls">
                <button class="hero-play-toggle" onclick={toggle_playing}
                    aria-label={if carousel.playing { "Pause background" } else { "Play background" }}>
                    { if carousel.playing { "❚❚" } else { "▶" } }
                </button>
                <div class="hero-dots">
                    { (0..BACKGROUNDS.len()).map(|index| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| {
                                carousel.set(carousel.select(index));
                            })
                        };
                        html! {
                            <button
                                class={classes!("hero-dot", (index == carousel.current).then(|| "active"))}
                                {onclick}
                            />
                        }
                    }).collect::<Html>() }
                </div>
            </div>

            <div class="hero-topbar">
                <div class="hero-brand">
                    <img src="https://images.pexels.com/photos/1752372/pexels-photo-1752372.jpeg" alt="Logo" />
                    <span>{"Planora"}</span>
                </div>
                <div class="hero-topbar-links">
                    <a href="#vision">{"Our Vision"}</a>
                    <button class="hero-app-button">{"GET THE APP"}</button>
                </div>
            </div>

            <div class="hero-content">
                <h2 class="hero-kicker">{"DISCOVER YOUR"}</h2>
                <h1 class="hero-title">{"JOURNEY"}</h1>
                <div class="hero-tagline">
                    <p>
                        <span class="hero-highlight">{"AI-Powered Travel Planning"}</span>
                        {" that creates personalized itineraries"}
                    </p>
                    <p>
                        {"tailored to your preferences and dreams. "}
                        <a href="#learn-more">{"Start Planning Now"}</a>
                    </p>
                </div>
                <button class="hero-cta" onclick={create_itinerary}>
                    <span>{"Create Your Itinerary"}</span>
                    <span class="hero-cta-arrow">{"→"}</span>
                </button>
            </div>

            <div class="hero-bottom">
                <p>{"Let AI craft your perfect adventure"}</p>
                <div class="scroll-hint"><div></div></div>
            </div>

            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        color: #fff;
                    }
                    .hero-background, .hero-slide, .hero-overlay {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-slide {
                        animation: heroFadeIn 1.5s ease-out;
                    }
                    .hero-media {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        background: rgba(0, 0, 0, 0.4);
                    }
                    @keyframes heroFadeIn {
                        from { opacity: 0; transform: scale(1.1); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .hero-controls {
                        position: absolute;
                        bottom: 1rem;
                        right: 1rem;
                        z-index: 20;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .hero-play-toggle {
                        padding: 0.5rem 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        cursor: pointer;
                    }
                    .hero-dots {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .hero-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.5);
                        transition: all 0.3s;
                        cursor: pointer;
                    }
                    .hero-dot.active {
                        width: 2rem;
                        background: #fff;
                    }
                    .hero-topbar {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem;
                    }
                    .hero-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .hero-brand img {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.375rem;
                        object-fit: cover;
                    }
                    .hero-topbar-links {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .hero-topbar-links a {
                        color: #fff;
                        text-decoration: none;
                    }
                    .hero-app-button {
                        background: #fff;
                        color: #2563eb;
                        border: none;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-weight: 500;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        min-height: 80vh;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .hero-kicker {
                        font-size: 2rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }
                    .hero-title {
                        font-size: clamp(6rem, 18vw, 12rem);
                        font-weight: 700;
                        line-height: 1;
                        margin: 0;
                        background: linear-gradient(to right, #60a5fa, #a855f7, #ec4899);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-tagline {
                        max-width: 48rem;
                        margin-top: 2rem;
                        font-size: 1.5rem;
                        color: #e5e7eb;
                    }
                    .hero-tagline a {
                        color: #60a5fa;
                    }
                    .hero-highlight {
                        font-weight: 600;
                    }
                    .hero-cta {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        cursor: pointer;
                        transition: transform 0.3s;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-bottom {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 10;
                        padding: 2rem;
                        text-align: center;
                    }
                    .scroll-hint {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid #fff;
                        border-radius: 9999px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        animation: scrollBounce 1.5s ease-in-out infinite alternate;
                    }
                    .scroll-hint div {
                        width: 0.25rem;
                        height: 0.5rem;
                        background: #fff;
                        border-radius: 9999px;
                    }
                    @keyframes scrollBounce {
                        from { transform: translateY(0); }
                        to { transform: translateY(-10px); }
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
    fn untouched_carousel_cycles_through_every_background() {
        let mut carousel = Carousel::new(BACKGROUNDS.len());
        let mut seen = vec![carousel.current];
        for _ in 0..4 {
            carousel = carousel.advance();
            seen.push(carousel.current);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn select_jumps_and_rotation_continues_from_there() {
        let carousel = Carousel::new(4).select(2);
        assert_eq!(carousel.current, 2);
        assert_eq!(carousel.advance().current, 3);
        assert_eq!(carousel.advance().advance().current, 0);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let carousel = Carousel::new(4).select(1).select(9);
        assert_eq!(carousel.current, 1);
    }

    #[test]
    fn toggle_playing_keeps_index() {
        let carousel = Carousel::new(4).select(3).toggle_playing();
        assert!(!carousel.playing);
        assert_eq!(carousel.current, 3);
        assert!(carousel.toggle_playing().playing);
    }

    #[test]
    fn rotation_is_armed_only_while_playing() {
        let carousel = Carousel::new(4).select(3);
        assert_eq!(carousel.pending_rotation().map(|next| next.current), Some(0));

        let paused = carousel.toggle_playing();
        assert_eq!(paused.pending_rotation(), None);

        let resumed = paused.toggle_playing();
        assert_eq!(resumed.pending_rotation().map(|next| next.current), Some(0));
    }

    #[test]
    fn next_index_handles_empty_list() {
        assert_eq!(next_index(5, 0), 0);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn backgrounds_alternate_image_and_video() {
        let kinds: Vec<bool> = BACKGROUNDS
            .iter()
            .map(|media| matches!(media, Media::Video { .. }))
            .collect();
        assert_eq!(kinds, vec![false, true, false, true]);
    }
}
