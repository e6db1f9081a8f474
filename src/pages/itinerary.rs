use yew::prelude::*;
use yew_hooks::prelude::*;
use log::debug;

use crate::config;
use crate::models::TravelRequest;
use crate::storage;

/// The same three blocks are shown for every day.
pub const DAY_SCHEDULE: [(&str, &str); 3] = [
    ("Morning", "Explore local attractions and cultural sites"),
    ("Afternoon", "Experience local cuisine and shopping"),
    ("Evening", "Enjoy sunset views and dinner at recommended restaurants"),
];

/// Days to render for a stored duration. Anything that isn't a whole
/// number of days renders as zero days; huge values are capped.
pub fn day_count(duration: &str) -> usize {
    duration
        .trim()
        .parse::<usize>()
        .map(|days| days.min(config::MAX_TRIP_DAYS))
        .unwrap_or(0)
}

pub fn day_labels(request: &TravelRequest) -> Vec<String> {
    (1..=day_count(&request.duration))
        .map(|day| format!("Day {}", day))
        .collect()
}

#[derive(Clone, PartialEq, Debug)]
pub enum ItineraryView {
    Loading,
    Missing,
    Ready(TravelRequest),
}

impl ItineraryView {
    pub fn resolve(loading: bool, request: Option<&TravelRequest>) -> Self {
        match (loading, request) {
            (true, _) => ItineraryView::Loading,
            (false, None) => ItineraryView::Missing,
            (false, Some(request)) => ItineraryView::Ready(request.clone()),
        }
    }
}

#[function_component(ItineraryPage)]
pub fn itinerary_page() -> Html {
    // Read exactly once, on first render.
    let request = use_state(storage::load_request_or_none);
    let loading = use_state(|| true);

    // Cancelled on unmount.
    {
        let loading = loading.clone();
        use_timeout(
            move || {
                debug!("Itinerary processing delay elapsed");
                loading.set(false);
            },
            config::PROCESSING_DELAY_MS,
        );
    }

    let content = match ItineraryView::resolve(*loading, (*request).as_ref()) {
        ItineraryView::Loading => html! {
            <div class="itinerary-center">
                <div class="itinerary-status">
                    <div class="itinerary-spinner"></div>
                    <h2>{"Creating Your Perfect Itinerary"}</h2>
                    <p>{"Our AI is crafting a personalized travel plan..."}</p>
                </div>
            </div>
        },
        ItineraryView::Missing => html! {
            <div class="itinerary-center">
                <div class="itinerary-status">
                    <h2>{"No itinerary data found"}</h2>
                    <p>{"Please go back and fill out the travel form."}</p>
                </div>
            </div>
        },
        ItineraryView::Ready(request) => html! {
            <div class="itinerary-page">
                <div class="itinerary-card">
                    <div class="itinerary-heading">
                        <h1>{"Your Personalized Travel Itinerary"}</h1>
                        <p>{"AI-crafted travel plan based on your preferences"}</p>
                    </div>

                    <div class="itinerary-summary">
                        <div class="summary-item">
                            <span class="summary-icon">{"📍"}</span>
                            <div>
                                <p class="summary-label">{"Destination"}</p>
                                <p class="summary-value">{&request.destination}</p>
                            </div>
                        </div>
                        <div class="summary-item">
                            <span class="summary-icon">{"👥"}</span>
                            <div>
                                <p class="summary-label">{"Travelers"}</p>
                                <p class="summary-value">{&request.travelers}</p>
                            </div>
                        </div>
                        <div class="summary-item">
                            <span class="summary-icon">{"📅"}</span>
                            <div>
                                <p class="summary-label">{"Duration"}</p>
                                <p class="summary-value">{format!("{} Days", request.duration)}</p>
                            </div>
                        </div>
                        <div class="summary-item">
                            <span class="summary-icon">{"❤"}</span>
                            <div>
                                <p class="summary-label">{"Interests"}</p>
                                <div class="interest-tags">
                                    { request.interests.iter().map(|interest| html! {
                                        <span class="interest-tag">{interest}</span>
                                    }).collect::<Html>() }
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="daily-schedule">
                        <h2>{"Daily Schedule"}</h2>
                        { day_labels(&request).into_iter().enumerate().map(|(index, label)| html! {
                            <div class="day-card" style={format!("animation-delay: {:.1}s;", index as f32 * 0.1)}>
                                <h3>{label}</h3>
                                { DAY_SCHEDULE.iter().map(|(slot, activity)| html! {
                                    <div class="day-slot">
                                        <div class="slot-badge">{*slot}</div>
                                        <p>{*activity}</p>
                                    </div>
                                }).collect::<Html>() }
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>
        },
    };

    html! {
        <div class="itinerary-root">
            { content }
            <style>
                {r#"
                    .itinerary-root {
                        min-height: 100vh;
                        background: linear-gradient(to bottom right, #eff6ff, #faf5ff);
                    }
                    .itinerary-center {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .itinerary-status {
                        text-align: center;
                        color: #374151;
                    }
                    .itinerary-status p {
                        color: #6b7280;
                        margin-top: 0.5rem;
                    }
                    .itinerary-spinner {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border: 4px solid #3b82f6;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: itinerarySpin 2s linear infinite;
                    }
                    @keyframes itinerarySpin {
                        0% { transform: scale(1) rotate(0deg); }
                        50% { transform: scale(1.2) rotate(180deg); }
                        100% { transform: scale(1) rotate(360deg); }
                    }
                    .itinerary-page {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem 1rem;
                    }
                    .itinerary-card {
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                        padding: 2rem;
                        animation: dayIn 0.5s ease-out;
                    }
                    .itinerary-heading {
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .itinerary-heading h1 {
                        font-size: 1.875rem;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .itinerary-heading p {
                        color: #4b5563;
                    }
                    .itinerary-summary {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem 2rem;
                        margin-bottom: 2rem;
                    }
                    .summary-item {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .summary-icon {
                        font-size: 1.25rem;
                    }
                    .summary-label {
                        margin: 0;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .summary-value {
                        margin: 0;
                        font-weight: 600;
                    }
                    .interest-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 0.25rem;
                    }
                    .interest-tag {
                        padding: 0.25rem 0.75rem;
                        background: #eff6ff;
                        color: #2563eb;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                    }
                    .daily-schedule h2 {
                        font-size: 1.5rem;
                        color: #1f2937;
                    }
                    .day-card {
                        background: #f9fafb;
                        border-radius: 0.5rem;
                        padding: 1.5rem;
                        margin-bottom: 1.5rem;
                        opacity: 0;
                        animation: dayIn 0.5s ease-out forwards;
                    }
                    .day-card h3 {
                        font-size: 1.25rem;
                        color: #2563eb;
                        margin: 0 0 1rem;
                    }
                    .day-slot {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .day-slot p {
                        margin: 0;
                        color: #374151;
                    }
                    .slot-badge {
                        background: #fff;
                        border-radius: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    @keyframes dayIn {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bali() -> TravelRequest {
        TravelRequest {
            destination: "Bali, Indonesia".to_string(),
            duration: "5".to_string(),
            travelers: "2".to_string(),
            interests: vec!["Adventure".to_string(), "Food & Dining".to_string()],
        }
    }

    #[test]
    fn five_day_request_renders_five_labeled_days() {
        assert_eq!(
            day_labels(&bali()),
            vec!["Day 1", "Day 2", "Day 3", "Day 4", "Day 5"]
        );
    }

    #[test]
    fn unparseable_duration_renders_no_days() {
        assert_eq!(day_count(""), 0);
        assert_eq!(day_count("five"), 0);
        assert_eq!(day_count("-3"), 0);
        assert_eq!(day_count(" 7 "), 7);
    }

    #[test]
    fn absurd_duration_is_capped() {
        assert_eq!(day_count("100000000000"), config::MAX_TRIP_DAYS);

        let request = TravelRequest { duration: "100000000000".to_string(), ..bali() };
        assert_eq!(day_labels(&request).len(), config::MAX_TRIP_DAYS);
    }

    #[test]
    fn loading_wins_until_delay_elapses() {
        let request = bali();
        assert_eq!(ItineraryView::resolve(true, Some(&request)), ItineraryView::Loading);
        assert_eq!(ItineraryView::resolve(true, None), ItineraryView::Loading);
    }

    #[test]
    fn missing_request_has_no_days() {
        assert_eq!(ItineraryView::resolve(false, None), ItineraryView::Missing);
    }

    #[test]
    fn stored_request_is_shown_after_delay() {
        let request = bali();
        match ItineraryView::resolve(false, Some(&request)) {
            ItineraryView::Ready(shown) => assert_eq!(day_labels(&shown).len(), 5),
            other => panic!("expected ready view, got {:?}", other),
        }
    }

    #[test]
    fn every_day_gets_the_same_three_slots() {
        let slots: Vec<&str> = DAY_SCHEDULE.iter().map(|(slot, _)| *slot).collect();
        assert_eq!(slots, vec!["Morning", "Afternoon", "Evening"]);
    }
}
