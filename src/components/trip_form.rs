use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::Route;
use crate::models::{FormAction, TripForm, DURATION_OPTIONS, INTERESTS, RECOMMENDED_LOCATIONS, TRAVELER_OPTIONS};
use crate::storage;

const STATS: [(&str, &str); 4] = [
    ("1000+", "Destinations"),
    ("24/7", "AI Support"),
    ("100%", "Personalized"),
    ("5 min", "Quick Plan"),
];

#[function_component(TripRequestForm)]
pub fn trip_request_form() -> Html {
    let form = use_reducer(TripForm::default);
    let navigator = use_navigator();

    let on_custom_destination = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetCustomDestination(input.value()));
        })
    };

    let on_duration = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetDuration(select.value()));
        })
    };

    let on_travelers = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetTravelers(select.value()));
        })
    };

    // No validation: whatever is filled in goes through.
    let on_submit = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let request = form.to_request();
            info!("Submitting trip request to {:?}", request.destination);
            if let Err(e) = storage::save_request(&request) {
                error!("Could not store trip request: {}", e);
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Itinerary);
            }
        })
    };

    html! {
        <div class="trip-form-wrapper">
            <div class="form-orb orb-blue"></div>
            <div class="form-orb orb-purple"></div>

            <div class="trip-form-content">
                <div class="trip-form-header">
                    <h2>{"Plan Your Dream Trip"}</h2>
                    <p>{"Let AI create your perfect travel itinerary in minutes"}</p>
                </div>

                <div class="trip-form-card">
                    <div class="form-block">
                        <h3>{"Popular Destinations"}</h3>
                        <div class="location-grid">
                            { RECOMMENDED_LOCATIONS.iter().map(|location| {
                                let selected = form.selected_location.as_deref() == Some(location.id);
                                let onclick = {
                                    let form = form.clone();
                                    let id = location.id;
                                    Callback::from(move |_: MouseEvent| {
                                        form.dispatch(FormAction::SelectLocation(id));
                                    })
                                };
                                html! {
                                    <div class={classes!("location-card", selected.then(|| "selected"))} {onclick}>
                                        <img src={location.image} alt={location.name} />
                                        <div class="location-shade">
                                            <div class="location-caption">
                                                <p>{location.name}</p>
                                                <div class="location-tags">
                                                    { location.tags.iter().map(|tag| html! {
                                                        <span>{*tag}</span>
                                                    }).collect::<Html>() }
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>
                    </div>

                    <div class="form-fields">
                        <div class="form-field">
                            <label for="custom-destination">{"Custom Destination"}</label>
                            <div class="field-with-icon">
                                <span class="field-icon">{"📍"}</span>
                                <input
                                    id="custom-destination"
                                    type="text"
                                    placeholder="Or enter your own destination"
                                    value={form.custom_destination.clone()}
                                    oninput={on_custom_destination}
                                />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="duration">{"Duration"}</label>
                            <div class="field-with-icon">
                                <span class="field-icon">{"📅"}</span>
                                <select id="duration" onchange={on_duration}>
                                    <option value="" selected={form.duration.is_empty()}>{"Select duration"}</option>
                                    { DURATION_OPTIONS.iter().map(|(value, label)| html! {
                                        <option value={*value} selected={form.duration == *value}>{*label}</option>
                                    }).collect::<Html>() }
                                </select>
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="travelers">{"Travelers"}</label>
                            <div class="field-with-icon">
                                <span class="field-icon">{"👥"}</span>
                                <select id="travelers" onchange={on_travelers}>
                                    <option value="" selected={form.travelers.is_empty()}>{"Number of travelers"}</option>
                                    { TRAVELER_OPTIONS.iter().map(|(value, label)| html! {
                                        <option value={*value} selected={form.travelers == *value}>{*label}</option>
                                    }).collect::<Html>() }
                                </select>
                            </div>
                        </div>
                    </div>

                    <div class="form-block">
                        <h3>{"Your Interests"}</h3>
                        <div class="interest-grid">
                            { INTERESTS.iter().map(|interest| {
                                let selected = form.is_interest_selected(interest.id);
                                let onclick = {
                                    let form = form.clone();
                                    let id = interest.id;
                                    Callback::from(move |_: MouseEvent| {
                                        form.dispatch(FormAction::ToggleInterest(id));
                                    })
                                };
                                html! {
                                    <button class={classes!("interest-chip", selected.then(|| "selected"))} {onclick}>
                                        <span class="interest-icon">{interest.icon}</span>
                                        <span class="interest-label">{interest.label}</span>
                                        { if selected {
                                            html! { <span class="interest-check">{"✓"}</span> }
                                        } else {
                                            html! {}
                                        } }
                                    </button>
                                }
                            }).collect::<Html>() }
                        </div>
                    </div>

                    <button class="generate-button" onclick={on_submit}>
                        {"Generate AI Travel Plan"}
                    </button>
                </div>

                <div class="stats-grid">
                    { STATS.iter().map(|(number, label)| html! {
                        <div class="stat-item">
                            <div class="stat-number">{*number}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>

            <style>
                {r#"
                    .trip-form-wrapper {
                        position: relative;
                        min-height: 100vh;
                        padding: 5rem 0;
                        overflow: hidden;
                    }
                    .form-orb {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        filter: blur(64px);
                        pointer-events: none;
                    }
                    .orb-blue {
                        top: -5rem;
                        left: -5rem;
                        background: rgba(59, 130, 246, 0.2);
                        animation: orbDrift 20s ease-in-out infinite alternate;
                    }
                    .orb-purple {
                        bottom: -5rem;
                        right: -5rem;
                        background: rgba(168, 85, 247, 0.2);
                        animation: orbDrift 25s ease-in-out infinite alternate-reverse;
                    }
                    @keyframes orbDrift {
                        from { transform: translate(0, 0) scale(1); }
                        to { transform: translate(100px, 50px) scale(1.2); }
                    }
                    .trip-form-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .trip-form-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .trip-form-header h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .trip-form-header p {
                        color: #4b5563;
                        font-size: 1.125rem;
                    }
                    .trip-form-card {
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(16px);
                        border-radius: 1rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                        padding: 2rem;
                    }
                    .form-block {
                        margin-bottom: 2rem;
                    }
                    .form-block h3 {
                        font-size: 1.25rem;
                        color: #1f2937;
                    }
                    .location-grid, .interest-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                    }
                    .location-card {
                        position: relative;
                        height: 10rem;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .location-card:hover {
                        transform: scale(1.05);
                    }
                    .location-card.selected {
                        box-shadow: 0 0 0 2px #3b82f6;
                    }
                    .location-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .location-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.2));
                    }
                    .location-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        color: #fff;
                    }
                    .location-caption p {
                        margin: 0;
                        font-weight: 500;
                    }
                    .location-tags {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 0.5rem;
                    }
                    .location-tags span {
                        font-size: 0.75rem;
                        background: rgba(255, 255, 255, 0.2);
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                    }
                    .form-fields {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .form-field label {
                        display: block;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .field-with-icon {
                        position: relative;
                    }
                    .field-icon {
                        position: absolute;
                        left: 0.75rem;
                        top: 50%;
                        transform: translateY(-50%);
                    }
                    .field-with-icon input, .field-with-icon select {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem 0.75rem 2.5rem;
                        border-radius: 0.5rem;
                        border: 1px solid #e5e7eb;
                        font-size: 1rem;
                        appearance: none;
                    }
                    .interest-chip {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        border: 2px solid #e5e7eb;
                        background: #fff;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .interest-chip:hover {
                        border-color: #bfdbfe;
                    }
                    .interest-chip.selected {
                        border-color: #3b82f6;
                        background: #eff6ff;
                    }
                    .interest-icon {
                        font-size: 1.5rem;
                    }
                    .interest-label {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                    }
                    .interest-check {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                        background: #3b82f6;
                        color: #fff;
                        font-size: 0.625rem;
                        padding: 0.125rem 0.3rem;
                        border-radius: 9999px;
                    }
                    .generate-button {
                        width: 100%;
                        margin-top: 2rem;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        cursor: pointer;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }
                    .stat-item {
                        text-align: center;
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(12px);
                        border-radius: 0.5rem;
                        padding: 1rem;
                    }
                    .stat-number {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #6366f1;
                    }
                    .stat-label {
                        color: #4b5563;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .location-grid, .interest-grid, .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .form-fields {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
