use yew::prelude::*;

use crate::pages::home::scroll_to_section;

#[derive(Clone, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: (&'static str, &'static str),
    pub image: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🗺️",
        title: "Smart Route Planning",
        description: "AI-powered algorithms create optimized routes based on your preferences and travel style.",
        gradient: ("#3b82f6", "#a855f7"),
        image: "https://images.unsplash.com/photo-1501785888041-af3ef285b470?auto=format&fit=crop&w=800&q=80",
    },
    Feature {
        icon: "⏱️",
        title: "Real-Time Updates",
        description: "Stay informed with live updates on weather, events, and local recommendations.",
        gradient: ("#22c55e", "#14b8a6"),
        image: "https://images.unsplash.com/photo-1508672019048-805c876b67e2?auto=format&fit=crop&w=800&q=80",
    },
    Feature {
        icon: "⭐",
        title: "Personalized Experience",
        description: "Get tailored suggestions that match your interests and travel preferences.",
        gradient: ("#a855f7", "#ec4899"),
        image: "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?auto=format&fit=crop&w=800&q=80",
    },
    Feature {
        icon: "📈",
        title: "Smart Recommendations",
        description: "Machine learning algorithms that learn from your choices to suggest better options.",
        gradient: ("#f97316", "#ef4444"),
        image: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?auto=format&fit=crop&w=800&q=80",
    },
    Feature {
        icon: "🛡️",
        title: "Safe Travel Planning",
        description: "Up-to-date safety information and alerts for your destinations.",
        gradient: ("#06b6d4", "#3b82f6"),
        image: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=800&q=80",
    },
    Feature {
        icon: "🌐",
        title: "Local Insights",
        description: "Access to local tips, hidden gems, and authentic experiences.",
        gradient: ("#10b981", "#22c55e"),
        image: "https://images.unsplash.com/photo-1476514525535-07fb3b4ae5f1?auto=format&fit=crop&w=800&q=80",
    },
];

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    index: usize,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let FeatureCardProps { feature, index } = props;
    let (from, to) = feature.gradient;

    html! {
        <div class="feature-card" style={format!("animation-delay: {:.1}s;", *index as f32 * 0.2)}>
            <div class="feature-card-glow" style={format!("background: linear-gradient(to right, {}, {});", from, to)} />
            <div class="feature-card-image">
                <img src={feature.image} alt={feature.title} loading="lazy" />
                <div class="feature-card-heading">
                    <div class="feature-card-icon" style={format!("background: linear-gradient(to right, {}, {});", from, to)}>
                        {feature.icon}
                    </div>
                    <h3>{feature.title}</h3>
                </div>
            </div>
            <div class="feature-card-body">
                <p>{feature.description}</p>
                <button class="feature-learn-more">
                    <span>{"Learn More"}</span>
                    <span class="arrow">{"→"}</span>
                </button>
            </div>
        </div>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let start_planning = Callback::from(|_: MouseEvent| {
        scroll_to_section("form");
    });

    html! {
        <div class="features-section">
            <div class="features-header">
                <h2>{"Intelligent Travel Planning"}</h2>
                <p>{"Experience the future of travel planning with our AI-powered features that make your journey seamless and memorable."}</p>
            </div>

            <div class="features-grid">
                { FEATURES.iter().enumerate().map(|(index, feature)| {
                    html! { <FeatureCard feature={feature.clone()} {index} /> }
                }).collect::<Html>() }
            </div>

            <div class="features-cta">
                <h3>{"Ready to Experience Smart Travel Planning?"}</h3>
                <button class="features-cta-button" onclick={start_planning}>{"Start Planning Now"}</button>
            </div>

            <style>
                {r#"
                    .features-section {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .features-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .features-header h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .features-header p {
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 1rem auto 0;
                        font-size: 1.125rem;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card {
                        position: relative;
                        background: #fff;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                        opacity: 0;
                        animation: featureRise 0.8s ease-out forwards;
                        transition: transform 0.3s;
                    }
                    .feature-card:hover {
                        transform: translateY(-6px);
                    }
                    .feature-card-glow {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .feature-card:hover .feature-card-glow {
                        opacity: 0.1;
                    }
                    .feature-card-image {
                        position: relative;
                        height: 12rem;
                        overflow: hidden;
                    }
                    .feature-card-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transform: scale(1.2);
                        transition: transform 0.4s;
                    }
                    .feature-card:hover .feature-card-image img {
                        transform: scale(1.1);
                    }
                    .feature-card-heading {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1.5rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                        color: #fff;
                    }
                    .feature-card-heading h3 {
                        margin: 0;
                        font-size: 1.25rem;
                    }
                    .feature-card-icon {
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                    }
                    .feature-card-body {
                        position: relative;
                        padding: 1.5rem;
                        color: #4b5563;
                    }
                    .feature-learn-more {
                        display: flex;
                        gap: 0.5rem;
                        border: none;
                        background: none;
                        color: #2563eb;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .feature-learn-more:hover .arrow {
                        transform: translateX(4px);
                    }
                    .features-cta {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    .features-cta h3 {
                        font-size: 1.5rem;
                        color: #1f2937;
                    }
                    .features-cta-button {
                        margin-top: 1.5rem;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        font-weight: 600;
                        cursor: pointer;
                    }
                    @keyframes featureRise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </div>
    }
}
