use yew::prelude::*;

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub text: &'static str,
    pub rating: usize,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Travel Enthusiast",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-4.0.3&auto=format&fit=crop&w=1974&q=80",
        text: "This AI travel planner is a game-changer! It created the perfect itinerary for my trip to Japan, including hidden gems I would have never found on my own.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Digital Nomad",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1974&q=80",
        text: "As someone who travels frequently, this tool has saved me countless hours of planning. The AI suggestions are spot-on and always consider my preferences.",
        rating: 5,
    },
    Testimonial {
        name: "Emma Rodriguez",
        role: "Family Traveler",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80",
        text: "Planning family trips used to be stressful, but this AI planner made it so easy! It created a perfect balance of activities for both kids and adults.",
        rating: 5,
    },
];

pub fn stars(rating: usize) -> String {
    "★".repeat(rating)
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section class="testimonials-section">
            <div class="testimonials-inner">
                <div class="testimonials-header">
                    <h2><span>{"What Our Users Say"}</span></h2>
                    <p>{"Don't just take our word for it - hear from our satisfied travelers"}</p>
                </div>

                <div class="testimonials-grid">
                    { TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                        html! {
                            <div class="testimonial-card" style={format!("animation-delay: {:.1}s;", index as f32 * 0.2)}>
                                <div class="testimonial-author">
                                    <img src={testimonial.image} alt={testimonial.name} />
                                    <div>
                                        <h3>{testimonial.name}</h3>
                                        <p>{testimonial.role}</p>
                                    </div>
                                </div>
                                <p class="testimonial-text">{testimonial.text}</p>
                                <div class="testimonial-stars">{stars(testimonial.rating)}</div>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>

                <div class="floating-bubble bubble-blue"></div>
                <div class="floating-bubble bubble-purple"></div>
            </div>

            <style>
                {r#"
                    .testimonials-inner {
                        position: relative;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .testimonials-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .testimonials-header h2 span {
                        font-size: 2.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .testimonials-header p {
                        color: #4b5563;
                        font-size: 1.125rem;
                    }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .testimonial-card {
                        background: #fff;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                        opacity: 0;
                        animation: testimonialRise 0.5s ease-out forwards;
                        transition: transform 0.3s;
                    }
                    .testimonial-card:hover {
                        transform: translateY(-10px);
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-author img {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        object-fit: cover;
                        margin-right: 1rem;
                    }
                    .testimonial-author h3 {
                        margin: 0;
                        font-size: 1.125rem;
                    }
                    .testimonial-author p {
                        margin: 0;
                        color: #4b5563;
                    }
                    .testimonial-text {
                        color: #374151;
                    }
                    .testimonial-stars {
                        color: #facc15;
                        font-size: 1.25rem;
                    }
                    .floating-bubble {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.2;
                        pointer-events: none;
                    }
                    .bubble-blue {
                        top: 25%;
                        left: 2.5rem;
                        width: 4rem;
                        height: 4rem;
                        background: #dbeafe;
                        animation: bubbleFloat 4s ease-in-out infinite alternate;
                    }
                    .bubble-purple {
                        bottom: 25%;
                        right: 2.5rem;
                        width: 6rem;
                        height: 6rem;
                        background: #f3e8ff;
                        animation: bubbleFloat 3s ease-in-out infinite alternate-reverse;
                    }
                    @keyframes bubbleFloat {
                        from { transform: translateY(0); }
                        to { transform: translateY(20px); }
                    }
                    @keyframes testimonialRise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_star_per_rating_point() {
        assert_eq!(stars(5).chars().count(), 5);
        assert!(stars(0).is_empty());
        assert!(TESTIMONIALS.iter().all(|t| stars(t.rating).chars().count() == t.rating));
    }
}
