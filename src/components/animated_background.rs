use yew::prelude::*;

// (top offset, gradient, animation name, seconds)
const WAVES: [(&str, &str, &str, u32); 3] = [
    ("20%", "linear-gradient(45deg, #4F46E5, #06B6D4)", "waveDriftLeft", 20),
    ("40%", "linear-gradient(45deg, #8B5CF6, #3B82F6)", "waveDriftRight", 15),
    ("60%", "linear-gradient(45deg, #EC4899, #8B5CF6)", "waveDriftBack", 25),
];

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    html! {
        <div class="animated-background">
            <div class="wave-layer">
                { WAVES.iter().map(|(top, gradient, animation, seconds)| {
                    html! {
                        <div
                            class="wave"
                            style={format!(
                                "top: {}; background: {}; animation: {} {}s linear infinite;",
                                top, gradient, animation, seconds
                            )}
                        />
                    }
                }).collect::<Html>() }
            </div>
            <style>
                {r#"
                    .animated-background {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .wave-layer {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                    }
                    .wave {
                        position: absolute;
                        width: 200%;
                        height: 50vh;
                        left: -50%;
                        border-radius: 50%;
                    }
                    @keyframes waveDriftLeft {
                        0%, 100% { transform: translate(0, 0) rotate(0deg); }
                        50% { transform: translate(-100px, 50px) rotate(5deg); }
                    }
                    @keyframes waveDriftRight {
                        0%, 100% { transform: translate(0, 0) rotate(0deg); }
                        50% { transform: translate(100px, -50px) rotate(-5deg); }
                    }
                    @keyframes waveDriftBack {
                        0%, 100% { transform: translate(-100px, 50px) rotate(5deg); }
                        50% { transform: translate(0, 0) rotate(0deg); }
                    }
                "#}
            </style>
        </div>
    }
}
