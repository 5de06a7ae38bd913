use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero_carousel::HeroCarousel;
use crate::components::scroll_reveal::ScrollReveal;
use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    (
        "1099-DA reconciliation",
        "Brokers now report your crypto sales to the IRS. We match every form line against your real cost basis before the IRS does.",
    ),
    (
        "DeFi and on-chain cleanup",
        "Bridges, LP positions, airdrops and wrapped tokens traced wallet by wallet until the numbers tie out.",
    ),
    (
        "Prior-year fixes",
        "Unfiled or misfiled years amended with the documentation an examiner expects to see.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page { background: #000; color: #fff; min-height: 100vh; }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 8rem 1.5rem 4rem;
                    }
                    .hero h1 { font-size: 4.5rem; font-weight: 700; line-height: 1.1; margin-bottom: 1.5rem; }
                    .hero-subtitle { font-size: 1.25rem; color: #a1a1aa; max-width: 40rem; margin-bottom: 2.5rem; }
                    .hero-cta {
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        border: none;
                        background: #fff;
                        color: #000;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .hero-cta:hover { background: #f97316; color: #fff; }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem 8rem;
                    }
                    .feature-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .feature-card h3 { font-size: 1.25rem; margin-bottom: 0.75rem; }
                    .feature-card p { color: #a1a1aa; line-height: 1.6; }
                    .animate-on-scroll {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                        will-change: opacity, transform;
                    }
                    .animate-on-scroll.animate { opacity: 1; transform: translateY(0); }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.75rem; }
                        .feature-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <ScrollReveal />
            <header class="hero">
                <h1>
                    {"Stop the IRS from rewriting"}<br/>
                    <HeroCarousel />
                </h1>
                <p class="hero-subtitle">
                    {"Crypto tax specialists who reconcile your 1099-DA against what actually happened on-chain."}
                </p>
                <Link<Route> to={Route::Apply}>
                    <button class="hero-cta">{"Get My Free Audit"}</button>
                </Link<Route>>
            </header>
            <section class="feature-grid">
                { for FEATURES.iter().map(|(title, body)| html! {
                    <div class="feature-card animate-on-scroll">
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }) }
            </section>
        </div>
    }
}
