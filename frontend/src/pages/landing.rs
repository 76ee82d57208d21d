use yew::prelude::*;

use crate::bridge;
use crate::components::contact::ContactForm;
use crate::components::counter::Counter;
use crate::components::nav::Nav;
use crate::components::particles::Particles;
use crate::components::reveal::Reveal;
use crate::components::scroll::{BackToTop, ProgressBar};
use crate::hooks::use_scroll_view;

const FEATURES: &[(&str, &str)] = &[
    ("Fast setup", "Go from sign-up to a running workspace in under five minutes."),
    ("Private by default", "Your data stays yours, encrypted at rest and in transit."),
    ("Works offline", "Keep working on the train and sync when you are back."),
];

const STATS: &[(u32, &str, &str)] = &[
    (250, "+", "Teams onboarded"),
    (98, "%", "Customer satisfaction"),
    (1200, "", "Projects shipped"),
    (24, "/7", "Support"),
];

const SERVICES: &[(&str, &str)] = &[
    ("Consulting", "We map your workflow and tell you what to cut."),
    ("Integration", "Connect the tools you already pay for."),
    ("Training", "Hands-on sessions for the whole team."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Mia, product lead", "We replaced three tools with one and nobody misses them."),
    ("Jon, founder", "Setup took an afternoon. The support team is unreal."),
    ("Ada, engineer", "Finally a dashboard that loads before my coffee cools."),
];

fn cards(items: &[(&str, &str)], class: &'static str) -> Html {
    html! {
        <div class="card-grid">
            { for items.iter().map(|(title, body)| html! {
                <Reveal class={classes!("card", class)}>
                    <h3>{*title}</h3>
                    <p>{*body}</p>
                </Reveal>
            }) }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll = use_scroll_view();

    let on_play = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        bridge::play_video();
    });

    html! {
        <div class="landing-page">
            <ProgressBar progress={scroll.progress} />
            <Nav active={scroll.active_section.clone()} />

            <section id="home" class="hero">
                <Particles />
                <div class="hero-content">
                    <h1>{"Less busywork, more Brightside."}</h1>
                    <p>{"One calm place for your team's plans, files and conversations."}</p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta">{"Get in touch"}</a>
                        <button class="play-button" onclick={on_play}>{"▶ Watch the tour"}</button>
                    </div>
                </div>
            </section>

            <section id="features">
                <h2>{"Features"}</h2>
                { cards(FEATURES, "feature-card") }
            </section>

            <section id="stats">
                <h2>{"By the numbers"}</h2>
                <div class="stats-grid">
                    { for STATS.iter().map(|(target, suffix, label)| html! {
                        <Counter target={*target} suffix={*suffix} label={*label} />
                    }) }
                </div>
            </section>

            <section id="services">
                <h2>{"Services"}</h2>
                { cards(SERVICES, "service-card") }
            </section>

            <section id="testimonials">
                <h2>{"What people say"}</h2>
                { cards(TESTIMONIALS, "testimonial-card") }
            </section>

            <section id="contact">
                <h2>{"Contact us"}</h2>
                <Reveal class={classes!("contact-card")}>
                    <ContactForm />
                </Reveal>
            </section>

            <footer class="footer">
                <p>{"© Brightside. All rights reserved."}</p>
            </footer>

            <BackToTop visible={scroll.back_to_top_visible} />

            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; }
                    .landing-page { background: #ffffff; color: #1f2937; transition: background 0.3s, color 0.3s; }
                    html.dark .landing-page { background: #111827; color: #f3f4f6; }
                    .hidden { display: none !important; }

                    .top-nav { position: sticky; top: 0; z-index: 40; backdrop-filter: blur(8px); background: rgba(255, 255, 255, 0.8); }
                    html.dark .top-nav { background: rgba(17, 24, 39, 0.8); }
                    .nav-content { display: flex; align-items: center; justify-content: space-between; max-width: 1100px; margin: 0 auto; padding: 1rem; }
                    .nav-logo { font-weight: 700; text-decoration: none; color: inherit; }
                    .nav-links { display: flex; gap: 1.25rem; align-items: center; }
                    .nav-link, .mobile-nav-link { text-decoration: none; }
                    .inactive { color: #374151; }
                    html.dark .inactive { color: #d1d5db; }
                    .active { color: #4f46e5; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: currentColor; }
                    .mobile-menu { display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; }
                    .theme-toggle { background: none; border: 1px solid currentColor; border-radius: 9999px; padding: 0.25rem 0.6rem; cursor: pointer; color: inherit; }

                    section { padding: 6rem 1.5rem; max-width: 1100px; margin: 0 auto; }
                    .hero { position: relative; overflow: hidden; min-height: 70vh; display: flex; align-items: center; }
                    .hero-content { position: relative; z-index: 1; }
                    .hero-cta-group { display: flex; gap: 1rem; }
                    .hero-cta, .play-button { padding: 0.75rem 1.5rem; border-radius: 0.5rem; border: none; background: #4f46e5; color: white; text-decoration: none; cursor: pointer; }

                    .particles { position: absolute; inset: 0; pointer-events: none; }
                    .particle { position: absolute; border-radius: 50%; background: rgba(99, 102, 241, 0.35); animation-name: float; animation-iteration-count: infinite; animation-timing-function: ease-in-out; }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); opacity: 0.6; }
                        50% { transform: translateY(-30px); opacity: 1; }
                    }

                    .card-grid, .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                    .card, .contact-card { opacity: 0; padding: 1.5rem; border-radius: 1rem; box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08); }
                    .animate-fadeInUp { animation: fadeInUp 0.6s ease-out forwards; }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .stat { text-align: center; }
                    .counter { font-size: 2.5rem; font-weight: 800; }

                    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
                    .contact-form input, .contact-form textarea { padding: 0.75rem; border-radius: 0.5rem; border: 1px solid #d1d5db; font: inherit; }
                    .loader { width: 24px; height: 24px; border: 3px solid #c7d2fe; border-top-color: #4f46e5; border-radius: 50%; animation: spin 0.8s linear infinite; }
                    @keyframes spin { to { transform: rotate(360deg); } }

                    .footer { text-align: center; padding: 2rem; opacity: 0.7; }

                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: block; }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu { display: none; }
                    }
                "#}
            </style>
        </div>
    }
}
