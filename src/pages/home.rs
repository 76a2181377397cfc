use std::rc::Rc;

use chrono::Datelike;
use log::{debug, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::rotating_text::RotatingText;
use crate::components::site_header::LogoChip;
use crate::components::stat_card::StatCard;
use crate::config::VIEWPORT_THRESHOLD;
use crate::content::{Service, SiteContent};
use crate::effects::viewport::ViewportHandle;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="service-card">
            <div class="service-icon">{&service.icon}</div>
            <h3>{&service.title}</h3>
            <p>{&service.description}</p>
        </div>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    // No backend yet; keep the browser from reloading the page.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, nothing is sent in this version");
    });

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" name="name" placeholder="Your name" required=true />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" name="email" placeholder="your@email.com" required=true />
                </div>
            </div>

            <div class="form-group">
                <label for="subject">{"Subject"}</label>
                <input type="text" id="subject" name="subject" placeholder="How can we help?" required=true />
            </div>

            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="5" placeholder="Tell us about your project..." required=true></textarea>
            </div>

            <button type="submit" class="btn primary">{"Send Message"}</button>
        </form>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_else(|| Rc::new(SiteContent::load()));
    // One observer for every stat card on the page, released with the page.
    let viewport = use_state(|| ViewportHandle::create(VIEWPORT_THRESHOLD));

    {
        let viewport = viewport.clone();
        use_unmount(move || {
            if let Some(trigger) = &viewport.0 {
                debug!("Home unmounted, disposing viewport trigger");
                trigger.dispose();
            }
        });
    }

    let year = chrono::Local::now().year();

    html! {
        <ContextProvider<ViewportHandle> context={(*viewport).clone()}>
            <div class="page-glow" aria-hidden="true"></div>
            <div class="container">
                <main id="home" class="hero">
                    <video class="hero-video" autoplay=true loop=true muted=true playsinline=true>
                        <source src="/assets/hero_vid_background.mp4" type="video/mp4" />
                    </video>
                    <div class="hero-overlay"></div>

                    <div class="hero-content">
                        <div class="hero-text">
                            <h1>
                                {"One Home For"}
                                <span class="gradient-text">{"Podcasts, Media & Marketing"}</span>
                                {"with "}<span class="hash">{"#Gashtak!"}</span>
                            </h1>
                            <p class="lede">
                                {"We are a professional media and marketing team dedicated to creating exceptional content \
                                  and bold strategies for our clients. With over 30k+ YouTube subscribers and 15+ happy \
                                  customers, we've proven our expertise in the digital media landscape."}
                            </p>
                            <div class="cta-row">
                                <a class="btn primary" href="#contact">{"Start a Project"}</a>
                                <a class="btn ghost" href="#portfolio">{"View Portfolio"}</a>
                            </div>
                        </div>

                        <div class="stats-row">
                            { for content.stats.iter().map(|stat| html! {
                                <StatCard key={stat.label.clone()} stat={stat.clone()} />
                            }) }
                        </div>
                    </div>

                    <div class="eyebrow-badge">
                        {"gashtak "}<RotatingText words={content.rotating_words.clone()} />
                    </div>
                </main>

                <section id="about" class="section about-section">
                    <div class="section-header">
                        <div class="eyebrow">{"who we are"}</div>
                        <h2>{"About Gashtak"}</h2>
                        <p class="section-subtitle">
                            {"A creative media powerhouse transforming ideas into compelling digital experiences"}
                        </p>
                    </div>

                    <div class="about-content">
                        <div class="about-card">
                            <h3>{"Our Story"}</h3>
                            <p>
                                {"Founded with a passion for storytelling, Gashtak has grown from a small podcast into \
                                  a full-service media and marketing agency. We combine creativity with strategy to help \
                                  brands connect with their audiences in meaningful ways."}
                            </p>
                        </div>
                        <div class="about-card">
                            <h3>{"Our Mission"}</h3>
                            <p>
                                {"To empower creators and businesses with exceptional media content and innovative marketing \
                                  strategies that drive real results. We believe in the power of authentic storytelling and \
                                  data-driven creativity."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id="services" class="section services-section">
                    <div class="section-header">
                        <div class="eyebrow">{"what we do"}</div>
                        <h2>{"Our Services"}</h2>
                        <p class="section-subtitle">
                            {"Comprehensive media and marketing solutions tailored to your needs"}
                        </p>
                    </div>

                    <div class="services-grid">
                        { for content.services.iter().map(|service| html! {
                            <ServiceCard key={service.title.clone()} service={service.clone()} />
                        }) }
                    </div>
                </section>

                <section id="contact" class="section contact-section">
                    <div class="contact-card">
                        <div class="section-header">
                            <div class="eyebrow">{"get in touch"}</div>
                            <h2>{"Let's Work Together"}</h2>
                            <p class="section-subtitle">
                                {"Ready to elevate your brand? Drop us a message and let's create something amazing."}
                            </p>
                        </div>
                        <ContactForm />
                    </div>
                </section>

                <footer class="site-footer">
                    <div class="footer-content">
                        <LogoChip />
                        <p class="footer-text">{format!("© {} Gashtak Media. All rights reserved.", year)}</p>
                    </div>
                </footer>
            </div>

            <style>
                {r#"
                .page-glow {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    background:
                        radial-gradient(circle at 15% 10%, rgba(255, 95, 143, 0.18), transparent 45%),
                        radial-gradient(circle at 85% 30%, rgba(120, 90, 255, 0.16), transparent 50%);
                    z-index: -1;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 8rem 0 4rem;
                    overflow: hidden;
                    border-radius: 0 0 32px 32px;
                }

                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: -2;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(8, 8, 14, 0.55), rgba(8, 8, 14, 0.92));
                    z-index: -1;
                }

                .hero-content {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                    padding: 0 1rem;
                }

                .hero-text h1 {
                    font-size: clamp(2.4rem, 5vw, 4.2rem);
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }

                .gradient-text {
                    display: block;
                    background: linear-gradient(90deg, #ff5f8f, #a47bff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hash {
                    color: #ff5f8f;
                }

                .lede {
                    max-width: 640px;
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                .cta-row {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }

                .btn {
                    display: inline-block;
                    padding: 0.85rem 1.6rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .btn:hover {
                    transform: translateY(-2px);
                }

                .btn.primary {
                    background: linear-gradient(90deg, #ff5f8f, #a47bff);
                    color: #ffffff;
                    box-shadow: 0 10px 30px rgba(255, 95, 143, 0.3);
                }

                .btn.ghost {
                    color: #ffffff;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: transparent;
                }

                .stats-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.25rem;
                }

                .stat-card {
                    padding: 1.5rem;
                    border-radius: 20px;
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(8px);
                }

                .stat-value {
                    font-size: 2.6rem;
                    font-weight: 800;
                    font-variant-numeric: tabular-nums;
                }

                .stat-label {
                    margin: 0.35rem 0 0;
                    color: rgba(255, 255, 255, 0.65);
                }

                .eyebrow-badge {
                    position: absolute;
                    top: 7rem;
                    right: 2rem;
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    font-family: monospace;
                    letter-spacing: 0.05em;
                }

                .rotating-word {
                    color: #ff5f8f;
                    transition: opacity 0.5s ease;
                }

                .rotating-word.fadeIn {
                    opacity: 0;
                    animation: rotatingFadeIn 0.8s forwards;
                }

                .rotating-word.fadeOut {
                    opacity: 0;
                }

                .rotating-word .cursor {
                    animation: blink 0.7s steps(1) infinite;
                }

                @keyframes rotatingFadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes blink {
                    50% { opacity: 0; }
                }

                .section {
                    padding: 6rem 0;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.8rem;
                    color: #ff5f8f;
                }

                .section-subtitle {
                    color: rgba(255, 255, 255, 0.65);
                    max-width: 560px;
                    margin: 0 auto;
                }

                .about-content {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .about-card,
                .service-card,
                .contact-card {
                    padding: 2rem;
                    border-radius: 24px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .service-icon {
                    font-size: 2.2rem;
                    margin-bottom: 1rem;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    max-width: 720px;
                    margin: 0 auto;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .form-group input,
                .form-group textarea {
                    padding: 0.85rem 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.3);
                    color: #ffffff;
                    font: inherit;
                }

                .site-footer {
                    padding: 3rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                .footer-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .footer-text {
                    color: rgba(255, 255, 255, 0.5);
                }

                @media (max-width: 700px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                    .eyebrow-badge {
                        position: static;
                        align-self: flex-start;
                        margin: 2rem 1rem 0;
                    }
                }
                "#}
            </style>
        </ContextProvider<ViewportHandle>>
    }
}
