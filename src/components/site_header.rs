use yew::prelude::*;

use crate::effects::scroll_header::use_scroll_header;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "home"),
    ("#about", "about"),
    ("#services", "services"),
    ("#contact", "contact"),
];

#[function_component(LogoChip)]
pub fn logo_chip() -> Html {
    html! {
        <div class="logo-chip">
            <span>{"#"}</span>
            <strong>{"Gashtak"}</strong>
        </div>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let is_scrolled = use_scroll_header();

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <LogoChip />
                <nav class="primary-nav" aria-label="Main navigation">
                    { for NAV_LINKS.iter().enumerate().map(|(i, (href, label))| html! {
                        <a href={*href} class={classes!((i == 0).then(|| "active"))}>{*label}</a>
                    }) }
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    padding: 0.75rem 2rem;
                    background: rgba(10, 10, 18, 0.85);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .logo-chip {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.35rem;
                    padding: 0.4rem 0.9rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                }
                .logo-chip span {
                    color: #ff5f8f;
                    font-weight: 700;
                }
                .primary-nav {
                    display: flex;
                    gap: 1.5rem;
                }
                .primary-nav a {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    text-transform: lowercase;
                    transition: color 0.2s ease;
                }
                .primary-nav a:hover,
                .primary-nav a.active {
                    color: #ffffff;
                }
                @media (max-width: 700px) {
                    .primary-nav {
                        gap: 0.9rem;
                        font-size: 0.9rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
