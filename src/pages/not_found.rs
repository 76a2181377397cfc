use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container not-found">
            <section class="section">
                <div class="section-header">
                    <div class="eyebrow">{"404"}</div>
                    <h2>{"Nothing here"}</h2>
                    <p class="section-subtitle">{"The page you are looking for does not exist."}</p>
                </div>
                <div class="cta-row">
                    <Link<Route> to={Route::Home} classes="btn primary">
                        {"Back home"}
                    </Link<Route>>
                </div>
            </section>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .not-found .cta-row {
                    justify-content: center;
                }
                "#}
            </style>
        </div>
    }
}
