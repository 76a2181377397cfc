use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::effects::word_rotator::{Elapsed, RotationState};

#[derive(Properties, PartialEq)]
pub struct RotatingTextProps {
    pub words: Vec<String>,
}

#[function_component(RotatingText)]
pub fn rotating_text(props: &RotatingTextProps) -> Html {
    let state = {
        let words = props.words.clone();
        use_reducer(move || {
            RotationState::new(words).unwrap_or_else(|e| {
                warn!("{}", e);
                RotationState::blank()
            })
        })
    };

    // One timer per state; re-armed on every transition and cancelled
    // (dropped) when the state changes or the badge unmounts.
    {
        let dispatcher = state.dispatcher();
        let delay = state.delay_ms();
        use_effect_with_deps(
            move |step: &u64| {
                let step = *step;
                let timeout = Timeout::new(delay, move || dispatcher.dispatch(Elapsed(step)));
                move || drop(timeout)
            },
            state.step(),
        );
    }

    html! {
        <span class={classes!("rotating-word", state.phase().class())}>
            {state.display_text().to_string()}
            {
                if state.show_cursor() {
                    html! { <span class="cursor">{"|"}</span> }
                } else {
                    html! {}
                }
            }
        </span>
    }
}
