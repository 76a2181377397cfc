use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_past_threshold: bool,
}

impl ScrollState {
    pub fn at(scroll_offset: f64) -> Self {
        ScrollState {
            is_past_threshold: scroll_offset > SCROLL_THRESHOLD_PX,
        }
    }
}

fn current_offset() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

/// Whether the window has scrolled past the header threshold. Re-evaluated
/// on every scroll event; the listener goes away with the component.
#[hook]
pub fn use_scroll_header() -> bool {
    let state = use_state(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let state = state.clone();
                        move || {
                            if let Some(offset) = current_offset() {
                                state.set(ScrollState::at(offset));
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Could not listen for scroll events: {:?}", e);
                    }
                    // Initial state for pages restored mid-scroll
                    if let Some(offset) = current_offset() {
                        state.set(ScrollState::at(offset));
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    state.is_past_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!ScrollState::at(0.0).is_past_threshold);
        assert!(!ScrollState::at(10.0).is_past_threshold);
        assert!(ScrollState::at(11.0).is_past_threshold);
    }

    #[test]
    fn fractional_offsets_just_past_threshold_count() {
        assert!(ScrollState::at(10.5).is_past_threshold);
        assert!(!ScrollState::at(9.99).is_past_threshold);
    }

    #[test]
    fn default_is_top_of_page() {
        assert_eq!(ScrollState::default(), ScrollState::at(0.0));
    }
}
