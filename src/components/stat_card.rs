use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::content::Stat;
use crate::effects::count_up::CountUpAnimator;
use crate::effects::viewport::ViewportHandle;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
}

/// Stat counter that counts up from zero the first time it scrolls into view.
///
/// Without a viewport trigger (or without a mounted element) the card keeps
/// showing its final value.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let node_ref = use_node_ref();
    let text = use_state(|| props.stat.render(props.stat.value));
    let trigger = use_context::<ViewportHandle>().and_then(|handle| handle.0);

    {
        let node_ref = node_ref.clone();
        let text = text.clone();
        use_effect_with_deps(
            move |stat: &Stat| {
                let animator: Rc<RefCell<Option<CountUpAnimator>>> = Rc::new(RefCell::new(None));

                let observed = match (trigger.as_ref(), node_ref.cast::<Element>()) {
                    (Some(trigger), Some(element)) => {
                        text.set(stat.render(0));
                        let setter = text.setter();
                        let slot = animator.clone();
                        let stat = stat.clone();
                        trigger.observe(&element, move || {
                            let render = setter.clone();
                            match CountUpAnimator::run(&stat, move |value| render.set(value)) {
                                Ok(running) => *slot.borrow_mut() = Some(running),
                                Err(e) => {
                                    warn!("Could not animate {}: {}", stat.label, e);
                                    setter.set(stat.render(stat.value));
                                }
                            }
                        });
                        Some(element)
                    }
                    _ => None,
                };

                move || {
                    if let (Some(trigger), Some(element)) = (trigger, observed) {
                        trigger.unobserve(&element);
                    }
                    // Dropping the animator cancels its pending frame.
                    animator.borrow_mut().take();
                }
            },
            props.stat.clone(),
        );
    }

    html! {
        <article class="stat-card">
            <div class="stat-value" ref={node_ref}>{(*text).clone()}</div>
            <p class="stat-label">{&props.stat.label}</p>
        </article>
    }
}
