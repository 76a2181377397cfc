use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

/// Browsers occasionally report a ratio a hair under the threshold that
/// triggered the notification.
const RATIO_TOLERANCE: f64 = 1e-3;

type OnEnter = Box<dyn FnOnce()>;

/// One-shot callbacks keyed by element identity.
///
/// Entries are removed the moment they fire, so a key that leaves and
/// re-enters the viewport never fires twice.
pub struct TriggerRegistry<K> {
    threshold: f64,
    entries: Vec<(K, OnEnter)>,
    disposed: bool,
}

impl<K: PartialEq> TriggerRegistry<K> {
    pub fn new(threshold: f64) -> Self {
        TriggerRegistry {
            threshold,
            entries: Vec::new(),
            disposed: false,
        }
    }

    /// Registers `on_enter` for `key`, replacing any pending callback for the
    /// same key. Returns false once the registry is disposed.
    pub fn register(&mut self, key: K, on_enter: OnEnter) -> bool {
        if self.disposed {
            return false;
        }
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, on_enter));
        true
    }

    /// Takes the callback for `key` if `ratio` of it is visible. The caller
    /// runs it, after any borrow of the registry has been released.
    pub fn take_entered(&mut self, key: &K, ratio: f64) -> Option<OnEnter> {
        if ratio + RATIO_TOLERANCE < self.threshold {
            return None;
        }
        self.remove(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<OnEnter> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.swap_remove(index).1)
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.entries.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Page-wide visibility watcher shared by every stat card.
///
/// Wraps one `IntersectionObserver`; elements are unobserved as soon as
/// their callback fires. The page owns the trigger and disposes it on unmount.
pub struct ViewportTrigger {
    observer: IntersectionObserver,
    registry: Rc<RefCell<TriggerRegistry<Element>>>,
    _callback: ObserverCallback,
}

impl ViewportTrigger {
    pub fn new(threshold: f64) -> Result<Self> {
        let registry = Rc::new(RefCell::new(TriggerRegistry::new(threshold)));

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
            let registry = registry.clone();
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let on_enter = registry
                        .borrow_mut()
                        .take_entered(&target, entry.intersection_ratio());
                    if let Some(on_enter) = on_enter {
                        observer.unobserve(&target);
                        on_enter();
                    }
                }
            }
        });

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(ViewportTrigger {
            observer,
            registry,
            _callback: callback,
        })
    }

    /// Calls `on_enter` once, the first time `element` is visible enough.
    pub fn observe<F>(&self, element: &Element, on_enter: F)
    where
        F: FnOnce() + 'static,
    {
        let registered = self
            .registry
            .borrow_mut()
            .register(element.clone(), Box::new(on_enter));
        if registered {
            self.observer.observe(element);
        } else {
            debug!("Ignoring observe on a disposed viewport trigger");
        }
    }

    /// Drops the pending callback for `element` without running it.
    pub fn unobserve(&self, element: &Element) {
        if self.registry.borrow_mut().remove(element).is_some() {
            self.observer.unobserve(element);
        }
    }

    /// Unregisters every pending element. Safe to call repeatedly.
    pub fn dispose(&self) {
        let mut registry = self.registry.borrow_mut();
        if registry.is_disposed() {
            return;
        }
        if !registry.is_empty() {
            debug!("Disposing viewport trigger with {} pending elements", registry.len());
        }
        registry.dispose();
        self.observer.disconnect();
    }
}

impl Drop for ViewportTrigger {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Shared handle passed to stat cards through a Yew context.
#[derive(Clone)]
pub struct ViewportHandle(pub Option<Rc<ViewportTrigger>>);

impl ViewportHandle {
    pub fn create(threshold: f64) -> Self {
        match ViewportTrigger::new(threshold) {
            Ok(trigger) => ViewportHandle(Some(Rc::new(trigger))),
            Err(e) => {
                warn!("Viewport trigger unavailable, counters stay static: {}", e);
                ViewportHandle(None)
            }
        }
    }
}

impl PartialEq for ViewportHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
