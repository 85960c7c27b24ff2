/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::motion::{Intersection, Reveal, RevealConfig};
use leptos::*;

/// Fades its children in once they scroll into view, as configured.
#[component]
pub fn RevealOnScroll(
    config: RevealConfig,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    let node_ref = create_node_ref::<html::Div>();
    observe_visibility(node_ref, config, set_visible);

    view! {
        <div node_ref=node_ref class=class style=move || config.style(visible.get())>
            {children()}
        </div>
    }
}

/// Runs a [`Reveal`] against the observations delivered by `connect` while
/// the current owner lives. `connect` returns the disconnect hook, or `None`
/// when no observations can be delivered, in which case the content is shown
/// right away.
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn reveal_with<C, D>(config: RevealConfig, set_visible: WriteSignal<bool>, connect: C)
where
    C: FnOnce(Box<dyn FnMut(Intersection)>) -> Option<D>,
    D: FnOnce() + 'static,
{
    let mut reveal = Reveal::new(config);
    let observe = Box::new(move |observation: Intersection| {
        if reveal.observe(observation) {
            set_visible.set(reveal.is_visible());
        }
    });
    match connect(observe) {
        Some(disconnect) => on_cleanup(disconnect),
        None => set_visible.set(true),
    }
}

#[cfg(not(feature = "ssr"))]
fn observe_visibility(
    node_ref: NodeRef<html::Div>,
    config: RevealConfig,
    set_visible: WriteSignal<bool>,
) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    reveal_with(config, set_visible, move |mut observe| {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                observe(Intersection::new(entry.is_intersecting(), entry.intersection_ratio()));
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        // Zero as well, so leaving the viewport entirely is always reported.
        let options = IntersectionObserverInit::new();
        options.set_threshold(&js_sys::Array::of2(
            &JsValue::from_f64(0.0),
            &JsValue::from_f64(config.threshold),
        ));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, showing content: {err:?}");
                return None;
            }
        };

        node_ref.on_load({
            let observer = observer.clone();
            move |element| observer.observe(&element)
        });
        Some(move || {
            observer.disconnect();
            drop(callback);
        })
    });
}

#[cfg(feature = "ssr")]
fn observe_visibility(
    _node_ref: NodeRef<html::Div>,
    _config: RevealConfig,
    _set_visible: WriteSignal<bool>,
) {
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Observer = Rc<RefCell<Option<Box<dyn FnMut(Intersection)>>>>;

    fn deliver(observer: &Observer, observation: Intersection) {
        if let Some(observe) = observer.borrow_mut().as_mut() {
            observe(observation);
        }
    }

    #[test]
    fn card_follows_observations_until_disposed() {
        let runtime = create_runtime();
        let (visible, set_visible) = create_signal(false);
        let observer: Observer = Rc::default();
        let disconnected = Rc::new(Cell::new(false));

        let mount = as_child_of_current_owner({
            let observer = observer.clone();
            let disconnected = disconnected.clone();
            move |_: ()| {
                let observer = observer.clone();
                let disconnected = disconnected.clone();
                reveal_with(RevealConfig::card(0), set_visible, move |observe| {
                    *observer.borrow_mut() = Some(observe);
                    Some(move || {
                        observer.borrow_mut().take();
                        disconnected.set(true);
                    })
                });
            }
        });
        let ((), disposer) = mount(());
        assert!(!visible.get_untracked());

        deliver(&observer, Intersection::visible(0.6));
        assert!(visible.get_untracked());
        deliver(&observer, Intersection::hidden());
        assert!(!visible.get_untracked());
        deliver(&observer, Intersection::visible(0.9));
        assert!(visible.get_untracked());

        drop(disposer);
        assert!(disconnected.get());

        deliver(&observer, Intersection::hidden());
        assert!(visible.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn content_is_shown_without_an_observer() {
        let runtime = create_runtime();
        let (visible, set_visible) = create_signal(false);

        reveal_with(RevealConfig::feature_card(0), set_visible, |_| None::<fn()>);
        assert!(visible.get_untracked());

        runtime.dispose();
    }
}
