use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use crate::interaction::{PointerSample, PointerTracker, Rect, ReferenceFrame, Viewport};

pub(crate) fn measure_element(element: &Element) -> Option<Rect> {
    let bounds = element.get_bounding_client_rect();
    Rect::measured(bounds.left(), bounds.top(), bounds.width(), bounds.height())
}

pub(crate) fn measure_node(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>().as_ref().and_then(measure_element)
}

fn measure_viewport() -> Option<Viewport> {
    let win = window()?;
    let width = win.inner_width().ok()?.as_f64()?;
    let height = win.inner_height().ok()?.as_f64()?;
    Viewport::measured(width, height)
}

fn client_position(event: &Event) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(event.client_x()), f64::from(event.client_y())))
}

fn viewport_listeners(
    tracker: Rc<RefCell<PointerTracker>>,
    sample: UseStateHandle<PointerSample>,
) -> Vec<EventListener> {
    let Some(win) = window() else {
        return Vec::new();
    };
    let mut listeners = Vec::with_capacity(2);

    {
        let tracker = tracker.clone();
        let sample = sample.clone();
        listeners.push(EventListener::new(&win, "mousemove", move |event| {
            let Some((x, y)) = client_position(event) else {
                return;
            };
            let frame = measure_viewport().map(ReferenceFrame::Viewport);
            if let Some(next) = tracker.borrow_mut().on_move(x, y, frame) {
                sample.set(next);
            }
        }));
    }

    // `mouseout` with no related target means the pointer left the window.
    if let Some(document) = win.document() {
        listeners.push(EventListener::new(&document, "mouseout", move |event| {
            let left_window = event
                .dyn_ref::<MouseEvent>()
                .is_some_and(|event| event.related_target().is_none());
            if left_window {
                sample.set(tracker.borrow_mut().on_leave());
            }
        }));
    }

    listeners
}

fn element_listeners(
    node: &NodeRef,
    tracker: Rc<RefCell<PointerTracker>>,
    sample: UseStateHandle<PointerSample>,
) -> Vec<EventListener> {
    let Some(element) = node.cast::<Element>() else {
        return Vec::new();
    };

    let on_move = {
        let tracker = tracker.clone();
        let sample = sample.clone();
        let measured = element.clone();
        EventListener::new(&element, "mousemove", move |event| {
            let Some((x, y)) = client_position(event) else {
                return;
            };
            let frame = measure_element(&measured).map(ReferenceFrame::Element);
            if let Some(next) = tracker.borrow_mut().on_move(x, y, frame) {
                sample.set(next);
            }
        })
    };
    let on_leave = EventListener::new(&element, "mouseleave", move |_| {
        sample.set(tracker.borrow_mut().on_leave());
    });

    vec![on_move, on_leave]
}

/// Tracks the pointer over `target`, or over the whole viewport when no
/// target is given. Listeners are dropped (and so removed) when the target
/// changes or the component unmounts.
#[hook]
pub(crate) fn use_pointer_position(target: Option<NodeRef>) -> PointerSample {
    let sample = use_state_eq(PointerSample::default);

    {
        let sample = sample.clone();
        use_effect_with(target, move |target| {
            let tracker = Rc::new(RefCell::new(PointerTracker::new()));
            let listeners = match target {
                Some(node) => element_listeners(node, tracker, sample),
                None => viewport_listeners(tracker, sample),
            };
            move || drop(listeners)
        });
    }

    *sample
}
