use gloo_render::{request_animation_frame, AnimationFrame};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::pointer::measure_node;
use super::InteractionContext;
use crate::interaction::{TiltId, TiltRegistry, TiltState};
use crate::logging::LogLevel;

/// Runs the per-card animation loop until the springs settle.
#[derive(Clone)]
struct TiltDriver {
    node: NodeRef,
    tilts: Rc<RefCell<TiltRegistry>>,
    id: TiltId,
    perspective_px: f64,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    last_timestamp: Rc<RefCell<Option<f64>>>,
}

impl TiltDriver {
    fn start(&self) {
        if self.frame.borrow().is_some() {
            return;
        }

        *self.last_timestamp.borrow_mut() = None;
        self.schedule();
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
    }

    fn schedule(&self) {
        let driver = self.clone();
        let handle = request_animation_frame(move |timestamp| driver.tick(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self, timestamp: f64) {
        let dt_seconds = self
            .last_timestamp
            .borrow_mut()
            .replace(timestamp)
            .map_or(0.0, |last| (timestamp - last) / 1_000.0);

        let advanced = {
            let mut tilts = self.tilts.borrow_mut();
            tilts.get_mut(self.id).map(|tilt| {
                let state = tilt.advance(dt_seconds);
                (state, tilt.is_animating())
            })
        };
        let Some((state, animating)) = advanced else {
            self.stop();
            return;
        };

        self.apply(&state);
        // Hover events restart the loop, so a settled card can stop.
        if animating {
            self.schedule();
        } else {
            self.stop();
        }
    }

    fn apply(&self, state: &TiltState) {
        if let Some(element) = self.node.cast::<Element>() {
            let style = format!("transform: {};", state.css_transform(self.perspective_px));
            let _ = element.set_attribute("style", &style);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub max_tilt: Option<f64>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let fallback = use_memo((), |_| InteractionContext::default());
    let context = use_context::<InteractionContext>().unwrap_or_else(|| (*fallback).clone());
    let node = use_node_ref();
    let hovering = use_state_eq(|| false);
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    let last_timestamp = use_mut_ref(|| None::<f64>);

    let tilt_config = match props.max_tilt {
        Some(max_tilt) => context.config.tilt.with_max_tilt(max_tilt),
        None => context.config.card_tilt(),
    };
    let id = {
        let tilts = context.tilts.clone();
        *use_memo((), move |_| tilts.borrow_mut().mount(tilt_config))
    };

    {
        let tilts = context.tilts.clone();
        let logger = context.logger;
        let frame = frame.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            logger.event(
                LogLevel::Debug,
                "tilt.mounted",
                json!({ "id": id.to_string(), "maxTilt": tilt_config.max_tilt_deg }),
            );
            move || {
                frame.borrow_mut().take();
                tilts.borrow_mut().unmount(id);
                logger.event(LogLevel::Debug, "tilt.unmounted", json!({ "id": id.to_string() }));
            }
        });
    }

    let driver = TiltDriver {
        node: node.clone(),
        tilts: context.tilts.clone(),
        id,
        perspective_px: tilt_config.perspective_px,
        frame,
        last_timestamp,
    };

    let onmouseenter = {
        let driver = driver.clone();
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(tilt) = driver.tilts.borrow_mut().get_mut(driver.id) {
                tilt.on_enter();
            }
            hovering.set(true);
            driver.start();
        })
    };

    let onmousemove = {
        let driver = driver.clone();
        Callback::from(move |event: MouseEvent| {
            let rect = measure_node(&driver.node);
            if let Some(tilt) = driver.tilts.borrow_mut().get_mut(driver.id) {
                tilt.on_move(f64::from(event.client_x()), f64::from(event.client_y()), rect);
            }
            driver.start();
        })
    };

    let onmouseleave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(tilt) = driver.tilts.borrow_mut().get_mut(driver.id) {
                tilt.on_leave();
            }
            hovering.set(false);
            driver.start();
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone(), (*hovering).then_some("is-hovering"))}
            {onmouseenter}
            {onmousemove}
            {onmouseleave}
        >
            <div class="tilt-card-glow" aria-hidden="true" />
            <div class="tilt-card-shine" aria-hidden="true"><span /></div>
            {props.children.clone()}
        </div>
    }
}
