use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::pointer::use_pointer_position;
use super::InteractionContext;
use crate::interaction::{
    overlay_placement, TooltipAction, TooltipChannel, TooltipState, TriggerRegion,
};

impl Reducible for TooltipState {
    type Action = TooltipAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// The page's tooltip, handed to triggers and the overlay via context.
#[derive(Clone, PartialEq)]
pub struct TooltipHandle(UseReducerHandle<TooltipState>);

impl TooltipChannel for TooltipHandle {
    fn set_active_text(&self, text: Option<Rc<str>>) {
        self.0.dispatch(match text {
            Some(text) => TooltipAction::Show(text),
            None => TooltipAction::Hide,
        });
    }

    fn active_text(&self) -> Option<Rc<str>> {
        self.0.active_text.clone()
    }
}

#[derive(Properties, PartialEq)]
pub struct TooltipProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TooltipProvider)]
pub fn tooltip_provider(props: &TooltipProviderProps) -> Html {
    let state = use_reducer_eq(TooltipState::default);
    let handle = TooltipHandle(state);

    html! {
        <ContextProvider<TooltipHandle> context={handle}>
            {props.children.clone()}
            <TooltipOverlay />
        </ContextProvider<TooltipHandle>>
    }
}

#[function_component(TooltipOverlay)]
fn tooltip_overlay() -> Html {
    let tooltip = use_context::<TooltipHandle>();
    let context = use_context::<InteractionContext>().unwrap_or_default();
    let pointer = use_pointer_position(None);
    // Kept after hiding so the exit fade still shows the label.
    let last_text = use_mut_ref(|| Rc::<str>::from(""));

    let state = TooltipState {
        active_text: tooltip.as_ref().and_then(|handle| handle.active_text()),
    };
    let placement = overlay_placement(&state, &pointer, context.config.tooltip_offset);
    if let Some(placement) = placement.as_ref() {
        *last_text.borrow_mut() = Rc::clone(&placement.text);
    }

    let (x, y) = placement.as_ref().map_or(
        (
            pointer.x + context.config.tooltip_offset.0,
            pointer.y + context.config.tooltip_offset.1,
        ),
        |placement| (placement.x, placement.y),
    );
    let style = format!("--tooltip-x: {x:.2}px; --tooltip-y: {y:.2}px;");
    let text = last_text.borrow().to_string();

    html! {
        <div
            class={classes!("cursor-tooltip", placement.is_some().then_some("is-visible"))}
            style={style}
            role="tooltip"
            aria-hidden={placement.is_none().to_string()}
        >
            <div class="cursor-tooltip-body">{text}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TooltipTriggerProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TooltipTrigger)]
pub fn tooltip_trigger(props: &TooltipTriggerProps) -> Html {
    let tooltip = use_context::<TooltipHandle>();
    let region = use_mut_ref(|| TriggerRegion::new(props.text.as_str()));

    {
        let region = region.clone();
        let tooltip = tooltip.clone();
        use_effect_with(props.text.clone(), move |text| {
            match tooltip.as_ref() {
                Some(tooltip) => region.borrow_mut().relabel(text.as_str(), tooltip),
                None => *region.borrow_mut() = TriggerRegion::new(text.as_str()),
            }
            || ()
        });
    }

    {
        let region = region.clone();
        let tooltip = tooltip.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(tooltip) = tooltip.as_ref() {
                    region.borrow_mut().on_leave(tooltip);
                }
            }
        });
    }

    let onmouseenter = {
        let region = region.clone();
        let tooltip = tooltip.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(tooltip) = tooltip.as_ref() {
                region.borrow_mut().on_enter(tooltip);
            }
        })
    };

    let onmouseleave = Callback::from(move |_: MouseEvent| {
        if let Some(tooltip) = tooltip.as_ref() {
            region.borrow_mut().on_leave(tooltip);
        }
    });

    html! {
        <span class={classes!("tooltip-trigger", props.class.clone())} {onmouseenter} {onmouseleave}>
            {props.children.clone()}
        </span>
    }
}
