mod layout;
mod pointer;
mod sections;
mod tilt;
mod tooltip;

use js_sys::{Function, Reflect};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config::{InteractionConfig, CONFIG_ELEMENT_ID};
use crate::interaction::TiltRegistry;
use crate::logging::{LogLevel, Logger};

use layout::{Footer, Navigation};
use sections::{About, Blog, Contact, Hero, Projects, Services};
use tooltip::TooltipProvider;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label and glyph for the button that switches away from
    /// `self`.
    fn toggle_button(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("Switch to dark theme", "☾"),
            Self::Dark => ("Switch to light theme", "☀"),
        }
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

fn initial_theme() -> Theme {
    if media_matches("(prefers-color-scheme: light)") {
        Theme::Light
    } else {
        Theme::Dark
    }
}

fn set_theme_attribute(theme: Theme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.attribute());
    }
}

/// Runs `update` inside `document.startViewTransition` when the browser has
/// it. Returns false when the caller should apply the change directly.
fn start_view_transition(update: impl FnOnce() + 'static) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let document: JsValue = document.into();
    let start = Reflect::get(&document, &JsValue::from_str("startViewTransition"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    let Some(start) = start else {
        return false;
    };

    start
        .call1(&document, &Closure::once_into_js(update))
        .is_ok()
}

fn switch_theme(theme: Theme) {
    let animate = !media_matches("(prefers-reduced-motion: reduce)");
    if !(animate && start_view_transition(move || set_theme_attribute(theme))) {
        set_theme_attribute(theme);
    }
}

/// Smooth-scrolls to the section with `id`. Unknown ids are ignored.
pub(crate) fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Settings and per-card tilt state shared with every component.
#[derive(Clone)]
pub(crate) struct InteractionContext {
    pub config: InteractionConfig,
    pub logger: Logger,
    pub tilts: Rc<RefCell<TiltRegistry>>,
}

impl Default for InteractionContext {
    fn default() -> Self {
        let config = InteractionConfig::default();
        Self {
            config,
            logger: Logger::new(config.log_level),
            tilts: Rc::new(RefCell::new(TiltRegistry::new())),
        }
    }
}

impl PartialEq for InteractionContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.logger == other.logger
            && Rc::ptr_eq(&self.tilts, &other.tilts)
    }
}

fn inline_config_source() -> Option<String> {
    window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

fn load_interaction_context() -> InteractionContext {
    let Some(source) = inline_config_source() else {
        let context = InteractionContext::default();
        context
            .logger
            .event(LogLevel::Info, "config.loaded", json!({ "source": "defaults" }));
        return context;
    };

    match InteractionConfig::from_json(&source) {
        Ok(loaded) => {
            let logger = Logger::new(loaded.config.log_level);
            if !loaded.rejected.is_empty() {
                logger.event(
                    LogLevel::Warn,
                    "config.rejected",
                    json!({ "fields": loaded.rejected }),
                );
            }
            logger.event(
                LogLevel::Info,
                "config.loaded",
                json!({
                    "source": "inline",
                    "maxTilt": loaded.config.tilt.max_tilt_deg,
                    "cardMaxTilt": loaded.config.card_max_tilt_deg,
                    "hoverScale": loaded.config.tilt.hover_scale,
                }),
            );
            InteractionContext {
                config: loaded.config,
                logger,
                tilts: Rc::new(RefCell::new(TiltRegistry::new())),
            }
        }
        Err(error) => {
            let context = InteractionContext::default();
            context.logger.event(
                LogLevel::Warn,
                "config.rejected",
                json!({ "error": error.to_string() }),
            );
            context
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state_eq(initial_theme);
    let interaction = use_memo((), |_| load_interaction_context());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            set_theme_attribute(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            switch_theme(next);
            theme.set(next);
        })
    };
    let (theme_label, theme_icon) = (*theme).toggle_button();

    html! {
        <ContextProvider<InteractionContext> context={(*interaction).clone()}>
            <TooltipProvider>
                <a class="skip-link" href="#main">{"Skip to main content"}</a>
                <div class="page-shell">
                    <Navigation
                        theme_label={theme_label}
                        theme_icon={theme_icon}
                        on_toggle_theme={on_toggle_theme}
                    />
                    <main id="main">
                        <Hero />
                        <Services />
                        <Projects />
                        <About />
                        <Blog />
                        <Contact />
                    </main>
                    <Footer />
                </div>
            </TooltipProvider>
        </ContextProvider<InteractionContext>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
