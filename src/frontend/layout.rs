use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use super::scroll_to_section;
use super::tooltip::TooltipTrigger;
use crate::content::{BRAND, NAV_LINKS, SOCIAL_LINKS};

const SCROLLED_THRESHOLD_PX: f64 = 50.0;

fn page_scrolled() -> bool {
    window()
        .and_then(|w| w.scroll_y().ok())
        .is_some_and(|scroll_y| scroll_y > SCROLLED_THRESHOLD_PX)
}

fn anchor_callback(anchor: &'static str, after: Option<UseStateHandle<bool>>) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        scroll_to_section(anchor);
        if let Some(menu_open) = after.as_ref() {
            menu_open.set(false);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub theme_label: AttrValue,
    pub theme_icon: AttrValue,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(page_scrolled);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new_with_options(
                    &win,
                    "scroll",
                    EventListenerOptions::run_in_passive_mode(),
                    move |_| scrolled.set(page_scrolled()),
                )
            });
            move || drop(listener)
        });
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let desktop_links = NAV_LINKS.iter().map(|link| {
        html! {
            <a
                key={link.anchor}
                class="nav-link"
                href={format!("#{}", link.anchor)}
                onclick={anchor_callback(link.anchor, None)}
            >
                {link.name}
            </a>
        }
    });

    let mobile_links = NAV_LINKS.iter().map(|link| {
        html! {
            <a
                key={link.anchor}
                class="mobile-nav-link"
                href={format!("#{}", link.anchor)}
                onclick={anchor_callback(link.anchor, Some(menu_open.clone()))}
            >
                {link.name}
            </a>
        }
    });

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("is-scrolled"))}>
            <nav class="nav-bar" aria-label="Primary">
                <a class="brand" href="#hero" onclick={anchor_callback("hero", None)}>
                    <span class="brand-mark" aria-hidden="true">{">_"}</span>
                    <span class="text-gradient">{BRAND}</span>
                </a>

                <div class="nav-links">{for desktop_links}</div>

                <div class="nav-actions">
                    <button
                        class="icon-button"
                        type="button"
                        aria-label={props.theme_label.clone()}
                        onclick={props.on_toggle_theme.clone()}
                    >
                        <span aria-hidden="true">{props.theme_icon.clone()}</span>
                    </button>
                    <button class="button button-primary hire-me" type="button" onclick={anchor_callback("contact", None)}>
                        {"Hire Me"}
                    </button>
                    <button
                        class="icon-button menu-toggle"
                        type="button"
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    {for mobile_links}
                    <button
                        class="button button-primary"
                        type="button"
                        onclick={anchor_callback("contact", Some(menu_open.clone()))}
                    >
                        {"Hire Me"}
                    </button>
                </div>
            }
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    let navigation = NAV_LINKS.iter().map(|link| {
        html! {
            <li key={link.anchor}>
                <a href={format!("#{}", link.anchor)} onclick={anchor_callback(link.anchor, None)}>
                    {link.name}
                </a>
            </li>
        }
    });

    let social = SOCIAL_LINKS.iter().map(|link| {
        html! {
            <TooltipTrigger key={link.name} text={link.name}>
                <a class="social-link" href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.name}>
                    <span aria-hidden="true">{link.glyph}</span>
                </a>
            </TooltipTrigger>
        }
    });

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a class="brand" href="#hero" onclick={anchor_callback("hero", None)}>
                        <span class="brand-mark" aria-hidden="true">{">_"}</span>
                        <span class="text-gradient">{BRAND}</span>
                    </a>
                    <p class="muted">
                        {"Building the future of technology, one line of code at a time. Specialized in AI, Web3, and cloud solutions."}
                    </p>
                </div>
                <div>
                    <h4>{"Navigation"}</h4>
                    <ul class="footer-links">{for navigation}</ul>
                </div>
                <div>
                    <h4>{"Connect"}</h4>
                    <div class="social-row">{for social}</div>
                </div>
            </div>
            <div class="footer-bottom muted">
                <p>{format!("© {year} {BRAND}. All rights reserved.")}</p>
                <p>{"Made with ♥ and Rust"}</p>
            </div>
        </footer>
    }
}
