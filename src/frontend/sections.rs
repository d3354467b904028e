use web_sys::MouseEvent;
use yew::prelude::*;

use super::pointer::use_pointer_position;
use super::scroll_to_section;
use super::tilt::TiltCard;
use super::tooltip::TooltipTrigger;
use crate::content::{
    visible_projects, ProjectFilter, CONTACT_EMAIL, EXTRA_SKILLS, POSTS, SERVICES, STATS,
    TECH_STACK, TIMELINE,
};

// Hero parallax travel for the background orbs, in pixels.
const PARALLAX_PX: f64 = 24.0;

fn scroll_callback(anchor: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(anchor))
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    eyebrow: AttrValue,
    title: AttrValue,
    highlight: AttrValue,
    #[prop_or_default]
    lead: Option<AttrValue>,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <header class="section-header">
            <span class="eyebrow">{props.eyebrow.clone()}</span>
            <h2>
                {props.title.clone()}{" "}
                <span class="text-gradient">{props.highlight.clone()}</span>
            </h2>
            if let Some(lead) = props.lead.clone() {
                <p class="lead muted">{lead}</p>
            }
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero_ref = use_node_ref();
    let pointer = use_pointer_position(Some(hero_ref.clone()));

    // Spotlight follows the pointer; orbs drift against it.
    let spotlight = if pointer.is_inside {
        format!(
            "--spot-x: {:.2}%; --spot-y: {:.2}%; --parallax-x: {:.2}px; --parallax-y: {:.2}px;",
            (pointer.normalized_x + 1.0) * 50.0,
            (pointer.normalized_y + 1.0) * 50.0,
            -pointer.normalized_x * PARALLAX_PX,
            -pointer.normalized_y * PARALLAX_PX,
        )
    } else {
        String::from("--spot-x: 50%; --spot-y: 50%; --parallax-x: 0px; --parallax-y: 0px;")
    };

    let chips = TECH_STACK.iter().map(|tech| {
        html! {
            <TooltipTrigger key={*tech} text={*tech} class="tech-chip">
                {*tech}
            </TooltipTrigger>
        }
    });

    html! {
        <section
            id="hero"
            ref={hero_ref}
            class={classes!("hero", pointer.is_inside.then_some("is-tracking"))}
            style={spotlight}
        >
            <div class="hero-spotlight" aria-hidden="true" />
            <div class="hero-orb hero-orb-cyan" aria-hidden="true" />
            <div class="hero-orb hero-orb-purple" aria-hidden="true" />

            <div class="hero-content">
                <span class="status-pill">
                    <span class="status-dot" aria-hidden="true" />
                    {"Available for freelance work"}
                </span>
                <h1>
                    {"Building the "}
                    <span class="text-gradient">{"Future"}</span>
                    <br />
                    {"with Code & Innovation"}
                </h1>
                <p class="lead muted">
                    {"Full-stack developer specializing in AI integration, Web3 applications, \
                      and cloud-native solutions. Turning complex problems into elegant, \
                      scalable products."}
                </p>
                <div class="hero-actions">
                    <button class="button button-primary" type="button" onclick={scroll_callback("projects")}>
                        {"View My Work"}
                    </button>
                    <button class="button button-outline" type="button" onclick={scroll_callback("contact")}>
                        {"Get In Touch"}
                    </button>
                </div>
                <div class="tech-stack" aria-label="Tech stack">{for chips}</div>
            </div>

            <button class="scroll-hint" type="button" aria-label="Scroll to services" onclick={scroll_callback("services")}>
                <span aria-hidden="true">{"↓"}</span>
            </button>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let cards = SERVICES.iter().map(|service| {
        let skills = service.skills.iter().map(|skill| {
            html! { <li key={*skill}>{*skill}</li> }
        });
        html! {
            <TiltCard key={service.title} class={classes!("service-card", service.accent.class())}>
                <h3>{service.title}</h3>
                <p class="muted">{service.description}</p>
                <ul class="skill-list">{for skills}</ul>
            </TiltCard>
        }
    });

    let extras = EXTRA_SKILLS.iter().map(|skill| {
        html! { <span key={*skill} class="tag">{*skill}</span> }
    });

    html! {
        <section id="services" class="section">
            <SectionHeader
                eyebrow="What I Do"
                title="Services &"
                highlight="Expertise"
                lead={AttrValue::from("End-to-end development across the modern stack, from intelligent backends to polished interfaces.")}
            />
            <div class="card-grid card-grid-4">{for cards}</div>
            <div class="tag-row">{for extras}</div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let filter = use_state_eq(ProjectFilter::default);

    let buttons = ProjectFilter::ALL.iter().map(|option| {
        let option = *option;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(option))
        };
        let active = *filter == option;
        html! {
            <button
                key={option.label()}
                type="button"
                class={classes!("filter-button", active.then_some("is-active"))}
                aria-pressed={active.to_string()}
                {onclick}
            >
                {option.label()}
            </button>
        }
    });

    let cards = visible_projects(*filter).map(|project| {
        let tags = project.tags.iter().map(|tag| {
            html! { <span key={*tag} class="tag">{*tag}</span> }
        });
        html! {
            <TiltCard key={project.id} class={classes!("project-card", project.accent.class())}>
                <div class="project-media">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <span class="project-category">{project.category.label()}</span>
                </div>
                <div class="project-body">
                    <h3>{project.title}</h3>
                    <p class="muted">{project.description}</p>
                    <div class="tag-row">{for tags}</div>
                    <div class="project-links">
                        <TooltipTrigger text="Open live demo">
                            <a href={project.live_url} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a>
                        </TooltipTrigger>
                        <TooltipTrigger text="View source code">
                            <a href={project.source_url} target="_blank" rel="noopener noreferrer">{"Source"}</a>
                        </TooltipTrigger>
                    </div>
                </div>
            </TiltCard>
        }
    });

    html! {
        <section id="projects" class="section">
            <SectionHeader eyebrow="Portfolio" title="Featured" highlight="Projects" />
            <div class="filter-row" role="group" aria-label="Filter projects by category">
                {for buttons}
            </div>
            <div class="card-grid card-grid-3">{for cards}</div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let milestones = TIMELINE.iter().map(|milestone| {
        html! {
            <li key={milestone.year} class="timeline-item">
                <span class="timeline-year">{milestone.year}</span>
                <div>
                    <h3>{milestone.title}</h3>
                    <p class="timeline-company">{milestone.company}</p>
                    <p class="muted">{milestone.description}</p>
                </div>
            </li>
        }
    });

    let stats = STATS.iter().map(|stat| {
        html! {
            <div key={stat.label} class="stat">
                <span class="stat-value text-gradient">{stat.value}</span>
                <span class="stat-label muted">{stat.label}</span>
            </div>
        }
    });

    html! {
        <section id="about" class="section about">
            <SectionHeader eyebrow="About Me" title="The Journey" highlight="So Far" />
            <div class="about-grid">
                <div class="about-copy">
                    <p>
                        {"I'm a developer who enjoys the space between research and product: \
                          taking ideas from AI, distributed systems and Web3 and shipping them \
                          as tools people actually use."}
                    </p>
                    <div class="stat-grid">{for stats}</div>
                </div>
                <ol class="timeline">{for milestones}</ol>
            </div>
        </section>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let posts = POSTS.iter().map(|post| {
        html! {
            <TiltCard key={post.id} class={classes!("post-card", post.accent.class())}>
                <img src={post.image} alt={post.title} loading="lazy" />
                <div class="post-body">
                    <div class="post-meta muted">
                        <span class="tag">{post.category}</span>
                        <span>{post.date}</span>
                        <span>{post.read_time}</span>
                    </div>
                    <h3>{post.title}</h3>
                    <p class="muted">{post.excerpt}</p>
                </div>
            </TiltCard>
        }
    });

    html! {
        <section id="blog" class="section">
            <SectionHeader eyebrow="Blog" title="Latest" highlight="Insights" />
            <div class="card-grid card-grid-4">{for posts}</div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    html! {
        <section id="contact" class="section contact">
            <SectionHeader
                eyebrow="Contact"
                title="Let's Build"
                highlight="Together"
                lead={AttrValue::from("Have a project in mind? Send a message or book a call and I'll get back within a day.")}
            />
            <div class="contact-actions">
                <TooltipTrigger text="Send an email">
                    <a class="button button-primary" href={mailto}>{CONTACT_EMAIL}</a>
                </TooltipTrigger>
                <TooltipTrigger text="Pick a time that works for you">
                    <a class="button button-outline" href="#contact" onclick={Callback::from(|event: MouseEvent| event.prevent_default())}>
                        {"Schedule a Call"}
                    </a>
                </TooltipTrigger>
            </div>
        </section>
    }
}
