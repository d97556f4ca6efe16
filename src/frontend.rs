use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, Event, MouseEvent};
use yew::prelude::*;

use crate::content::{Contact, Project, Skill, CONTACTS, PROJECTS, SKILLS};
use crate::state::{SectionBox, SectionId, ViewState, SECTION_COUNT};

enum ViewAction {
    PointerMoved { x: f64, y: f64 },
    Scrolled { offset: f64, boxes: [Option<SectionBox>; SECTION_COUNT] },
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::PointerMoved { x, y } => next.on_pointer_move(x, y),
            ViewAction::Scrolled { offset, boxes } => next.on_scroll(offset, &boxes),
        }
        next.into()
    }
}

fn current_scroll_offset() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

fn section_box(document: &Document, section: SectionId) -> Option<SectionBox> {
    let rect = document
        .get_element_by_id(section.anchor())?
        .get_bounding_client_rect();

    Some(SectionBox {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

fn section_boxes() -> [Option<SectionBox>; SECTION_COUNT] {
    let mut boxes = [None; SECTION_COUNT];

    if let Some(document) = window().and_then(|win| win.document()) {
        for (slot, section) in boxes.iter_mut().zip(SectionId::ALL) {
            *slot = section_box(&document, section);
        }
    }

    boxes
}

fn nav_link(section: SectionId, active: SectionId) -> Html {
    html! {
        <a
            class={classes!("nav-link", (section == active).then_some("is-active"))}
            href={format!("#{}", section.anchor())}
        >
            {section.label()}
        </a>
    }
}

fn project_card(index: usize, project: &Project) -> Html {
    html! {
        <div class="project-card">
            <div class="project-cover">
                <span class="project-index">{format!("{:02}", index + 1)}</span>
                <a class="project-overlay" href={project.link} aria-label={project.title}>
                    <span class="external-mark" aria-hidden="true">{"↗"}</span>
                </a>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tag-row">
                    { for project.tags.iter().map(|tag| html! {
                        <span class="tag-pill">{*tag}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn skill_row(skill: &Skill) -> Html {
    html! {
        <div class="skill-row">
            <div class="skill-heading">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-level">{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill-track">
                <div class="skill-fill" style={format!("width: {}%;", skill.level)} />
            </div>
        </div>
    }
}

fn contact_card(contact: &Contact) -> Html {
    html! {
        <a class="contact-card" href={contact.target}>
            <h3>{contact.label}</h3>
            <p>{contact.value}</p>
        </a>
    }
}

#[function_component(App)]
fn app() -> Html {
    let view = use_reducer(ViewState::new);

    {
        let view = view.clone();
        use_effect_with((), move |_| {
            let subscriptions = window().map(|win| {
                let on_mouse_move = {
                    let view = view.clone();
                    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                        view.dispatch(ViewAction::PointerMoved {
                            x: f64::from(event.client_x()),
                            y: f64::from(event.client_y()),
                        });
                    })
                };

                let on_scroll = {
                    let view = view.clone();
                    Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                        view.dispatch(ViewAction::Scrolled {
                            offset: current_scroll_offset(),
                            boxes: section_boxes(),
                        });
                    })
                };

                let _ = win.add_event_listener_with_callback(
                    "mousemove",
                    on_mouse_move.as_ref().unchecked_ref(),
                );
                let _ = win
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());

                (win, on_mouse_move, on_scroll)
            });

            // Release both subscriptions on unmount, unconditionally.
            move || {
                if let Some((win, on_mouse_move, on_scroll)) = subscriptions {
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        on_mouse_move.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let cursor_style = format!(
        "--cursor-x: {:.2}px; --cursor-y: {:.2}px;",
        view.pointer.x, view.pointer.y
    );

    html! {
        <div class="page-shell" style={cursor_style}>
            <div class="cursor-halo" aria-hidden="true" />
            <div class="cursor-dot" aria-hidden="true" />

            <nav class="site-nav" aria-label="Sezioni">
                { for SectionId::ALL.iter().map(|section| nav_link(*section, view.active)) }
            </nav>

            <section id={SectionId::Home.anchor()} class="hero">
                <div class="section-column">
                    <span class="availability-badge">{"Disponibile per progetti"}</span>
                    <h1>{"Luca Neviani"}</h1>
                    <div class="accent-rule" />
                    <p class="hero-role">{"Data Analyst e Full Stack Developer"}</p>
                    <p class="hero-blurb">
                        {"Unisco Data Analysis BI ed il Full Stack Developement per progetti data-driven."}
                    </p>
                    <div class="cta-row">
                        <a class="cta cta-primary" href={format!("#{}", SectionId::Contacts.anchor())}>
                            {"Contattami"}
                            <span class="cta-mark" aria-hidden="true">{"→"}</span>
                        </a>
                        <a class="cta cta-secondary" href="#">
                            {"Scarica CV"}
                            <span class="cta-mark" aria-hidden="true">{"↓"}</span>
                        </a>
                    </div>
                    <div class="social-row">
                        <a class="social-link" href="#">{"GitHub"}</a>
                        <a class="social-link" href="#">{"LinkedIn"}</a>
                        <a class="social-link" href="#">{"Email"}</a>
                    </div>
                </div>
            </section>

            <section id={SectionId::Projects.anchor()} class="section-block projects">
                <div class="section-column wide">
                    <h2>{"Progetti"}</h2>
                    <div class="accent-rule" />
                    <div class="project-grid">
                        { for PROJECTS.iter().enumerate().map(|(index, project)| project_card(index, project)) }
                    </div>
                </div>
            </section>

            <section id={SectionId::Skills.anchor()} class="section-block skills">
                <div class="section-column">
                    <h2>{"Competenze"}</h2>
                    <div class="accent-rule" />
                    <div class="skill-list">
                        { for SKILLS.iter().map(skill_row) }
                    </div>
                </div>
            </section>

            <section id={SectionId::Contacts.anchor()} class="section-block contacts">
                <div class="section-column wide">
                    <h2>{"Contatti"}</h2>
                    <div class="accent-rule light" />
                    <p class="contact-intro">{"Hai un progetto in mente? Parliamone."}</p>
                    <div class="contact-grid">
                        { for CONTACTS.iter().map(contact_card) }
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <p>{"© 2024 Nome Cognome. Tutti i diritti riservati."}</p>
            </footer>
        </div>
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
