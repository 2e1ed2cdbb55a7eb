use std::rc::Rc;

use web_sys::{EventTarget, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::catalog::ProjectCatalog;
use crate::components::lazy_image::LazyImage;
use crate::components::reveal::Reveal;
use crate::dom::set_scroll_locked;
use crate::modal::{is_backdrop_click, ModalAction, ModalState, ModalView};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub catalog: Rc<ProjectCatalog>,
}

/// Project grid plus the detail modal it opens.
#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let modal = {
        let catalog = props.catalog.clone();
        use_reducer(move || ModalState::new(catalog))
    };

    {
        let dispatcher = modal.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            dispatcher.dispatch(ModalAction::Key(e.key()));
        });
    }

    use_effect_with_deps(
        |open| {
            set_scroll_locked(*open);
            || ()
        },
        modal.is_open(),
    );

    // Listeners sit on the app root, so the id is bound per card rather
    // than read back from the event.
    let view_project = |id: u32| {
        let dispatcher = modal.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(ModalAction::Open(id));
        })
    };

    let on_close = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ModalAction::Close))
    };
    let on_backdrop = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |on_overlay: bool| dispatcher.dispatch(ModalAction::Backdrop { on_overlay }))
    };

    html! {
        <>
            <div class="portfolio-grid">
                { for props.catalog.iter().enumerate().map(|(index, project)| html! {
                    <Reveal class="portfolio-item" stagger={Some(index)}>
                        <div class="portfolio-image">
                            <LazyImage
                                src={format!("/assets/projects/{}.webp", project.id)}
                                alt={project.title.clone()}
                            />
                        </div>
                        <div class="portfolio-content">
                            <h3>{ project.title.clone() }</h3>
                            <div class="portfolio-tech">
                                { for project.technologies.iter().take(3).map(|tech| html! {
                                    <span class="tech-tag">{ tech.clone() }</span>
                                }) }
                            </div>
                            <a
                                href="#"
                                class="view-project"
                                data-project-id={project.id.to_string()}
                                onclick={view_project(project.id)}
                            >
                                {"View Project"}
                            </a>
                        </div>
                    </Reveal>
                }) }
            </div>
            <ProjectModal view={modal.view().cloned()} {on_close} {on_backdrop} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub view: Option<ModalView>,
    pub on_close: Callback<()>,
    /// Emits whether the click landed on the overlay itself.
    pub on_backdrop: Callback<bool>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let overlay = use_node_ref();
    let onclick_overlay = {
        let on_backdrop = props.on_backdrop.clone();
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            let on_overlay = is_backdrop_click(e.target(), overlay.get().map(EventTarget::from));
            on_backdrop.emit(on_overlay);
        })
    };
    let onclick_close = props.on_close.reform(|_: MouseEvent| ());

    let empty = ModalView {
        title: String::new(),
        description: String::new(),
        tech_tags: Vec::new(),
        live_link: "#".to_owned(),
        code_link: "#".to_owned(),
    };
    let view = props.view.as_ref().unwrap_or(&empty);

    html! {
        <div
            id="project-modal"
            ref={overlay}
            class={classes!("modal", props.view.is_some().then_some("show"))}
            onclick={onclick_overlay}
        >
            <div class="modal-content">
                <span id="close-modal" class="close-modal" onclick={onclick_close}>{"×"}</span>
                <h2 id="modal-title">{ view.title.clone() }</h2>
                <div id="modal-description"><p>{ view.description.clone() }</p></div>
                <div id="modal-tech-list" class="modal-tech">
                    { for view.tech_tags.iter().map(|tech| html! {
                        <span class="tech-tag">{ tech.clone() }</span>
                    }) }
                </div>
                <div class="modal-links">
                    <a id="modal-live-link" href={view.live_link.clone()} class="btn btn-primary" target="_blank">
                        {"Live Demo"}
                    </a>
                    <a id="modal-code-link" href={view.code_link.clone()} class="btn btn-secondary" target="_blank">
                        {"View Code"}
                    </a>
                </div>
            </div>
        </div>
    }
}
