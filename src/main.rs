use std::rc::Rc;

use log::info;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod catalog;
mod config;
mod contact;
mod dom;
mod modal;
mod nav;
mod polish;
mod reveal;
mod timers;
mod typing;
mod components {
    pub mod contact_form;
    pub mod lazy_image;
    pub mod navbar;
    pub mod project_modal;
    pub mod reveal;
    pub mod typing;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use catalog::ProjectCatalog;
use config::PageConfig;
use pages::{landing::Landing, not_found::NotFound};
use polish::{FocusMode, FOCUS_STYLE};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<ProjectCatalog>,
    #[prop_or_default]
    pub config: PageConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let focus_mode = use_mut_ref(FocusMode::default);

    {
        let focus_mode = focus_mode.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let mut mode = focus_mode.borrow_mut();
            let next = mode.on_key(&e.key());
            if next != *mode {
                *mode = next;
                dom::set_body_class(FocusMode::BODY_CLASS, true);
            }
        });
    }
    {
        let focus_mode = focus_mode.clone();
        use_event_with_window("mousedown", move |_: MouseEvent| {
            let mut mode = focus_mode.borrow_mut();
            let next = mode.on_mouse_down();
            if next != *mode {
                *mode = next;
                dom::set_body_class(FocusMode::BODY_CLASS, false);
            }
        });
    }
    {
        let anchor_offset = props.config.anchor_offset;
        use_event_with_window("click", move |e: MouseEvent| {
            dom::handle_anchor_click(&e, anchor_offset);
        });
    }

    html! {
        <ContextProvider<PageConfig> context={props.config}>
            <ContextProvider<Rc<ProjectCatalog>> context={props.catalog.clone()}>
                <style>{ FOCUS_STYLE }</style>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<ProjectCatalog>>>
        </ContextProvider<PageConfig>>
    }
}

fn print_banner() {
    gloo_console::log!(
        format!("%c {} - Best Website Developer in Multan", pages::landing::BRAND),
        "background: linear-gradient(135deg, #00d4ff, #7c3aed); color: white; font-size: 16px; padding: 10px; border-radius: 5px;"
    );
    gloo_console::log!(
        "%c Software Developer in Multan | Web Solutions in Multan",
        "color: #00d4ff; font-size: 12px;"
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    print_banner();

    let catalog = Rc::new(ProjectCatalog::builtin());
    info!("Starting application with {} projects", catalog.len());
    yew::Renderer::<App>::with_props(AppProps {
        catalog,
        config: PageConfig::default(),
    })
    .render();
}
