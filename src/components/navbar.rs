use yew::prelude::*;

use crate::config::PageConfig;
use crate::dom::{offset_top, use_debounced_scroll};
use crate::nav::{active_section, NavAction, NavLink, NavState, SectionBounds};

/// A page section the navbar can highlight, bound to its rendered element.
#[derive(Clone, PartialEq)]
pub struct SectionRef {
    pub id: &'static str,
    pub node: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
    pub sections: Vec<SectionRef>,
}

fn measure(sections: &[SectionRef]) -> Vec<SectionBounds> {
    sections
        .iter()
        .filter_map(|section| {
            offset_top(&section.node).map(|top| SectionBounds {
                id: section.id.to_owned(),
                top,
            })
        })
        .collect()
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let state = use_reducer(NavState::default);

    {
        let dispatcher = state.dispatcher();
        let sections = props.sections.clone();
        use_debounced_scroll(config.scroll_debounce_ms, move |scroll_y| {
            let bounds = measure(&sections);
            let active = active_section(&bounds, scroll_y, config.section_lookahead).map(str::to_owned);
            dispatcher.dispatch(NavAction::Scroll {
                scroll_y,
                threshold: config.navbar_scroll_threshold,
                active,
            });
        });
    }

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    // Link clicks are scrolled by the window-level anchor handler; here they
    // only fold the mobile menu away.
    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::CloseMenu))
    };

    html! {
        <nav id="navbar" class={classes!("navbar", state.scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{ props.brand.clone() }</a>
                <ul id="nav-menu" class={classes!("nav-menu", state.menu_open.then_some("active"))}>
                    { for props.links.iter().map(|link| html! {
                        <li class="nav-item">
                            <a
                                href={link.href}
                                class={classes!("nav-link", state.is_active(link).then_some("active"))}
                                onclick={close_menu.clone()}
                            >
                                { link.label }
                            </a>
                        </li>
                    }) }
                </ul>
                <div
                    id="hamburger"
                    class={classes!("hamburger", state.menu_open.then_some("active"))}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
