use yew::prelude::*;

use crate::config::PageConfig;
use crate::dom::{use_debounced_scroll, viewport_height, viewport_top};
use crate::reveal::{stagger_style, RevealLatch, RevealVariant};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub variant: RevealVariant,
    /// Position in a card grid, for the staggered transition delay.
    #[prop_or_default]
    pub stagger: Option<usize>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that slides in once it scrolls into view and then stays.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let node = use_node_ref();
    let latch = use_mut_ref(RevealLatch::default);
    let active = use_state(|| false);

    {
        let node = node.clone();
        let active = active.setter();
        use_debounced_scroll(config.scroll_debounce_ms, move |_| {
            if latch.borrow().is_active() {
                return;
            }
            let (Some(top), Some(height)) = (viewport_top(&node), viewport_height()) else {
                return;
            };
            if latch.borrow_mut().observe(top, height, config.reveal_margin) {
                active.set(true);
            }
        });
    }

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), props.variant.class(), (*active).then_some("active"))}
            style={props.stagger.map(stagger_style)}
        >
            { for props.children.iter() }
        </div>
    }
}
