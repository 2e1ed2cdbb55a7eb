use yew::prelude::*;

use crate::config::PageConfig;
use crate::timers::GlooScheduler;
use crate::typing::TypingEffect;

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Hero tagline that types itself out shortly after the page loads.
#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let config = use_context::<PageConfig>().unwrap_or_default();
    // `None` until the effect takes over; the raw text stays hidden by CSS.
    let shown = use_state(|| None::<String>);

    {
        let shown = shown.setter();
        use_effect_with_deps(
            move |text| {
                let effect = TypingEffect::new(
                    GlooScheduler,
                    config.typing_start_delay_ms,
                    config.typing_step_ms,
                );
                effect.start(text, move |frame| shown.set(Some(frame.to_owned())));
                move || effect.cancel()
            },
            props.text.clone(),
        );
    }

    let style = shown.is_some().then_some("opacity: 1");
    let text = match &*shown {
        Some(frame) => frame.clone(),
        None => props.text.to_string(),
    };

    html! {
        <span class={classes!("typing-text", props.class.clone())} {style}>{ text }</span>
    }
}
