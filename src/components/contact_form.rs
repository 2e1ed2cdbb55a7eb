use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::PageConfig;
use crate::contact::{ContactForm as FormController, Field};
use crate::timers::GlooScheduler;

const ERROR_BORDER: &str = "border-color: var(--accent-pink)";

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let trigger = use_force_update();
    let form = use_memo(
        move |config| {
            FormController::new(GlooScheduler, config, move || trigger.force_update())
        },
        config,
    );

    // Same deps as the memo, so a rebuilt controller cancels the one it replaced.
    {
        let form = form.clone();
        use_effect_with_deps(move |_| move || form.cancel(), config);
    }

    let state = form.snapshot();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.submit();
        })
    };

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.input(field, value);
        })
    };
    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            form.blur(field);
        })
    };

    let error_of = |field: Field| state.field(field).error.map(|e| e.to_string());
    let border_of = |field: Field| state.field(field).error.is_some().then_some(ERROR_BORDER);

    html! {
        <form id="contact-form" class="contact-form" novalidate=true {onsubmit}>
            <div class="form-group">
                <label for="name">{"Your Name"}</label>
                <input
                    type="text"
                    id="name"
                    name={Field::Name.name()}
                    value={state.name.value.clone()}
                    style={border_of(Field::Name)}
                    oninput={on_input(Field::Name)}
                    onblur={on_blur(Field::Name)}
                />
                <span id="name-error" class="error-message">{ error_of(Field::Name).unwrap_or_default() }</span>
            </div>
            <div class="form-group">
                <label for="email">{"Email Address"}</label>
                <input
                    type="email"
                    id="email"
                    name={Field::Email.name()}
                    value={state.email.value.clone()}
                    style={border_of(Field::Email)}
                    oninput={on_input(Field::Email)}
                    onblur={on_blur(Field::Email)}
                />
                <span id="email-error" class="error-message">{ error_of(Field::Email).unwrap_or_default() }</span>
            </div>
            <div class="form-group">
                <label for="message">{"Your Message"}</label>
                <textarea
                    id="message"
                    name={Field::Message.name()}
                    rows="5"
                    value={state.message.value.clone()}
                    style={border_of(Field::Message)}
                    oninput={on_input(Field::Message)}
                    onblur={on_blur(Field::Message)}
                />
                <span id="message-error" class="error-message">{ error_of(Field::Message).unwrap_or_default() }</span>
            </div>
            <button
                type="submit"
                class={classes!("btn", "btn-primary", "submit-btn", state.loading.then_some("loading"))}
                disabled={state.loading}
            >
                <span class="btn-text">{"Send Message"}</span>
                <span class="btn-loader"></span>
            </button>
            <div id="success-message" class={classes!("success-message", state.success_visible.then_some("show"))}>
                {"Thank you! Your message has been sent successfully. I'll get back to you soon."}
            </div>
        </form>
    }
}
