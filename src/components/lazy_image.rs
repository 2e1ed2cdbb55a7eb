use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::polish::LazySource;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img data-src>` that fetches its picture the first time it is on screen.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let source = use_mut_ref(|| LazySource::new(props.src.to_string()));
    let loaded = use_state(|| false);

    {
        let node = node.clone();
        let source = source.clone();
        let loaded = loaded.setter();
        use_effect_with_deps(
            move |_| {
                let observed = node.cast::<Element>().and_then(|img| {
                    let on_source = source.clone();
                    let on_loaded = loaded.clone();
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                if on_source.borrow_mut().intersect(entry.is_intersecting()) {
                                    observer.unobserve(&entry.target());
                                    on_loaded.set(true);
                                }
                            }
                        },
                    );
                    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&img);
                            Some((observer, callback))
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable, loading eagerly: {:?}", e);
                            if source.borrow_mut().intersect(true) {
                                loaded.set(true);
                            }
                            None
                        }
                    }
                });

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let (data_src, src) = {
        let source = source.borrow();
        (source.deferred_src().to_owned(), source.current_src().map(str::to_owned))
    };
    html! {
        <img
            ref={node}
            class={classes!(props.class.clone(), (*loaded).then_some("loaded"))}
            data-src={data_src}
            {src}
            alt={props.alt.clone()}
        />
    }
}
