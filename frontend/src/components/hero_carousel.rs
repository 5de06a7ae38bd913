use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;

const CAROUSEL_TEXTS: &[&str] = &["Form 8949", "Your Return", "Filed Numbers"];
const ROTATE_MS: u32 = 3000;
const FADE_MS: u32 = 500;

pub fn next_index(current: usize) -> usize {
    (current + 1) % CAROUSEL_TEXTS.len()
}

#[function_component(HeroCarousel)]
pub fn hero_carousel() -> Html {
    let current_index = use_state(|| 0usize);
    let is_visible = use_state(|| true);

    {
        let current_index = current_index.clone();
        let is_visible = is_visible.clone();
        use_effect_with_deps(move |_| {
            // Pending fade-in timer, cancelled with the interval on unmount
            let swap_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let swap_handle_clone = swap_handle.clone();
            // State handles captured here would read stale values inside the timers
            let index = Rc::new(Cell::new(0usize));

            let interval = Interval::new(ROTATE_MS, move || {
                is_visible.set(false);
                let current_index = current_index.clone();
                let is_visible = is_visible.clone();
                let index = index.clone();
                let swap = Timeout::new(FADE_MS, move || {
                    index.set(next_index(index.get()));
                    current_index.set(index.get());
                    is_visible.set(true);
                });
                *swap_handle_clone.borrow_mut() = Some(swap);
            });

            move || {
                drop(interval);
                swap_handle.borrow_mut().take();
            }
        }, ());
    }

    let style = if *is_visible {
        "opacity: 1; transform: translateY(0);"
    } else {
        "opacity: 0; transform: translateY(-10px);"
    };

    html! {
        <span class="hero-carousel" style={style}>
            <style>
                {r#"
                    .hero-carousel {
                        display: inline-flex;
                        line-height: 1.2;
                        padding: 0.5rem 1rem;
                        margin: -0.5rem -1rem;
                        background: linear-gradient(90deg, #fb923c, #fed7aa);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        transition: opacity 0.5s ease-in-out, transform 0.5s ease-in-out;
                    }
                "#}
            </style>
            {CAROUSEL_TEXTS[*current_index]}
        </span>
    }
}
