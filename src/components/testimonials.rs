//! Testimonial carousel. Index transitions live in `rotation`; this
//! component owns the auto-advance interval and the resume cooldown, both of
//! which are cancelled by dropping their handles.

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::components::cards::StarRating;
use crate::models::{active_reviews, Review};
use crate::rotation::{Rotation, RotationAction, AUTO_ADVANCE_MS, RESUME_COOLDOWN_MS};

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: std::rc::Rc<Self>, action: RotationAction) -> std::rc::Rc<Self> {
        std::rc::Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub reviews: Vec<Review>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let display = active_reviews(&props.reviews);
    let rotation = use_reducer(|| Rotation::new(0));
    let cooldown = use_mut_ref(|| None::<Timeout>);

    // The displayable list changed; never hold a stale index.
    {
        let dispatcher = rotation.dispatcher();
        use_effect_with(display.len(), move |len| {
            dispatcher.dispatch(RotationAction::Resize(*len));
            || ()
        });
    }

    // One auto-advance interval at a time, alive only while auto-playing
    // over two or more entries. Unmount drops it.
    {
        let dispatcher = rotation.dispatcher();
        use_effect_with(
            (rotation.is_auto_playing(), display.len()),
            move |(auto_playing, len)| {
                let interval = (*auto_playing && *len > 1).then(|| {
                    Interval::new(AUTO_ADVANCE_MS, move || {
                        dispatcher.dispatch(RotationAction::Tick);
                    })
                });
                move || drop(interval)
            },
        );
    }

    // Manual navigation: pause now, resume after the cooldown. Arming a new
    // cooldown replaces (cancels) the previous one, so the last action wins.
    let manual = {
        let dispatcher = rotation.dispatcher();
        let cooldown = cooldown.clone();
        move |action: RotationAction| {
            dispatcher.dispatch(action);
            let dispatcher = dispatcher.clone();
            *cooldown.borrow_mut() = Some(Timeout::new(RESUME_COOLDOWN_MS, move || {
                dispatcher.dispatch(RotationAction::Resume);
            }));
        }
    };

    let on_previous = {
        let manual = manual.clone();
        Callback::from(move |_| manual(RotationAction::Previous))
    };
    let on_next = {
        let manual = manual.clone();
        Callback::from(move |_| manual(RotationAction::Next))
    };

    if display.is_empty() {
        return html! {
            <section id="testimonials" class="section">
                <div class="section-heading">
                    <h2>{"Client "}<span class="text-gradient">{"Feedback"}</span></h2>
                    <p class="muted">{"What clients say about my work and project delivery"}</p>
                </div>
                <div class="glass empty-state">
                    <h3>{"No Reviews Yet"}</h3>
                    <p class="muted">{"Client feedback will appear here once reviews are added."}</p>
                </div>
            </section>
        };
    }

    let review = &display[rotation.active().min(display.len() - 1)];
    let inert = !rotation.navigable();

    html! {
        <section id="testimonials" class="section">
            <div class="section-heading">
                <h2>{"Client "}<span class="text-gradient">{"Feedback"}</span></h2>
                <p class="muted">{"What clients say about my work and project delivery"}</p>
            </div>

            <div class="carousel">
                <button
                    class="carousel-arrow carousel-prev glass"
                    type="button"
                    disabled={inert}
                    aria-label="Previous testimonial"
                    onclick={on_previous}
                >
                    {"‹"}
                </button>

                <div class="glass testimonial-card">
                    <div class="autoplay-indicator">
                        <span class={classes!(
                            "status-dot",
                            (!rotation.is_auto_playing()).then_some("is-paused"),
                        )} aria-hidden="true"></span>
                        <span class="muted">
                            {if rotation.is_auto_playing() { "Auto" } else { "Paused" }}
                        </span>
                    </div>
                    <div class="testimonial-meta">
                        <StarRating rating={review.rating} />
                        <span class="chip">{&review.project_type}</span>
                    </div>
                    <blockquote>
                        <p>{format!("\u{201c}{}\u{201d}", review.text)}</p>
                    </blockquote>
                    <div class="testimonial-author">
                        <h4>{&review.name}</h4>
                        <p class="author-position">{&review.position}</p>
                        if let Some(company) = &review.company {
                            <p class="muted">{company}</p>
                        }
                    </div>
                </div>

                <button
                    class="carousel-arrow carousel-next glass"
                    type="button"
                    disabled={inert}
                    aria-label="Next testimonial"
                    onclick={on_next}
                >
                    {"›"}
                </button>
            </div>

            if display.len() > 1 {
                <div class="carousel-indicators">
                    { for (0..display.len()).map(|index| {
                        let onclick = {
                            let manual = manual.clone();
                            Callback::from(move |_| manual(RotationAction::Jump(index)))
                        };
                        html! {
                            <button
                                class={classes!(
                                    "indicator",
                                    (index == rotation.active()).then_some("is-active"),
                                )}
                                type="button"
                                aria-label={format!("Go to testimonial {}", index + 1)}
                                {onclick}
                            ></button>
                        }
                    }) }
                </div>
            }
        </section>
    }
}
