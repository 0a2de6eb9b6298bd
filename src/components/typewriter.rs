//! Hero headline typewriter, driven by the stepper in `effects`.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::effects::{Typewriter, TYPEWRITER_TICK_MS};

struct TypewriterLoop {
    phrases: Rc<Vec<String>>,
    frame: Typewriter,
}

impl Reducible for TypewriterLoop {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Self {
            phrases: self.phrases.clone(),
            frame: self.frame.step(&self.phrases),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub phrases: Vec<String>,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let phrases = Rc::new(props.phrases.clone());
    let state = use_reducer({
        let phrases = phrases.clone();
        move || TypewriterLoop {
            phrases,
            frame: Typewriter::default(),
        }
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with(props.phrases.len(), move |len| {
            let interval =
                (*len > 0).then(|| Interval::new(TYPEWRITER_TICK_MS, move || dispatcher.dispatch(())));
            move || drop(interval)
        });
    }

    html! {
        <span class="typewriter">
            {state.frame.visible(&state.phrases)}
            <span class="caret" aria-hidden="true">{"|"}</span>
        </span>
    }
}
