//! Contact section: validated form on the left, contact details on the
//! right. Submission goes relay-first, backend-store second (see `contact`).

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::components::toast::use_toaster;
use crate::contact::{submit, validate, ContactForm};

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let sending = use_state(|| false);
    let toaster = use_toaster();

    let edit = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = edit(|form, value| form.name = value);
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set(input.value());
            }
        })
    };
    let on_email = {
        let set = edit(|form, value| form.email = value);
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set(input.value());
            }
        })
    };
    let on_subject = {
        let set = edit(|form, value| form.subject = value);
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set(input.value());
            }
        })
    };
    let on_message = {
        let set = edit(|form, value| form.message = value);
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                set(input.value());
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sending = sending.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *sending {
                return;
            }
            let snapshot = (*form).clone();
            // Validation failures never reach the network.
            if let Err(err) = validate(&snapshot) {
                toaster.error(err.to_string());
                return;
            }

            sending.set(true);
            let form = form.clone();
            let sending = sending.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match submit(&snapshot).await {
                    Ok(()) => {
                        toaster.success("Message sent successfully!");
                        form.set(ContactForm::default());
                    }
                    Err(err) => toaster.error(err.to_string()),
                }
                sending.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="section">
            <div class="section-heading">
                <h2>{"Let's "}<span class="text-gradient">{"Connect"}</span></h2>
                <p class="muted">{"Have a question or want to work together? Feel free to reach out!"}</p>
            </div>

            <div class="contact-grid">
                <form class="glass contact-form" {onsubmit}>
                    <h3>{"Get in Touch"}</h3>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                    <label for="contact-subject">{"Subject"}</label>
                    <input
                        id="contact-subject"
                        type="text"
                        value={form.subject.clone()}
                        oninput={on_subject}
                    />
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        rows="4"
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    <button class="button-primary" type="submit" disabled={*sending}>
                        {if *sending { "Sending…" } else { "Send Message" }}
                    </button>
                </form>

                <div class="contact-aside">
                    <div class="glass contact-details">
                        <h3>{"Contact Information"}</h3>
                        <ul>
                            <li>
                                <a href="mailto:garvkamra24@gmail.com">{"garvkamra24@gmail.com"}</a>
                            </li>
                            <li>
                                <a href="https://github.com/Securegarv20" target="_blank" rel="noopener noreferrer">
                                    {"github.com/Securegarv20"}
                                </a>
                            </li>
                            <li>
                                <a href="https://www.linkedin.com/in/garvkamra/" target="_blank" rel="noopener noreferrer">
                                    {"linkedin.com/in/garvkamra"}
                                </a>
                            </li>
                        </ul>
                    </div>
                    <div class="glass contact-details">
                        <h3>{"Let's Connect"}</h3>
                        <p class="muted">
                            {"I'm always open to discussing new projects, creative ideas, or \
                              opportunities to be part of your vision."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
