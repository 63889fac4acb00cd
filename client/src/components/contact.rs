//! Contact section: contact-method cards and the contact form.
//!
//! ERROR HANDLING
//! ==============
//! Field messages render under each input once the visitor has tried to
//! submit. Transport and server failures leave the input intact and show a
//! single status line above the submit button.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::icon::SvgIcon;
use crate::components::reveal::Reveal;
use crate::content::contact::METHODS;
use crate::state::contact_form::{ContactFormState, Input, SubmitStatus};
use crate::util::icon::Icon;
use crate::util::visibility::stagger_ms;

#[component]
pub fn Contact() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut form = None;
        state.update(|s| form = s.begin_submit());
        let Some(form) = form else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_contact(&form).await;
                if let Err(e) = &outcome {
                    log::warn!("contact submission failed: {}", e.message());
                }
                state.update(|s| s.finish(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    let methods = METHODS
        .iter()
        .enumerate()
        .map(|(i, method)| {
            view! {
                <Reveal delay_ms=stagger_ms(i)>
                    <a class="contact__method" href=method.link target="_blank" rel="noopener noreferrer">
                        <span class="contact__method-icon" style=method.accent.css()>
                            <SvgIcon icon=method.icon />
                        </span>
                        <span class="contact__method-text">
                            <span class="contact__method-title">{method.title}</span>
                            <span class="contact__method-value">{method.value}</span>
                        </span>
                    </a>
                </Reveal>
            }
        })
        .collect_view();

    let status_line = move || match state.with(|s| s.status.clone()) {
        SubmitStatus::Sent(_) => Some(
            view! {
                <p class="contact__status contact__status--ok" role="status">
                    "Thank you! Your message has been sent successfully."
                </p>
            }
            .into_any(),
        ),
        SubmitStatus::Failed(message) => Some(
            view! {
                <p class="contact__status contact__status--error" role="alert">
                    {message}
                </p>
            }
            .into_any(),
        ),
        SubmitStatus::Idle | SubmitStatus::Sending => None,
    };

    view! {
        <section id="contact" class="section contact">
            <Reveal>
                <h2 class="section__title">"Let's Work Together"</h2>
                <p class="section__subtitle">
                    "Have a project in mind or want to discuss opportunities? I'd love to hear from you."
                </p>
            </Reveal>

            <div class="contact__grid">
                <div class="contact__methods">{methods}</div>

                <Reveal delay_ms=200>
                    <form class="contact__form" novalidate=true on:submit=on_submit>
                        <div class="contact__row">
                            <FormField state=state input=Input::Name label="Name" kind="text" required=true />
                            <FormField state=state input=Input::Email label="Email" kind="email" required=true />
                        </div>
                        <FormField state=state input=Input::Company label="Company" kind="text" />
                        <FormField state=state input=Input::Message label="Message" kind="textarea" required=true />

                        {status_line}

                        <button
                            type="submit"
                            class="btn btn--primary contact__submit"
                            disabled=move || state.with(ContactFormState::is_sending)
                        >
                            {move || {
                                if state.with(ContactFormState::is_sending) { "Sending..." } else { "Send Message" }
                            }}
                            <SvgIcon icon=Icon::Send />
                        </button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}

/// Labelled input with its inline error.
#[component]
fn FormField(
    state: RwSignal<ContactFormState>,
    input: Input,
    label: &'static str,
    kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = format!("contact-{}", label.to_lowercase());
    let error = move || input.field().and_then(|field| state.with(|s| s.error(field)));
    let value = move || state.with(|s| s.value(input));
    let on_input = move |ev: leptos::ev::Event| state.update(|s| s.set(input, event_target_value(&ev)));
    let label_text = if required { format!("{label} *") } else { label.to_owned() };

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=id.clone()
                rows="5"
                class:contact__input--invalid=move || error().is_some()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type=kind
                class:contact__input--invalid=move || error().is_some()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="contact__field">
            <label for=id>{label_text}</label>
            {control}
            {move || error().map(|message| view! { <p class="contact__error">{message}</p> })}
        </div>
    }
}
