//! Contact form with inline validation and a simulated submission.

use leptos::prelude::*;

use crate::state::form::{Field, FormState, SubmitPhase};

/// Single-line inputs; the message textarea is rendered separately.
const TEXT_INPUTS: &[(Field, &str)] = &[
    (Field::Name, "text"),
    (Field::Email, "email"),
    (Field::Subject, "text"),
];

/// Contact form wired per field: blur validates, editing clears the inline
/// error, submit re-validates everything before running the simulated send.
///
/// While the send is pending the submit button is disabled and relabeled, so
/// a second submission cannot start; the button is restored whether the send
/// succeeds or fails.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let phase = RwSignal::new(SubmitPhase::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut all_valid = false;
        form.update(|f| {
            f.clear_errors();
            all_valid = f.validate_all();
        });
        if !all_valid || phase.get_untracked().is_pending() {
            return;
        }

        run_submission(form, phase);
    };

    let inputs = TEXT_INPUTS
        .iter()
        .map(|&(field, input_type)| {
            let name = field.name();
            let error_id = format!("{name}Error");

            view! {
                <div class="form-group">
                    <label class="form-label" for=name>
                        {field.label()}
                    </label>
                    <input
                        id=name
                        name=name
                        type=input_type
                        class="form-control"
                        class:error=move || form.with(|f| f.field(field).error.is_some())
                        prop:value=move || form.with(|f| f.field(field).value.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_value(field, event_target_value(&ev)));
                        }
                        on:blur=move |_| {
                            form.update(|f| {
                                f.validate_field(field);
                            });
                        }
                    />
                    <div
                        id=error_id
                        class="form-error"
                        class:visible=move || form.with(|f| f.field(field).error.is_some())
                    >
                        {move || form.with(|f| f.field(field).error.clone().unwrap_or_default())}
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let message = Field::Message;

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            {inputs}

            <div class="form-group">
                <label class="form-label" for="message">
                    {message.label()}
                </label>
                <textarea
                    id="message"
                    name="message"
                    rows=6
                    class="form-control"
                    class:error=move || form.with(|f| f.message.error.is_some())
                    prop:value=move || form.with(|f| f.message.value.clone())
                    on:input=move |ev| {
                        form.update(|f| f.set_value(message, event_target_value(&ev)));
                    }
                    on:blur=move |_| {
                        form.update(|f| {
                            f.validate_field(message);
                        });
                    }
                ></textarea>
                <div
                    id="messageError"
                    class="form-error"
                    class:visible=move || form.with(|f| f.message.error.is_some())
                >
                    {move || form.with(|f| f.message.error.clone().unwrap_or_default())}
                </div>
            </div>

            <button
                class="btn btn--primary form-submit"
                type="submit"
                prop:disabled=move || phase.get().is_pending()
            >
                {move || if phase.get().is_pending() { "Sending..." } else { "Send Message" }}
            </button>

            <div
                id="formSuccess"
                class="form-success"
                class:visible=move || phase.get().is_succeeded()
                class:hidden=move || !phase.get().is_succeeded()
            >
                "Thanks for reaching out! Your message has been sent."
            </div>
        </form>
    }
}

/// Drive the submission state machine with real timers: pending for the
/// simulated latency, success notice for its display window, then idle.
fn run_submission(form: RwSignal<FormState>, phase: RwSignal<SubmitPhase>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::form::NOTICE_DELAY_MS;

        phase.update(|p| *p = p.submit(now_ms()));

        leptos::task::spawn_local(async move {
            match simulate_send().await {
                Ok(()) => {
                    phase.update(|p| *p = p.advance(now_ms()));
                    form.update(FormState::reset);

                    gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_DELAY_MS))
                        .await;
                    phase.update(|p| *p = p.advance(now_ms()));
                }
                Err(message) => {
                    leptos::logging::warn!("contact form submission failed: {message}");
                    alert_send_failure();
                    phase.update(|p| *p = p.fail());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, phase);
    }
}

/// Stand-in for a real network request: fixed latency, then success. There is
/// no backend; the form never leaves the page.
#[cfg(feature = "hydrate")]
async fn simulate_send() -> Result<(), String> {
    use crate::state::form::SEND_DELAY_MS;

    gloo_timers::future::sleep(std::time::Duration::from_millis(SEND_DELAY_MS)).await;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn alert_send_failure() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(
            "There was an error sending your message. Please try again.",
        );
    }
}

#[cfg(feature = "hydrate")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}
