use dioxus::prelude::*;

use crate::site::ContactSettings;

/// What the visitor has typed so far. Nothing here ever leaves the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Accept the draft without sending it, clear every field and hand back the acknowledgement.
    pub fn submit(&mut self, settings: &ContactSettings) -> String {
        let draft = std::mem::take(self);
        tracing::info!(
            has_name = !draft.name.trim().is_empty(),
            has_email = !draft.email.trim().is_empty(),
            message_len = draft.message.len(),
            "contact form submitted; delivery is not implemented"
        );
        settings.confirmation.clone()
    }
}

#[component]
pub fn ContactForm(settings: ContactSettings) -> Element {
    let mut draft = use_signal(ContactDraft::default);
    let mut confirmation = use_signal(|| None::<String>);
    // Bumped per submission so an older timer cannot hide a newer banner.
    let mut generation = use_signal(|| 0u32);

    let dismiss_after_secs = settings.dismiss_after_secs;
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let message = draft.write().submit(&settings);
        confirmation.set(Some(message));
        let current = generation() + 1;
        generation.set(current);
        schedule_dismiss(confirmation, generation, current, dismiss_after_secs);
    };

    let current_draft = draft();

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section-title", "Contact" }
            if let Some(message) = confirmation() {
                div { class: "form-confirmation", role: "status",
                    span { "{message}" }
                    button {
                        class: "confirmation-close",
                        r#type: "button",
                        onclick: move |_| confirmation.set(None),
                        "×"
                    }
                }
            }
            form { class: "contact-form", onsubmit,
                input {
                    r#type: "text",
                    name: "name",
                    placeholder: "Your name",
                    required: true,
                    value: "{current_draft.name}",
                    oninput: move |evt| draft.write().name = evt.value(),
                }
                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{current_draft.email}",
                    oninput: move |evt| draft.write().email = evt.value(),
                }
                textarea {
                    name: "message",
                    placeholder: "Tell me about your project",
                    rows: "5",
                    value: "{current_draft.message}",
                    oninput: move |evt| draft.write().message = evt.value(),
                }
                button { class: "submit-button", r#type: "submit", "Send" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(
    mut confirmation: Signal<Option<String>>,
    generation: Signal<u32>,
    issued: u32,
    after_secs: u32,
) {
    if after_secs == 0 {
        return;
    }
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(after_secs.saturating_mul(1000)).await;
        if *generation.peek() == issued {
            confirmation.set(None);
        }
    });
}

/// Without a browser timer the banner stays until closed.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(
    _confirmation: Signal<Option<String>>,
    _generation: Signal<u32>,
    _issued: u32,
    _after_secs: u32,
) {
}
