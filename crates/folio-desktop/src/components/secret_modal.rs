//! Secret entry modal shown before notes can be edited

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::notes::SecretEntry;

use crate::state::AppState;

/// Modal asking for the PIN or password
#[component]
pub fn SecretModal() -> Element {
    let mut state = use_context::<AppState>();
    let inputs = use_signal(Vec::<Option<Rc<MountedData>>>::new);

    // Move keyboard focus whenever the prompt asks for it
    use_effect(move || {
        let target = {
            let notes = state.notes.read();
            let prompt = notes.prompt();
            if !prompt.is_visible() {
                return;
            }
            tracing::trace!("Secret prompt focus request #{}", prompt.focus_generation());
            match prompt.entry() {
                SecretEntry::Pin(entry) => entry.focused(),
                SecretEntry::Password(_) => Some(0),
            }
        };

        let Some(index) = target else {
            return;
        };
        if let Some(handle) = inputs.peek().get(index).cloned().flatten() {
            spawn(async move {
                if let Err(error) = handle.set_focus(true).await {
                    tracing::debug!("Failed to focus secret input: {:?}", error);
                }
            });
        }
    });

    let (entry, error) = {
        let notes = state.notes.read();
        (notes.prompt().entry().clone(), notes.prompt().error_message())
    };

    let fields = match entry {
        SecretEntry::Pin(pin) => {
            let digits: Vec<String> = (0..pin.len())
                .map(|index| pin.slot(index).map(String::from).unwrap_or_default())
                .collect();
            rsx! {
                div {
                    class: "pin-inputs",
                    for (index, digit) in digits.into_iter().enumerate() {
                        input {
                            key: "{index}",
                            class: "pin-digit",
                            r#type: "text",
                            inputmode: "numeric",
                            autocomplete: "off",
                            value: "{digit}",
                            autofocus: index == 0,
                            onmounted: move |evt| remember_input(inputs, index, &evt),
                            onfocus: move |_| {
                                if let SecretEntry::Pin(entry) = state.notes.write().prompt_mut().entry_mut() {
                                    entry.focus(index);
                                }
                            },
                            oninput: move |evt: FormEvent| {
                                if let SecretEntry::Pin(entry) = state.notes.write().prompt_mut().entry_mut() {
                                    entry.input(index, &evt.value());
                                }
                            },
                            onkeydown: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Backspace {
                                    if let SecretEntry::Pin(entry) = state.notes.write().prompt_mut().entry_mut() {
                                        entry.backspace(index);
                                    }
                                } else {
                                    handle_submit_keys(state, &evt);
                                }
                            },
                        }
                    }
                }
            }
        }
        SecretEntry::Password(text) => rsx! {
            input {
                class: "password-input",
                r#type: "password",
                placeholder: "Password",
                value: "{text}",
                autofocus: true,
                onmounted: move |evt| remember_input(inputs, 0, &evt),
                oninput: move |evt: FormEvent| {
                    *state.notes.write().prompt_mut().entry_mut() = SecretEntry::Password(evt.value());
                },
                onkeydown: move |evt: KeyboardEvent| handle_submit_keys(state, &evt),
            }
        },
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| state.notes.write().dismiss_prompt(),

            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "modal-title", "Unlock Notes" }
                {fields}
                p { class: "secret-error", "{error}" }

                button {
                    class: "button button-primary",
                    onclick: move |_| submit_secret(state),
                    "Unlock"
                }
            }
        }
    }
}

fn remember_input(mut inputs: Signal<Vec<Option<Rc<MountedData>>>>, index: usize, evt: &MountedEvent) {
    let mut handles = inputs.write();
    if handles.len() <= index {
        handles.resize(index + 1, None);
    }
    handles[index] = Some(evt.data());
}

fn handle_submit_keys(mut state: AppState, evt: &KeyboardEvent) {
    match evt.key() {
        Key::Enter => submit_secret(state),
        Key::Escape => state.notes.write().dismiss_prompt(),
        _ => {}
    }
}

fn submit_secret(mut state: AppState) {
    // Failures are shown inline by the prompt itself.
    let _ = state.notes.write().submit_prompt();
}
