use crate::auth::use_auth;
use crate::task::use_cancel_token;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Demo accounts shown under the form.
const DEMO_ACCOUNTS: [(&str, &str, &str); 3] = [
    ("Business", "business@example.com", "business123"),
    ("Waste Provider", "provider@example.com", "provider123"),
    ("Government", "government@example.com", "government123"),
];

/// Email/password sign-in.
///
/// A successful login flips the session to active; the route guard then
/// forwards to the role's dashboard, so this page never navigates itself.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let token = use_cancel_token();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let token = token.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let Some(result) = auth.login(email(), password(), token).await else {
                // Unmounted while the request was in flight.
                return;
            };

            if let Err(err) = result {
                if err.field_errors.is_empty() {
                    error_msg.set(Some(err.message));
                } else {
                    field_errors.set(err.field_errors);
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            section { class: "card auth-card",
                div { class: "auth-header",
                    h1 { class: "auth-title", "Sign In" }
                    p { class: "auth-description", "Access your waste management dashboard" }
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", role: "alert", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "email", "Email" }
                        input {
                            class: "input",
                            r#type: "email",
                            id: "email",
                            placeholder: "user@example.com",
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("email") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            class: "input",
                            r#type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                div { class: "auth-demo",
                    p { class: "auth-demo-title", "Demo accounts" }
                    for (label, demo_email, demo_password) in DEMO_ACCOUNTS {
                        button {
                            r#type: "button",
                            class: "auth-demo-account",
                            onclick: move |_| {
                                email.set(demo_email.to_string());
                                password.set(demo_password.to_string());
                            },
                            strong { "{label}" }
                            span { "{demo_email}" }
                        }
                    }
                }
            }
        }
    }
}
