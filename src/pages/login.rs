//! Admin login page for the analyzer dashboard.

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::state::login::SubmissionState;

/// Login form driving the idle/submitting/succeeded/failed state machine.
///
/// Submitting disables the button and clears any prior outcome; the spawned
/// login call resolves the state to exactly one of succeeded or failed.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submission = RwSignal::new(SubmissionState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submission.get().is_submitting() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        submission.set(SubmissionState::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.login(&email_value, &password_value).await {
                    Ok(payload) => {
                        leptos::logging::log!("login succeeded: {payload}");
                        submission.set(SubmissionState::Succeeded);
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        submission.set(SubmissionState::failed(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, email_value, password_value);
        }
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h1 class="login-title">"Website Analyzer"</h1>
                <p class="login-subtitle">"Admin Dashboard Login"</p>
                <form on:submit=on_submit>
                    <div class="input-group">
                        <label for="email">"Email Address"</label>
                        <input
                            type="email"
                            id="email"
                            required=true
                            placeholder="you@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="input-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            required=true
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || submission.get().error_message().is_some()>
                        <p class="error-message">
                            {move || submission.get().error_message().unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || submission.get().succeeded()>
                        <p class="success-message">"Login successful! Redirecting..."</p>
                    </Show>

                    <button
                        type="submit"
                        class="login-button"
                        disabled=move || submission.get().is_submitting()
                    >
                        <Show
                            when=move || submission.get().is_submitting()
                            fallback=|| view! { "Sign In" }
                        >
                            <Spinner/>
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}
