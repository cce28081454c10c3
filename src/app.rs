//! Root application component and server-side HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::net::api::ApiClient;
use crate::pages::login::LoginPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client context and renders the login screen; the
/// dashboard has no other routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiClient::from_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/analyzer-dashboard.css"/>
        <Title text="Website Analyzer"/>

        <LoginPage/>
    }
}
