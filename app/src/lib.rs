pub mod components;
pub mod content;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

use pages::NotFound;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=content::DESCRIPTION/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Title text=content::OWNER/>

        // the avatar is above the fold, start fetching it with the document
        <Link rel="preload" as_="image" href=content::PROFILE_IMAGE.src/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                // Nothing on the page is loaded asynchronously, render all of it on the server.
                <Route
                    path=StaticSegment("")
                    view=pages::home::LandingPage
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
