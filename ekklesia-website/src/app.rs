/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::content::PRODUCT_NAME;
use crate::error_template::ErrorTemplate;
use crate::errors::SiteError;
use crate::pages::Home::*;
use crate::theme::{BACKGROUND, GLOBAL_CSS};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DESCRIPTION: &str = "Ekklesia is the all-in-one SaaS solution for modern churches. Manage members, events, donations, sermons and communication with ease.";

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - {PRODUCT_NAME}");
    provide_meta_context();

    let json_ld = format!(
        r#"
    {{
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "{PRODUCT_NAME}",
        "operatingSystem": "Any",
        "applicationCategory": "BusinessApplication",
        "offers": {{
            "@type": "AggregateOffer",
            "lowPrice": "49",
            "priceCurrency": "USD"
        }},
        "description": "{DESCRIPTION}"
    }}
    "#
    );

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/ekklesia_website.css"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>
        <Style id="ekklesia-motion">{GLOBAL_CSS}</Style>
        <Title formatter/>
        <Meta name="description" content=DESCRIPTION/>
        <Meta name="theme-color" content=BACKGROUND/>
        <Meta
            name="keywords"
            content="church management software, church administration, member management, church donations, church events, sermon streaming"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content=PRODUCT_NAME/>
        <Meta property="og:title" content="Ekklesia - Empower Your Church"/>
        <Meta property="og:description" content=DESCRIPTION/>

        // Twitter
        <Meta property="twitter:card" content="summary"/>
        <Meta property="twitter:title" content="Ekklesia - Empower Your Church"/>
        <Meta property="twitter:description" content=DESCRIPTION/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(SiteError::NotFound);
            view! { <ErrorTemplate outside_errors/> }.into_view()
        }>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
