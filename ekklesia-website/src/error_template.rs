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

use crate::components::Page::*;
use crate::errors::SiteError;
use leptos::*;
use leptos_meta::Title;

#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

/// Renders errors collected during routing or raised by the server fallback.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => create_rw_signal(outside),
        (None, Some(errors)) => errors,
        (None, None) => create_rw_signal(Errors::default()),
    };

    let errors: Vec<SiteError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_, error)| error.downcast_ref::<SiteError>().cloned())
        .collect();
    log::warn!("rendering error page: {errors:?}");

    #[cfg(feature = "ssr")]
    {
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    view! {
        <Title text="Error"/>
        <Page>
            <main class="flex-1 pt-32 pb-24 px-4 text-center">
                <h1 class="text-4xl font-bold tracking-tighter mb-6">
                    {if errors.len() > 1 { "Errors" } else { "Error" }}
                </h1>
                {errors
                    .into_iter()
                    .map(|error| {
                        let status = error.status_code();
                        view! {
                            <h2 class="text-2xl font-semibold">{status.as_u16()}</h2>
                            <p class="text-[#302f2e]/80 mb-8">{error.to_string()}</p>
                        }
                    })
                    .collect_view()}
                <a
                    href="/"
                    class="inline-flex items-center justify-center rounded-md px-6 py-3 bg-[#302f2e] text-[#fbf8fa] hover:bg-[#302f2e]/90 transition-colors"
                >
                    "Back to Ekklesia"
                </a>
            </main>
        </Page>
    }
}
