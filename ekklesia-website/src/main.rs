use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use leptos::*;
        use axum::Router;
        use ekklesia_website::app::*;
        use ekklesia_website::config::LogSettings;
        use ekklesia_website::fallback::file_and_error_handler;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use tower_http::compression::CompressionLayer;

        #[tokio::main]
        async fn main() {
            let log_settings = LogSettings::from_env();
            simple_logger::init_with_level(log_settings.level).expect("couldn't initialize logging");

            let conf = get_configuration(None).await.expect("couldn't read leptos configuration");
            let leptos_options = conf.leptos_options;
            let addr = leptos_options.site_addr;
            let routes = generate_route_list(App);

            let app = Router::new()
                .leptos_routes(&leptos_options, routes, App)
                .fallback(file_and_error_handler)
                .with_state(leptos_options)
                .layer(CompressionLayer::new());

            logging::log!("listening on http://{}", &addr);
            if let Err(err) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
                log::error!("server stopped: {err}");
            }
        }
    } else {
        pub fn main() {
            #[cfg(feature = "csr")]
            {
                use ekklesia_website::app::App;
                use ekklesia_website::config::DEFAULT_CLIENT_LEVEL;
                use leptos::*;

                console_error_panic_hook::set_once();
                if let Err(err) = console_log::init_with_level(DEFAULT_CLIENT_LEVEL) {
                    logging::warn!("console logger already set: {err}");
                }
                mount_to_body(|| view! { <App/> });
            }
        }
    }
}
