mod app;

mod domain {
    pub mod entities {
        pub mod change;
        pub mod grid;
    }
    pub mod text {
        pub mod accents;
        pub mod strip;
    }
}

mod infra {
    pub mod export {
        pub mod xlsx;
    }
    pub mod import {
        pub mod csv;
        pub mod dispatch;
        pub mod xlsx;

        pub use dispatch::decoder_for_path;
    }
}

mod platform {
    pub mod desktop {
        pub mod blocking;
        pub mod config;
        pub mod logging;
    }
}

mod ui {
    pub mod state {
        pub mod app_state;
        pub mod notice;
    }
    pub mod style;
}

mod usecase {
    pub mod ports {
        pub mod codec;
    }
    pub mod services {
        pub mod export_service;
        pub mod import_service;
        pub mod normalize_service;
        pub mod preview_service;
    }
}


use platform::desktop::config::AppConfig;
use platform::desktop::logging;

fn main() {
    let config = AppConfig::load().expect("should resolve application data directory");
    logging::init(&config);

    let webview_data_dir = config
        .webview_data_dir()
        .expect("should resolve and create WebView2 data directory");
    tracing::info!(data_dir = %config.data_dir.display(), "starting");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title(config.window_title.clone()),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(app::App);
}
