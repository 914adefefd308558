use anyhow::Result;
use gpui::*;
use gpui_component::Root;
use gpui_component::theme::{Theme, ThemeMode as UiThemeMode};
use labelboard::app::LabelEditor;
use labelboard::settings::{Settings, ThemeMode};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn setup_logging() {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    // Default to info, debug for our own crate
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,labelboard=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}

fn main() -> Result<()> {
    setup_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting labelboard");

    let theme = Settings::load().theme;

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);
        let mode = match theme {
            ThemeMode::Light => UiThemeMode::Light,
            ThemeMode::Dark => UiThemeMode::Dark,
        };
        Theme::change(mode, None, cx);

        let bounds = Bounds::centered(None, size(px(1200.0), px(800.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Labelboard".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(LabelEditor::new);
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("failed to open window: {}", e);
            cx.quit();
        }
        cx.activate(true);
    });

    Ok(())
}
