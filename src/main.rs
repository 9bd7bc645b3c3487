use std::sync::Arc;

use reco_widget::{
    api, render::LoggingNavigator, RendererRegistry, UiNode, Widget, WidgetConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reco_widget=info".into()),
        )
        .init();

    let config = WidgetConfig::from_env()?;
    let source = api::source_for(&config)?;

    let registry = Arc::new(RendererRegistry::with_defaults());
    let mut widget = Widget::new(
        UiNode::element("div"),
        config,
        source,
        registry,
        Arc::new(LoggingNavigator),
    );

    widget.load().await;
    print!("{}", widget.mount());

    Ok(())
}
