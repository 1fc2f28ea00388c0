use anyhow::{Result, anyhow};
use serde::Deserialize;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt,
    layer::{Layered, SubscriberExt},
    reload,
    util::SubscriberInitExt,
};

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    /// Emit one JSON object per event instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

type Filtered = Layered<reload::Layer<EnvFilter, Registry>, Registry>;
type FormatLayer = Box<dyn Layer<Filtered> + Send + Sync>;

pub struct Logger {
    filter_handle: reload::Handle<EnvFilter, Registry>,
    format_handle: reload::Handle<FormatLayer, Filtered>,
}

fn format_layer(json: bool) -> FormatLayer {
    if json {
        fmt::layer().json().with_current_span(true).boxed()
    } else {
        fmt::layer().boxed()
    }
}

impl Logger {
    pub fn new_bootstrap() -> Self {
        let (filter, filter_handle) = reload::Layer::new(EnvFilter::new("info"));
        let (format, format_handle) = reload::Layer::new(format_layer(false));

        tracing_subscriber::registry()
            .with(filter)
            .with(format)
            .init();

        Self {
            filter_handle,
            format_handle,
        }
    }

    pub fn reload_from_config(&self, config: &LogConfig) -> Result<()> {
        let filter = EnvFilter::try_new(&config.filter).map_err(|e| anyhow!(e))?;
        self.filter_handle.reload(filter).map_err(|e| anyhow!(e))?;
        if config.json {
            self.format_handle
                .reload(format_layer(true))
                .map_err(|e| anyhow!(e))?;
        }
        Ok(())
    }
}
