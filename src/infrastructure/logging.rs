use std::sync::Arc;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};
use crate::domain::{EventEmitter, SyncEventKind};

pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
}

/// Event emitter that writes sync events to the tracing log
pub fn tracing_emitter() -> EventEmitter {
    Arc::new(|kind: SyncEventKind, title: &str, description: &str| match kind {
        SyncEventKind::Error => tracing::error!(event = %kind, "{}: {}", title, description),
        SyncEventKind::Warning => tracing::warn!(event = %kind, "{}: {}", title, description),
        SyncEventKind::Info | SyncEventKind::Success => {
            tracing::info!(event = %kind, "{}: {}", title, description)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_emitter_accepts_every_kind() {
        let emitter = tracing_emitter();
        for kind in [
            SyncEventKind::Warning,
            SyncEventKind::Error,
            SyncEventKind::Info,
            SyncEventKind::Success,
        ] {
            emitter(kind, "title", "description");
        }
    }
}
