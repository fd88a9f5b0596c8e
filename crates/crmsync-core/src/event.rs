//! CRM log events
//!
//! Events carry an optional exception, a severity level, a message and a
//! string context. They are written out through `tracing` by [`emit`].

use std::collections::BTreeMap;
use std::error::Error as StdError;

use tracing::Level;

/// Key/value pairs attached to an event, sorted by key
pub type EventContext = BTreeMap<String, String>;

/// A loggable CRM event
pub trait CrmEvent {
    /// The exception, if one was given
    fn exception(&self) -> Option<&(dyn StdError + Send + Sync + 'static)>;

    /// Severity level
    fn level(&self) -> Level;

    /// Formatted event message
    ///
    /// This is the event's own message, which is empty when none was given.
    /// Use [`ErrorEvent::exception_message`] for the exception text.
    fn message(&self) -> &str;

    /// Context for the message
    fn context(&self) -> &EventContext;
}

/// An event raised from a failure
#[derive(Debug)]
pub struct ErrorEvent {
    exception: Option<anyhow::Error>,
    message: String,
    context: EventContext,
}

impl ErrorEvent {
    /// Create an event wrapping an exception
    pub fn new(exception: impl Into<anyhow::Error>) -> Self {
        Self {
            exception: Some(exception.into()),
            message: String::new(),
            context: EventContext::new(),
        }
    }

    /// Attach a message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a context entry
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Message of the wrapped exception, including its causes
    #[must_use]
    pub fn exception_message(&self) -> Option<String> {
        self.exception.as_ref().map(|e| format!("{e:#}"))
    }
}

impl CrmEvent for ErrorEvent {
    fn exception(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.exception.as_deref()
    }

    fn level(&self) -> Level {
        Level::ERROR
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn context(&self) -> &EventContext {
        &self.context
    }
}

/// Exception-less event at a fixed level
#[derive(Debug, Clone)]
struct PlainEvent {
    level: Level,
    message: String,
    context: EventContext,
}

macro_rules! plain_event {
    ($(#[$doc:meta])* $name:ident, $level:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name(PlainEvent);

        impl $name {
            /// Create an event with a message
            pub fn new(message: impl Into<String>) -> Self {
                Self(PlainEvent {
                    level: $level,
                    message: message.into(),
                    context: EventContext::new(),
                })
            }

            /// Attach a context entry
            #[must_use]
            pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
                self.0.context.insert(key.into(), value.to_string());
                self
            }
        }

        impl CrmEvent for $name {
            fn exception(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
                None
            }

            fn level(&self) -> Level {
                self.0.level
            }

            fn message(&self) -> &str {
                &self.0.message
            }

            fn context(&self) -> &EventContext {
                &self.0.context
            }
        }
    };
}

plain_event!(
    /// A recoverable problem worth surfacing
    WarningEvent,
    Level::WARN
);

plain_event!(
    /// Normal but significant progress
    NoticeEvent,
    Level::INFO
);

/// Render an event as a single log line
#[must_use]
pub fn format_event(event: &dyn CrmEvent) -> String {
    let mut line = event.message().to_string();

    if let Some(exception) = event.exception() {
        let mut source: Option<&(dyn StdError + 'static)> =
            Some(exception as &(dyn StdError + 'static));
        while let Some(cause) = source {
            if !line.is_empty() {
                line.push_str(": ");
            }
            line.push_str(&cause.to_string());
            source = cause.source();
        }
    }

    for (key, value) in event.context() {
        line.push_str(&format!(" {key}={value}"));
    }

    line
}

/// Write an event to `tracing` at its level
pub fn emit(event: &dyn CrmEvent) {
    let line = format_event(event);
    let level = event.level();
    if level == Level::ERROR {
        tracing::error!(target: "crmsync", "{line}");
    } else if level == Level::WARN {
        tracing::warn!(target: "crmsync", "{line}");
    } else if level == Level::INFO {
        tracing::info!(target: "crmsync", "{line}");
    } else if level == Level::DEBUG {
        tracing::debug!(target: "crmsync", "{line}");
    } else {
        tracing::trace!(target: "crmsync", "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_event_accessors() {
        let event = ErrorEvent::new(anyhow::anyhow!("connection refused"))
            .with_message("Pull failed")
            .with_context("mapping", "contact");

        assert_eq!(event.level(), Level::ERROR);
        assert_eq!(event.message(), "Pull failed");
        assert_eq!(event.context().get("mapping").map(String::as_str), Some("contact"));
        assert_eq!(event.exception_message().as_deref(), Some("connection refused"));
        assert!(event.exception().is_some());
    }

    #[test]
    fn test_error_event_without_message_is_empty() {
        let event = ErrorEvent::new(anyhow::anyhow!("boom"));

        assert_eq!(event.message(), "");
        assert_eq!(format_event(&event), "boom");
    }

    #[test]
    fn test_format_event_walks_nested_causes() {
        let root = anyhow::anyhow!("Mapping B does not push.");
        let event = ErrorEvent::new(
            root.context("Failed to execute push command")
                .context("Command failed"),
        )
        .with_context("command", "push");

        assert_eq!(
            format_event(&event),
            "Command failed: Failed to execute push command: Mapping B does not push. command=push"
        );
        assert_eq!(
            event.exception_message().as_deref(),
            Some("Command failed: Failed to execute push command: Mapping B does not push.")
        );
    }

    #[test]
    fn test_plain_event_levels() {
        let warning = WarningEvent::new("Mapping x does not exist.");
        let notice = NoticeEvent::new("Dispatching push").with_context("mapping", "a");

        assert_eq!(warning.level(), Level::WARN);
        assert_eq!(notice.level(), Level::INFO);
        assert!(warning.exception().is_none());
        assert_eq!(notice.context().len(), 1);
    }

    #[test]
    fn test_format_event_orders_context_by_key() {
        let event = ErrorEvent::new(anyhow::anyhow!("timeout"))
            .with_message("Push failed")
            .with_context("selector", "ALL")
            .with_context("direction", "push");

        assert_eq!(
            format_event(&event),
            "Push failed: timeout direction=push selector=ALL"
        );
    }

    #[test]
    fn test_format_event_includes_causes() {
        let inner = anyhow::anyhow!("Mapping B does not push.");
        let event = ErrorEvent::new(inner.context("Failed to execute push command"));

        assert_eq!(
            format_event(&event),
            "Failed to execute push command: Mapping B does not push."
        );
    }

    #[test]
    fn test_emit_does_not_panic_without_subscriber() {
        emit(&NoticeEvent::new("nothing listening"));
        emit(&ErrorEvent::new(anyhow::anyhow!("still nothing")));
    }
}
