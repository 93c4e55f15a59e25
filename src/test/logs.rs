//! Collects the events emitted on the current thread.

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
struct Record {
    level: Level,
    text: String,
}

#[derive(Default)]
struct TextVisitor(String);

impl Visit for TextVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        use std::fmt::Write;

        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Record>>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = TextVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(Record {
            level: *event.metadata().level(),
            text: visitor.0,
        });
    }
}

/// Keeps recording until dropped. Needs a current thread runtime.
pub(crate) struct Capture {
    records: Recorder,
    _guard: tracing::subscriber::DefaultGuard,
}

impl Capture {
    pub fn install() -> Self {
        let records = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(records.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        Self {
            records,
            _guard: guard,
        }
    }

    /// Only records what `filter` lets through.
    pub fn install_filtered(filter: EnvFilter) -> Self {
        let records = Recorder::default();
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(records.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        Self {
            records,
            _guard: guard,
        }
    }

    pub fn count(&self, level: Level) -> usize {
        self.records
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.level == level)
            .count()
    }

    pub fn count_matching(&self, level: Level, needle: &str) -> usize {
        self.records
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.level == level && record.text.contains(needle))
            .count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.records
            .0
            .lock()
            .unwrap()
            .iter()
            .any(|record| record.text.contains(needle))
    }
}
