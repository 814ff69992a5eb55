//! Tracing capture for integration tests.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

/// One captured event.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Layer pushing every event into a shared vector.
struct CaptureLayer {
    records: Arc<Mutex<Vec<Record>>>,
}

struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        self.records.lock().push(Record {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message,
        });
    }
}

/// Run `f` with a capturing subscriber as the thread default and return
/// its result plus every event it emitted.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Record>) {
    let records = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        records: records.clone(),
    });
    let out = tracing::subscriber::with_default(subscriber, f);
    let records = records.lock().clone();
    (out, records)
}

/// DEBUG events from the tokenfault target.
pub fn debug_records(records: &[Record]) -> Vec<&Record> {
    records
        .iter()
        .filter(|r| r.level == Level::DEBUG && r.target == tokenfault::sink::LOG_TARGET)
        .collect()
}
