use tracing::{Level, debug, error, info, warn};

use super::Event;

pub trait EventSink {
    fn record(&self, event: &Event);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn record(&self, event: &Event) {
        (**self).record(event)
    }
}

/// Forwards events to the `tracing` subscriber at the event's own level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &Event) {
        match event.level() {
            Level::ERROR => error!("{event}"),
            Level::WARN => warn!("{event}"),
            Level::INFO => info!("{event}"),
            _ => debug!("{event}"),
        }
    }
}

/// Keeps every event in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    events: std::cell::RefCell<Vec<Event>>,
}

#[cfg(test)]
impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn record(&self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::default();
        let first = Event::Finished {
            created: 0,
            base: PathBuf::from("a"),
        };
        let second = Event::Finished {
            created: 1,
            base: PathBuf::from("b"),
        };

        sink.record(&first);
        (&sink).record(&second);

        assert_eq!(sink.events(), vec![first, second]);
    }

    #[test]
    fn tracing_sink_accepts_every_level() {
        let sink = TracingSink;
        let events = [
            Event::Failed {
                path: PathBuf::from("a"),
                message: "boom".to_string(),
            },
            Event::Renamed {
                requested: PathBuf::from("a"),
                actual: PathBuf::from("a01"),
            },
            Event::Finished {
                created: 3,
                base: PathBuf::from("x"),
            },
        ];

        for event in &events {
            sink.record(event);
        }
    }
}
