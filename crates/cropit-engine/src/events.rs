// Author: Dustin Pilgrim
// License: MIT

use std::sync::mpsc;

use cropit_core::CropValue;

/// Lifecycle notifications, each carrying the value snapshot projected in
/// the configured return mode at emit time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropEvent {
    /// The region was (re)built from configuration: `reset`, option change,
    /// container re-layout.
    Initialized { value: CropValue },

    SelectStart { value: CropValue },
    SelectMove { value: CropValue },
    SelectEnd { value: CropValue },
}

/// Fan-out to any number of observers over plain channels.
///
/// Channels instead of callbacks keep emission non-reentrant: an observer
/// can never call back into the engine while it is mid-transition.
/// Disconnected receivers are pruned on the next emit.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::Sender<CropEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<CropEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn emit(&mut self, event: CropEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn observer_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value() -> CropValue {
        CropValue::new(1.0, 2.0, 3.0, 4.0)
    }

    #[test]
    fn multiple_observers_see_every_event() {
        let mut bus = EventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.emit(CropEvent::SelectStart { value: value() });
        bus.emit(CropEvent::SelectEnd { value: value() });

        assert_eq!(a.try_iter().count(), 2);
        assert_eq!(b.try_iter().count(), 2);
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut bus = EventBus::new();
        let keep = bus.subscribe();
        drop(bus.subscribe());

        bus.emit(CropEvent::SelectMove { value: value() });
        assert_eq!(bus.observer_count(), 1);
        assert_eq!(keep.try_iter().count(), 1);
    }
}
