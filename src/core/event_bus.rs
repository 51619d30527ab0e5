//! Event queue for widget -> app communication.
//!
//! Widgets return queued events from their render functions; the app
//! emits them onto the bus and drains it once per frame with `poll()`,
//! in emit order.

use log::warn;
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Maximum events in queue before oldest are evicted
const MAX_QUEUE_SIZE: usize = 256;

/// Marker trait for events. Events must be Send + Sync + 'static.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Boxed event for queue storage
pub type BoxedEvent = Box<dyn Event>;

#[derive(Clone, Default)]
pub struct EventBus {
    queue: Arc<Mutex<Vec<BoxedEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the event for `poll()`.
    pub fn emit<E: Event>(&self, event: E) {
        self.emit_boxed(Box::new(event));
    }

    /// Emit an already boxed event (widget action queues).
    pub fn emit_boxed(&self, event: BoxedEvent) {
        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        if queue.len() >= MAX_QUEUE_SIZE {
            let evict_count = queue.len() / 2;
            warn!(
                "EventBus queue full ({} events), evicting oldest {}",
                queue.len(),
                evict_count
            );
            queue.drain(0..evict_count);
        }
        queue.push(event);
    }

    /// Take every event queued since the last poll.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    pub fn queue_len(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Downcast a queued event to its concrete type.
///
/// Must deref to `dyn Event` first: the blanket impl also covers
/// `Box<dyn Event>` itself, which would make every downcast fail.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct AddSlide(i32);

    #[derive(Clone, Debug)]
    struct Rename(String);

    #[test]
    fn test_boxed_emit_keeps_concrete_type() {
        let bus = EventBus::new();
        let boxed: BoxedEvent = Box::new(AddSlide(7));
        bus.emit_boxed(boxed);
        let events = bus.poll();
        assert_eq!(downcast_event::<AddSlide>(&events[0]).map(|e| e.0), Some(7));
    }

    #[test]
    fn test_poll_drains_in_order() {
        let bus = EventBus::new();
        bus.emit(AddSlide(1));
        bus.emit(Rename("b".into()));
        bus.emit(AddSlide(2));

        let events = bus.poll();
        assert_eq!(events.len(), 3);
        assert_eq!(downcast_event::<AddSlide>(&events[0]).map(|e| e.0), Some(1));
        assert!(downcast_event::<AddSlide>(&events[1]).is_none());
        assert_eq!(downcast_event::<Rename>(&events[1]).map(|e| e.0.as_str()), Some("b"));
        assert!(bus.poll().is_empty());
    }

    #[test]
    fn test_queue_eviction() {
        let bus = EventBus::new();
        for i in 0..(MAX_QUEUE_SIZE as i32 + 1) {
            bus.emit(AddSlide(i));
        }
        let events = bus.poll();
        assert_eq!(events.len(), MAX_QUEUE_SIZE / 2 + 1);
        assert_eq!(
            downcast_event::<AddSlide>(events.last().unwrap()).map(|e| e.0),
            Some(MAX_QUEUE_SIZE as i32)
        );
    }
}
