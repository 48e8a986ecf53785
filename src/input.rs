//! User input events and the queue that carries them
//!
//! Button tasks translate gestures into `InputEvent`s and post them to an
//! `InputQueue`. The show drains the queue at the start of every tick, so
//! events are applied one at a time and never interleave with a render
//! pass. Posting is interrupt-safe; the queue lives behind a
//! `critical-section` mutex and can be placed in a `static`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::error::QueueFull;
use crate::log::trace;

/// Action requested by a button gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Switch to the next palette
    PaletteNext,
    /// Turn the show on or off
    TogglePower,
    /// Freeze or resume the chase
    ToggleAnimate,
    /// Flip the chase direction
    ToggleReverse,
}

/// Default capacity of the input queue
pub const INPUT_QUEUE_SIZE: usize = 8;

/// Events bound to the two gestures of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBinding {
    pub short: InputEvent,
    pub long: InputEvent,
}

impl ButtonBinding {
    /// Color button: next palette, hold for power
    pub const COLOR: Self = Self {
        short: InputEvent::PaletteNext,
        long: InputEvent::TogglePower,
    };

    /// Animate button: pause the chase, hold to reverse it
    pub const ANIMATE: Self = Self {
        short: InputEvent::ToggleAnimate,
        long: InputEvent::ToggleReverse,
    };
}

/// Pending input events, oldest first
///
/// Many producers may post; the show is the only consumer.
pub struct InputQueue<const SIZE: usize = INPUT_QUEUE_SIZE> {
    pending: Mutex<RefCell<Deque<InputEvent, SIZE>>>,
}

impl<const SIZE: usize> InputQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue an event, handing it back if the queue is full
    pub fn try_post(&self, event: InputEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            self.pending
                .borrow(cs)
                .borrow_mut()
                .push_back(event)
                .map_err(QueueFull)
        })
    }

    /// Queue an event; when the queue is full the event is dropped
    ///
    /// Returns whether the event was queued.
    pub fn post(&self, event: InputEvent) -> bool {
        match self.try_post(event) {
            Ok(()) => true,
            Err(QueueFull(event)) => {
                trace!("[InputQueue] full, dropped {:?}", event);
                false
            }
        }
    }

    /// Take the oldest pending event
    pub fn next_event(&self) -> Option<InputEvent> {
        critical_section::with(|cs| self.pending.borrow(cs).borrow_mut().pop_front())
    }

    /// Iterate over pending events until the queue is empty
    ///
    /// Events posted while draining are picked up by the same drain.
    pub fn drain(&self) -> Drain<'_, SIZE> {
        Drain { queue: self }
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for InputQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`InputQueue::drain`]
pub struct Drain<'q, const SIZE: usize> {
    queue: &'q InputQueue<SIZE>,
}

impl<const SIZE: usize> Iterator for Drain<'_, SIZE> {
    type Item = InputEvent;

    fn next(&mut self) -> Option<InputEvent> {
        self.queue.next_event()
    }
}
