//! Debounced push buttons with short and long press detection.
//!
//! The pin is polled at a fixed rate. A raw level only counts once it has
//! been stable for the debounce time; the gesture state machine then runs
//! on the debounced level.
//!
//! | Gesture     | Condition                                           |
//! |-------------|-----------------------------------------------------|
//! | Short press | released before the long press time (or, without    |
//! |             | `short_press_waits_release`, as soon as pressed)    |
//! | Long press  | held for the long press time, reported once         |

use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;

use crate::config::ButtonConfig;
use crate::input::{ButtonBinding, InputEvent, InputQueue};
use crate::log::trace;

/// Interval between pin reads in [`watch_button`]
pub const BUTTON_POLL_PERIOD: Duration = Duration::from_millis(5);

/// Gesture recognized on a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonGesture {
    ShortPress,
    LongPress,
}

impl ButtonBinding {
    /// Event bound to a gesture
    pub const fn event(&self, gesture: ButtonGesture) -> InputEvent {
        match gesture {
            ButtonGesture::ShortPress => self.short,
            ButtonGesture::LongPress => self.long,
        }
    }
}

/// Debounce and gesture state machine, independent of the pin
#[derive(Debug, Clone)]
pub struct Debouncer {
    debounce: Duration,
    long_press: Duration,
    short_press_waits_release: bool,
    /// Last raw level and when it was first seen
    raw: bool,
    raw_since: Instant,
    /// Debounced level
    pressed: bool,
    pressed_since: Instant,
    long_fired: bool,
}

impl Debouncer {
    pub const fn new(config: &ButtonConfig) -> Self {
        Self {
            debounce: config.debounce,
            long_press: config.long_press,
            short_press_waits_release: config.short_press_waits_release,
            raw: false,
            raw_since: Instant::from_millis(0),
            pressed: false,
            pressed_since: Instant::from_millis(0),
            long_fired: false,
        }
    }

    /// Debounced pressed state
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feed the current raw level, returns a gesture if one completed
    pub fn update(&mut self, raw_pressed: bool, now: Instant) -> Option<ButtonGesture> {
        if raw_pressed != self.raw {
            self.raw = raw_pressed;
            self.raw_since = now;
        }

        if self.raw != self.pressed {
            if now.saturating_duration_since(self.raw_since) < self.debounce {
                return None;
            }
            self.pressed = self.raw;
            return self.on_edge(now);
        }

        if self.pressed
            && !self.long_fired
            && now.saturating_duration_since(self.pressed_since) >= self.long_press
        {
            self.long_fired = true;
            return Some(ButtonGesture::LongPress);
        }

        None
    }

    fn on_edge(&mut self, now: Instant) -> Option<ButtonGesture> {
        if self.pressed {
            self.pressed_since = now;
            self.long_fired = false;
            if self.short_press_waits_release {
                None
            } else {
                Some(ButtonGesture::ShortPress)
            }
        } else if self.short_press_waits_release && !self.long_fired {
            Some(ButtonGesture::ShortPress)
        } else {
            None
        }
    }
}

/// A push button on a GPIO input
pub struct Button<P: InputPin> {
    pin: P,
    active_low: bool,
    debouncer: Debouncer,
}

impl<P: InputPin> Button<P> {
    pub const fn new(pin: P, config: &ButtonConfig) -> Self {
        Self {
            pin,
            active_low: config.active_low,
            debouncer: Debouncer::new(config),
        }
    }

    /// Read the pin and advance the gesture state machine
    pub fn poll(&mut self, now: Instant) -> Result<Option<ButtonGesture>, P::Error> {
        let pressed = if self.active_low {
            self.pin.is_low()?
        } else {
            self.pin.is_high()?
        };
        Ok(self.debouncer.update(pressed, now))
    }

    /// Poll once and post the event bound to a recognized gesture
    ///
    /// Returns the event even when the queue was full and it got dropped.
    /// Pin read errors are logged and treated as no gesture.
    pub fn poll_and_post<const SIZE: usize>(
        &mut self,
        now: Instant,
        binding: ButtonBinding,
        queue: &InputQueue<SIZE>,
    ) -> Option<InputEvent> {
        match self.poll(now) {
            Ok(Some(gesture)) => {
                let event = binding.event(gesture);
                queue.post(event);
                Some(event)
            }
            Ok(None) => None,
            Err(err) => {
                trace!("[Button] pin read failed: {:?}", err);
                None
            }
        }
    }
}

/// Button task: poll forever and queue the bound events
pub async fn watch_button<P: InputPin, const SIZE: usize>(
    mut button: Button<P>,
    binding: ButtonBinding,
    queue: &InputQueue<SIZE>,
) -> ! {
    loop {
        button.poll_and_post(Instant::now(), binding, queue);
        Timer::after(BUTTON_POLL_PERIOD).await;
    }
}
