//! Light show main loop
//!
//! `LightShow` owns the animation state and everything that touches it.
//! Buttons talk to it only through the input queue, which is drained at the
//! start of each tick, so state changes never race with a render pass.

use embassy_time::{Duration, Timer};

use crate::OutputDriver;
use crate::color::Rgb;
use crate::config::ShowConfig;
use crate::dial::{DialInput, DialReader};
use crate::error::ConfigError;
use crate::input::{InputEvent, InputQueue};
use crate::log::trace;
use crate::palette::PaletteCollection;
use crate::renderer::Renderer;
use crate::state::{AnimationState, StripSlot};

/// Two-strip palette chase controlled by two buttons and a dial
///
/// `MAX_LEDS` is the frame buffer capacity of each strip, `QUEUE` the
/// capacity of the input queue.
pub struct LightShow<'a, O, A, const MAX_LEDS: usize, const QUEUE: usize>
where
    O: OutputDriver,
    A: DialInput,
{
    // External dependencies and configuration
    output: O,
    events: &'a InputQueue<QUEUE>,
    palettes: PaletteCollection,
    tick_period: Duration,

    // Internal state
    state: AnimationState,

    // Internal dependencies
    renderer: Renderer<MAX_LEDS>,
    dial: DialReader<A>,
}

impl<'a, O, A, const MAX_LEDS: usize, const QUEUE: usize> LightShow<'a, O, A, MAX_LEDS, QUEUE>
where
    O: OutputDriver,
    A: DialInput,
{
    /// Build the show, rejecting an invalid configuration up front
    pub fn new(
        config: &ShowConfig,
        palettes: PaletteCollection,
        output: O,
        dial: A,
        events: &'a InputQueue<QUEUE>,
    ) -> Result<Self, ConfigError> {
        config.validate::<MAX_LEDS>()?;
        Ok(Self {
            output,
            events,
            palettes,
            tick_period: config.tick_period,
            state: AnimationState::new(config.initial_brightness),
            renderer: Renderer::new(&config.strips)?,
            dial: DialReader::new(dial, config.dial),
        })
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Mutable access to the state, for setting up a scene before `start`
    pub fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    /// Last frame sent to a strip
    pub fn frame(&self, slot: StripSlot) -> &[Rgb] {
        self.renderer.frame(slot)
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Show the first frame at boot
    pub fn start(&mut self) {
        self.render_pass();
    }

    /// Run one iteration of the main loop
    ///
    /// Applies queued input, then renders and samples the dial if the show
    /// is on. Returns how long to wait before the next tick. The delay is
    /// fixed: a slow tick is not made up for.
    pub fn tick(&mut self) -> Duration {
        let events = self.events;
        for event in events.drain() {
            self.handle(event);
        }

        if self.state.is_on() {
            self.render_pass();
            self.dial.sample(&mut self.state);
        }

        self.tick_period
    }

    /// Run the show forever
    pub async fn run(&mut self) -> ! {
        self.start();
        loop {
            let delay = self.tick();
            Timer::after(delay).await;
        }
    }

    /// Apply a single input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PaletteNext => self.next_palette(),
            InputEvent::TogglePower => self.toggle_power(),
            InputEvent::ToggleAnimate => self.state.toggle_animate(),
            InputEvent::ToggleReverse => self.state.toggle_reverse(),
        }
    }

    fn next_palette(&mut self) {
        let index = self.palettes.next_index(self.state.palette_index());
        trace!("[LightShow] palette {}", self.palettes.get(index).name);
        self.state.select_palette(index);
        self.render_pass();
    }

    fn toggle_power(&mut self) {
        if self.state.is_on() {
            trace!("[LightShow] power off");
            self.state.power_off();
        } else {
            trace!("[LightShow] power on");
            self.state.power_on();
            self.dial.sample(&mut self.state);
        }
        self.render_pass();
    }

    fn render_pass(&mut self) {
        self.renderer
            .render_pass(&mut self.state, &self.palettes, &mut self.output);
    }
}
