mod tests {
    use palette_chase::color::{BLACK, scale_color};
    use palette_chase::{
        ConfigError, DEFAULT_PALETTES, DialInput, DialReadError, Duration, InputEvent,
        InputQueue, LightShow, OutputDriver, PaletteCollection, QueueFull, Rgb, ShowConfig,
        StripSlot, TransmitError,
    };

    const MAX_LEDS: usize = 32;
    const QUEUE: usize = 4;

    /// Dial reading that maps to half brightness
    const HALF_DIAL: u32 = 1_437_500;

    #[derive(Default)]
    struct RecordingOutput {
        writes: [usize; 2],
        fail: bool,
    }

    impl OutputDriver for RecordingOutput {
        fn write(&mut self, slot: StripSlot, _colors: &[Rgb]) -> Result<(), TransmitError> {
            self.writes[slot.index()] += 1;
            if self.fail { Err(TransmitError) } else { Ok(()) }
        }
    }

    struct FixedDial(Result<u32, DialReadError>);

    impl DialInput for FixedDial {
        fn read_microvolts(&mut self) -> Result<u32, DialReadError> {
            self.0
        }
    }

    type TestShow<'a> = LightShow<'a, RecordingOutput, FixedDial, MAX_LEDS, QUEUE>;

    fn show_with(
        queue: &InputQueue<QUEUE>,
        output: RecordingOutput,
        dial: Result<u32, DialReadError>,
    ) -> TestShow<'_> {
        LightShow::new(
            &ShowConfig::default(),
            PaletteCollection::default(),
            output,
            FixedDial(dial),
            queue,
        )
        .unwrap()
    }

    fn show(queue: &InputQueue<QUEUE>) -> TestShow<'_> {
        show_with(queue, RecordingOutput::default(), Ok(HALF_DIAL))
    }

    fn is_black(frame: &[Rgb]) -> bool {
        frame.iter().all(|color| *color == BLACK)
    }

    #[test]
    fn test_initial_state() {
        let queue = InputQueue::new();
        let show = show(&queue);
        let state = show.state();

        assert_eq!(state.palette_index(), 0);
        assert_eq!(state.cursor(StripSlot::First), 0);
        assert_eq!(state.cursor(StripSlot::Second), 0);
        assert!(state.animate());
        assert!(!state.reverse());
        assert!(state.is_on());
        assert_eq!(state.brightness(), 0.1);
        assert_eq!(show.frame(StripSlot::First).len(), 32);
        assert_eq!(show.frame(StripSlot::Second).len(), 30);
    }

    #[test]
    fn test_start_renders_both_strips() {
        let queue = InputQueue::new();
        let mut show = show(&queue);

        show.start();

        assert_eq!(show.output().writes, [1, 1]);
        let expected = scale_color(DEFAULT_PALETTES[0].colors[0], 0.1);
        assert_eq!(show.frame(StripSlot::Second)[0], expected);
    }

    #[test]
    fn test_tick_renders_then_samples_dial() {
        let queue = InputQueue::new();
        let mut show = show(&queue);

        let delay = show.tick();

        assert_eq!(delay, Duration::from_millis(50));
        assert_eq!(show.output().writes, [1, 1]);
        assert_eq!(show.state().brightness(), 0.2);
        // frame was rendered before the dial moved brightness
        let expected = scale_color(DEFAULT_PALETTES[0].colors[0], 0.1);
        assert_eq!(show.frame(StripSlot::Second)[0], expected);
    }

    #[test]
    fn test_palette_cycle_returns_to_start() {
        let queue = InputQueue::new();
        let mut show = show(&queue);
        show.state_mut().toggle_animate();
        show.state_mut().set_cursor(StripSlot::First, 2);
        show.state_mut().set_cursor(StripSlot::Second, 1);

        for _ in 0..DEFAULT_PALETTES.len() {
            show.handle(InputEvent::PaletteNext);
        }

        assert_eq!(show.state().palette_index(), 0);
        assert_eq!(show.state().cursor(StripSlot::First), 0);
        assert_eq!(show.state().cursor(StripSlot::Second), 0);
    }

    #[test]
    fn test_palette_switch_renders_immediately() {
        let queue = InputQueue::new();
        let mut show = show(&queue);
        show.state_mut().set_brightness(1.0);
        show.state_mut().set_cursor(StripSlot::Second, 5);

        show.handle(InputEvent::PaletteNext);

        assert_eq!(show.state().palette_index(), 1);
        assert_eq!(show.output().writes, [1, 1]);
        assert_eq!(show.frame(StripSlot::Second)[0], DEFAULT_PALETTES[1].colors[0]);
        assert_eq!(show.frame(StripSlot::First)[0], DEFAULT_PALETTES[1].colors[0]);
    }

    #[test]
    fn test_power_off_renders_black() {
        let queue = InputQueue::new();
        let mut show = show(&queue);

        show.handle(InputEvent::TogglePower);

        assert!(!show.state().is_on());
        assert_eq!(show.state().brightness(), 0.0);
        assert_eq!(show.output().writes, [1, 1]);
        assert!(is_black(show.frame(StripSlot::First)));
        assert!(is_black(show.frame(StripSlot::Second)));

        show.tick();
        assert_eq!(show.output().writes, [1, 1]);
        assert_eq!(show.state().brightness(), 0.0);
    }

    #[test]
    fn test_power_on_samples_dial_before_render() {
        let queue = InputQueue::new();
        let mut show = show(&queue);

        show.handle(InputEvent::TogglePower);
        show.handle(InputEvent::TogglePower);

        assert!(show.state().is_on());
        assert_eq!(show.state().brightness(), 0.1);
        assert!(!is_black(show.frame(StripSlot::Second)));
        assert_eq!(show.output().writes, [2, 2]);
    }

    #[test]
    fn test_queued_events_applied_on_tick() {
        let queue = InputQueue::new();
        let mut show = show(&queue);

        assert!(queue.post(InputEvent::ToggleAnimate));
        assert!(queue.post(InputEvent::ToggleReverse));
        assert!(show.state().animate());

        show.tick();

        assert!(queue.is_empty());
        assert!(!show.state().animate());
        assert!(show.state().reverse());
        assert_eq!(show.state().cursor(StripSlot::First), 0);
    }

    #[test]
    fn test_full_queue_rejects_event() {
        let queue = InputQueue::<QUEUE>::new();

        for _ in 0..QUEUE {
            queue.try_post(InputEvent::PaletteNext).unwrap();
        }

        assert_eq!(
            queue.try_post(InputEvent::TogglePower),
            Err(QueueFull(InputEvent::TogglePower))
        );
        assert!(!queue.post(InputEvent::ToggleAnimate));
        assert_eq!(queue.len(), QUEUE);
    }

    #[test]
    fn test_drain_yields_events_in_order() {
        let queue = InputQueue::<QUEUE>::new();
        queue.post(InputEvent::TogglePower);
        queue.post(InputEvent::ToggleReverse);
        queue.post(InputEvent::PaletteNext);

        let mut drain = queue.drain();

        assert_eq!(drain.next(), Some(InputEvent::TogglePower));
        assert_eq!(drain.next(), Some(InputEvent::ToggleReverse));
        assert_eq!(drain.next(), Some(InputEvent::PaletteNext));
        assert_eq!(drain.next(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_power_toggle_from_queue_renders_once() {
        let queue = InputQueue::new();
        let mut show = show(&queue);
        queue.post(InputEvent::TogglePower);

        show.tick();

        assert!(!show.state().is_on());
        assert_eq!(show.output().writes, [1, 1]);
        assert!(is_black(show.frame(StripSlot::First)));
    }

    #[test]
    fn test_dial_failure_keeps_brightness() {
        let queue = InputQueue::new();
        let mut show = show_with(&queue, RecordingOutput::default(), Err(DialReadError));

        show.tick();
        show.tick();

        assert_eq!(show.state().brightness(), 0.1);
    }

    #[test]
    fn test_transmit_failure_does_not_stop_loop() {
        let queue = InputQueue::new();
        let output = RecordingOutput {
            fail: true,
            ..Default::default()
        };
        let mut show = show_with(&queue, output, Ok(HALF_DIAL));

        show.tick();
        show.tick();

        assert_eq!(show.output().writes, [2, 2]);
        assert_eq!(show.state().cursor(StripSlot::First), 14);
    }

    #[test]
    fn test_rejects_empty_strip() {
        let queue = InputQueue::<QUEUE>::new();
        let mut config = ShowConfig::default();
        config.strips[1].led_count = 0;

        let result: Result<TestShow<'_>, _> = LightShow::new(
            &config,
            PaletteCollection::default(),
            RecordingOutput::default(),
            FixedDial(Ok(0)),
            &queue,
        );

        assert_eq!(
            result.err(),
            Some(ConfigError::EmptyStrip {
                slot: StripSlot::Second
            })
        );
    }

    #[test]
    fn test_rejects_strip_longer_than_buffer() {
        let mut config = ShowConfig::default();
        config.strips[0].led_count = 40;

        assert_eq!(
            config.validate::<MAX_LEDS>(),
            Err(ConfigError::StripTooLong {
                slot: StripSlot::First,
                led_count: 40,
                capacity: MAX_LEDS
            })
        );
        assert_eq!(ShowConfig::default().validate::<MAX_LEDS>(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_tick_period() {
        let config = ShowConfig {
            tick_period: Duration::from_millis(0),
            ..ShowConfig::default()
        };

        assert_eq!(
            config.validate::<MAX_LEDS>(),
            Err(ConfigError::InvalidTickPeriod)
        );
    }

    #[test]
    fn test_rejects_zero_dial_full_scale() {
        let queue = InputQueue::<QUEUE>::new();
        let mut config = ShowConfig::default();
        config.dial.full_scale_microvolts = 0;

        assert_eq!(
            config.validate::<MAX_LEDS>(),
            Err(ConfigError::InvalidDialCalibration)
        );

        let result: Result<TestShow<'_>, _> = LightShow::new(
            &config,
            PaletteCollection::default(),
            RecordingOutput::default(),
            FixedDial(Ok(HALF_DIAL)),
            &queue,
        );
        assert_eq!(result.err(), Some(ConfigError::InvalidDialCalibration));
    }
}
