mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use panel_feedback::color::Rgb;
    use panel_feedback::flush_scheduler::FlushTimings;
    use panel_feedback::model::{TBAR_LEDS_VARIABLE, TBAR_VALUE_VARIABLE};
    use panel_feedback::{
        ControlState, EngineConfig, FeedbackEngine, FeedbackValue, HostEvent, SurfaceEvent,
        SurfaceModel,
    };

    use crate::common::{RecordingTransport, Write, init_logger};

    const T: bool = true;
    const F: bool = false;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn new_engine(model: SurfaceModel) -> FeedbackEngine<RecordingTransport> {
        FeedbackEngine::new(model, RecordingTransport::default(), &EngineConfig::default())
    }

    #[test]
    fn test_init_blanks_panel() {
        let mut engine = new_engine(SurfaceModel::AtemMicroPanel);
        engine.init();
        assert_eq!(engine.transport().writes, vec![Write::Clear]);
    }

    #[test]
    fn test_red_on_rgb_button() {
        let mut engine = new_engine(SurfaceModel::AtemMicroPanel);
        engine.request_draw("cut", Some(Rgb::new(255, 0, 0)), at(0));
        assert_eq!(engine.tick(at(5)), None);

        assert_eq!(
            engine.transport().writes,
            vec![Write::States(vec![ControlState::new(
                "cut",
                FeedbackValue::Rgb {
                    red: true,
                    green: false,
                    blue: false
                }
            )])]
        );
    }

    #[test]
    fn test_grey_on_single_light_button() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.request_draw("cam3", Some(Rgb::new(120, 120, 120)), at(0));
        engine.tick(at(5));

        assert_eq!(
            engine.transport().state_writes(),
            vec![&vec![ControlState::new("cam3", FeedbackValue::OnOff(true))]]
        );
    }

    #[test]
    fn test_rapid_draws_coalesce_to_last() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.request_draw("cam1", Some(Rgb::new(255, 255, 255)), at(0));
        engine.request_draw("cam1", Some(Rgb::new(0, 0, 0)), at(1));
        engine.request_draw("cam2", Some(Rgb::new(200, 0, 0)), at(2));
        engine.request_draw("cam1", None, at(3));

        assert_eq!(engine.tick(at(4)), Some(at(8)));
        assert!(engine.transport().writes.is_empty());
        assert_eq!(engine.tick(at(8)), None);

        let writes = engine.transport().state_writes();
        assert_eq!(writes.len(), 1);
        let batch = writes[0];
        assert_eq!(batch.len(), 2);
        assert!(batch.contains(&ControlState::new("cam1", FeedbackValue::OnOff(false))));
        assert!(batch.contains(&ControlState::new("cam2", FeedbackValue::OnOff(true))));
    }

    #[test]
    fn test_ceiling_bounds_latency() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        let mut ms = 0;
        while engine.transport().writes.is_empty() {
            engine.request_draw("cam1", Some(Rgb::new(255, 0, 0)), at(ms));
            ms += 2;
            engine.tick(at(ms));
        }
        assert_eq!(ms, 20);
    }

    #[test]
    fn test_custom_config() {
        let config = EngineConfig {
            timings: FlushTimings {
                quiet: Duration::from_millis(50),
                ceiling: Duration::from_millis(100),
            },
            threshold: 200,
        };
        let mut engine =
            FeedbackEngine::new(SurfaceModel::SpeedEditor, RecordingTransport::default(), &config);
        engine.request_draw("cam1", Some(Rgb::new(150, 150, 150)), at(0));
        engine.tick(at(5));
        assert!(engine.transport().writes.is_empty());

        engine.tick(at(50));
        assert_eq!(
            engine.transport().state_writes(),
            vec![&vec![ControlState::new("cam1", FeedbackValue::OnOff(false))]]
        );
    }

    #[test]
    fn test_unknown_and_undrawable_controls_are_skipped() {
        let mut engine = new_engine(SurfaceModel::AtemMicroPanel);
        engine.request_draw("cam1", Some(Rgb::new(255, 0, 0)), at(0));
        engine.request_draw("tbar", Some(Rgb::new(255, 0, 0)), at(0));

        assert!(engine.pending().is_empty());
        assert_eq!(engine.next_deadline(), None);
    }

    #[test]
    fn test_unlit_controls_are_not_written() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.request_draw("in", Some(Rgb::new(255, 255, 255)), at(0));
        engine.tick(at(5));
        assert!(engine.transport().writes.is_empty());
    }

    #[test]
    fn test_failed_write_does_not_stop_engine() {
        init_logger();
        let mut engine = FeedbackEngine::new(
            SurfaceModel::SpeedEditor,
            RecordingTransport::failing(),
            &EngineConfig::default(),
        );
        engine.request_draw("cam1", Some(Rgb::new(255, 0, 0)), at(0));
        engine.tick(at(5));
        engine.request_draw("cam2", Some(Rgb::new(255, 0, 0)), at(10));
        engine.tick(at(15));

        assert_eq!(engine.transport().state_writes().len(), 2);
        assert!(engine.pending().is_empty());
    }

    #[test]
    fn test_flush_now() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.request_draw("cam1", Some(Rgb::new(255, 0, 0)), at(0));
        engine.flush();
        assert_eq!(engine.transport().state_writes().len(), 1);
        assert_eq!(engine.next_deadline(), None);

        // Nothing left to write
        engine.flush();
        assert_eq!(engine.transport().writes.len(), 1);
    }

    #[test]
    fn test_tbar_variable() {
        let mut engine = new_engine(SurfaceModel::AtemMicroPanel);
        engine.set_numeric_variable(TBAR_LEDS_VARIABLE, "5");
        engine.set_numeric_variable(TBAR_LEDS_VARIABLE, "-3");

        let mut five = vec![F; 11];
        five.extend([T; 5]);
        let mut minus_three = vec![T; 3];
        minus_three.extend([F; 13]);
        assert_eq!(
            engine.transport().writes,
            vec![Write::Bar("tbar", five), Write::Bar("tbar", minus_three)]
        );
    }

    #[test]
    fn test_invalid_variables_are_ignored() {
        init_logger();
        let mut engine = new_engine(SurfaceModel::AtemMicroPanel);
        engine.set_numeric_variable(TBAR_LEDS_VARIABLE, "lots");
        engine.set_numeric_variable(TBAR_VALUE_VARIABLE, "1");
        engine.set_numeric_variable("unknown", "1");
        assert!(engine.transport().writes.is_empty());

        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.set_numeric_variable(TBAR_LEDS_VARIABLE, "4");
        assert!(engine.transport().writes.is_empty());
    }

    #[test]
    fn test_lock_progress() {
        let lit = FeedbackValue::Rgb {
            red: true,
            green: true,
            blue: true,
        };
        let mut engine = new_engine(SurfaceModel::AtemMicroPanel);
        engine.notify_lock_status(true, 3);
        engine.notify_lock_status(true, 0);
        engine.notify_lock_status(true, -4);
        engine.notify_lock_status(false, 5);
        engine.notify_lock_status(true, 99);

        let writes = engine.transport().state_writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(
            writes[0],
            &vec![
                ControlState::new("program1", lit),
                ControlState::new("program2", lit),
                ControlState::new("program3", lit),
            ]
        );
        assert_eq!(writes[1].len(), 10);
        assert_eq!(writes[1][9].id, "program10");
    }

    #[test]
    fn test_lock_progress_without_list_is_noop() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.notify_lock_status(true, 3);
        assert!(engine.transport().writes.is_empty());
    }

    #[test]
    fn test_close_drops_pending() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.request_draw("cam1", Some(Rgb::new(255, 0, 0)), at(0));
        let transport = engine.close();
        assert_eq!(transport.writes, vec![Write::Clear]);
    }

    #[test]
    fn test_close_keeps_dispatched_flush() {
        let mut engine = new_engine(SurfaceModel::SpeedEditor);
        engine.request_draw("cam1", Some(Rgb::new(255, 0, 0)), at(0));
        engine.tick(at(5));
        engine.request_draw("cam2", Some(Rgb::new(255, 0, 0)), at(6));
        let transport = engine.close();

        assert_eq!(transport.writes.len(), 2);
        assert_eq!(transport.writes[1], Write::Clear);
    }

    #[test]
    fn test_input_events() {
        let engine = new_engine(SurfaceModel::AtemMicroPanel);
        assert_eq!(
            engine.handle_input(SurfaceEvent::ButtonDown("cut")),
            Some(HostEvent::KeyDown("cut"))
        );
        assert_eq!(
            engine.handle_input(SurfaceEvent::ButtonUp("cut")),
            Some(HostEvent::KeyUp("cut"))
        );
        assert_eq!(
            engine.handle_input(SurfaceEvent::TBar {
                id: "tbar",
                level: 0.5
            }),
            Some(HostEvent::VariableValue {
                name: TBAR_VALUE_VARIABLE,
                value: 0.5
            })
        );
        assert_eq!(
            engine.handle_input(SurfaceEvent::Jog {
                id: "jog-wheel",
                delta: 3
            }),
            None
        );
        assert_eq!(engine.handle_input(SurfaceEvent::BatteryLevel(80)), None);
        assert_eq!(
            engine.handle_input(SurfaceEvent::Error),
            Some(HostEvent::Disconnect)
        );
    }
}
