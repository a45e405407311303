use std::rc::Rc;
use std::time::Duration;

use hello_factory::{
    application::ExampleFactory,
    engine::{Engine, GameFactory, ProcessTime},
    input::KeyboardEvent,
};
use winit::keyboard::KeyCode;

fn started() -> (Engine, ExampleFactory) {
    let mut factory = ExampleFactory::new();
    let mut engine = Engine::new();
    assert!(engine.start(&mut factory));
    engine.initialize();
    (engine, factory)
}

fn frame_time(tick: u64) -> ProcessTime {
    ProcessTime {
        delta: Duration::from_millis(20),
        elapsed: Duration::from_millis(20 * tick),
        tick,
    }
}

#[test]
fn engine_registers_frame_renderer_and_factory_modules() {
    let (engine, factory) = started();

    // frame, renderer, input, statistics
    assert_eq!(engine.module_count(), 4);
    let frame = engine.frame().expect("engine keeps the factory frame");
    assert!(Rc::ptr_eq(&frame, &factory.frame()));
}

#[test]
fn renderer_draws_every_tick_after_setup() {
    let (mut engine, factory) = started();

    for tick in 0..3 {
        assert!(engine.tick_with(frame_time(tick)));
    }

    assert_eq!(factory.renderer().borrow().frames_rendered(), 3);
}

#[test]
fn statistics_report_after_one_second_of_frames() {
    let (mut engine, factory) = started();

    for tick in 0..50 {
        engine.tick_with(frame_time(tick));
    }

    let stats = factory.statistics().expect("statistics module");
    let report = stats.borrow().last_report().copied().expect("one report");
    assert_eq!(report.frames, 50);
}

#[test]
fn escape_release_stops_the_running_engine() {
    let (mut engine, factory) = started();
    let input = factory.input().expect("input module");

    input
        .borrow_mut()
        .push_key(KeyboardEvent::released(KeyCode::Enter));
    assert!(engine.tick_with(frame_time(0)));

    input
        .borrow_mut()
        .push_key(KeyboardEvent::released(KeyCode::Escape));
    assert!(!engine.tick_with(frame_time(1)));
    assert!(!engine.is_running());
    assert!(!engine.tick());

    engine.shutdown();
}
