use std::cell::Cell;
use std::rc::Rc;

use progress_charts::ChartError;
use progress_charts::api::{LineChartConfig, LineChartRenderer, ResizeCoordinator, presets};
use progress_charts::core::Viewport;
use progress_charts::render::{NullRenderer, Surface};

fn container(size: &Rc<Cell<Viewport>>) -> impl Fn() -> Viewport + 'static {
    let size = Rc::clone(size);
    move || size.get()
}

fn dashboard() -> (
    ResizeCoordinator<NullRenderer>,
    Rc<Cell<Viewport>>,
    Rc<Cell<Viewport>>,
) {
    let jump_size = Rc::new(Cell::new(Viewport::new(600, 300)));
    let dash_size = Rc::new(Cell::new(Viewport::new(500, 250)));

    let mut coordinator = ResizeCoordinator::new(LineChartRenderer::default());
    coordinator
        .register(
            &presets::jump_chart(),
            container(&jump_size),
            NullRenderer::default(),
        )
        .expect("register jump");
    coordinator
        .register(
            &presets::dash_chart(),
            container(&dash_size),
            NullRenderer::default(),
        )
        .expect("register dash");
    (coordinator, jump_size, dash_size)
}

#[test]
fn attach_sizes_and_draws_every_chart_in_registration_order() {
    let (mut coordinator, _jump_size, _dash_size) = dashboard();

    let report = coordinator.attach();
    assert!(report.is_success());
    assert_eq!(report.rendered, ["jump", "dash"]);

    let jump = coordinator.surface("jump").expect("jump surface");
    assert_eq!(jump.viewport(), Viewport::new(600, 300));
    assert_eq!(jump.render_count, 1);
    assert_eq!(jump.last_circle_count, 11);
    // 6 value labels + labels at indices 0, 2, 4, 6, 8, 10.
    assert_eq!(jump.last_text_count, 12);

    let dash = coordinator.surface("dash").expect("dash surface");
    assert_eq!(dash.viewport(), Viewport::new(500, 250));
    let frame = dash.last_frame.as_ref().expect("dash frame");
    assert_eq!(frame.texts[0].text, "4.5");
    assert_eq!(frame.texts[5].text, "4.2");
}

#[test]
fn resize_propagates_new_container_sizes() {
    let (mut coordinator, jump_size, _dash_size) = dashboard();
    coordinator.attach();

    jump_size.set(Viewport::new(900, 400));
    let report = coordinator.handle_resize();
    assert!(report.is_success());

    let jump = coordinator.surface("jump").expect("jump surface");
    assert_eq!(jump.viewport(), Viewport::new(900, 400));
    assert_eq!(jump.render_count, 2);
    let frame = jump.last_frame.as_ref().expect("frame");
    assert_eq!(frame.viewport, Viewport::new(900, 400));
    assert_eq!(frame.circles[10].center_x, 860.0);

    let dash = coordinator.surface("dash").expect("dash surface");
    assert_eq!(dash.render_count, 2);
}

#[test]
fn detached_coordinator_ignores_resize_notifications() {
    let (mut coordinator, jump_size, _dash_size) = dashboard();

    let report = coordinator.handle_resize();
    assert!(report.rendered.is_empty());
    assert_eq!(
        coordinator.surface("jump").expect("jump").render_count,
        0
    );

    coordinator.attach();
    coordinator.detach();
    assert!(!coordinator.is_attached());

    jump_size.set(Viewport::new(1000, 500));
    coordinator.handle_resize();
    let jump = coordinator.surface("jump").expect("jump");
    assert_eq!(jump.render_count, 1);
    assert_eq!(jump.viewport(), Viewport::new(600, 300));
}

#[test]
fn failing_chart_does_not_block_the_others() {
    let (mut coordinator, jump_size, _dash_size) = dashboard();
    jump_size.set(Viewport::new(60, 60));

    let report = coordinator.attach();
    assert!(!report.is_success());
    assert_eq!(report.rendered, ["dash"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "jump");
    assert!(matches!(
        report.failed[0].1,
        ChartError::InvalidViewport {
            width: 60,
            height: 60
        }
    ));

    jump_size.set(Viewport::new(0, 300));
    let report = coordinator.handle_resize();
    assert_eq!(report.failed[0].0, "jump");
}

#[test]
fn registration_validates_ids_and_inputs() {
    let (mut coordinator, _jump_size, _dash_size) = dashboard();

    let err = coordinator
        .register(
            &presets::jump_chart(),
            Viewport::new(100, 100),
            NullRenderer::default(),
        )
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::DuplicateChart(id) if id == "jump"));

    let broken = LineChartConfig::new("broken", vec![1.0], vec!["a".to_owned()], 0.0, 1.0);
    let err = coordinator
        .register(&broken, Viewport::new(100, 100), NullRenderer::default())
        .expect_err("too short");
    assert!(matches!(err, ChartError::InvalidChartInput(_)));
    assert_eq!(coordinator.len(), 2);
}

#[test]
fn unregister_returns_the_surface() {
    let (mut coordinator, _jump_size, _dash_size) = dashboard();
    coordinator.attach();

    let surface = coordinator.unregister("jump").expect("unregister");
    assert_eq!(surface.render_count, 1);
    assert_eq!(coordinator.chart_ids().collect::<Vec<_>>(), ["dash"]);

    let err = coordinator.unregister("jump").expect_err("already gone");
    assert!(matches!(err, ChartError::UnknownChart(id) if id == "jump"));
}
