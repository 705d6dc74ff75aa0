use gazeplot_chart_render::{ChartKind, ChartRenderer, RendererState};
use gazeplot_landmark_model::GazeSample;
use proptest::prelude::*;

#[test]
fn sequential_updates_keep_last_hundred() {
    let mut renderer: ChartRenderer = ChartRenderer::default();
    renderer.create_x_chart();

    let n = renderer.style().max_points;
    for i in 1..=(n + 5) {
        renderer.update_x(0.1 * i as f64).unwrap();
    }

    let expected: Vec<f64> = (6..=(n + 5)).map(|i| 0.1 * i as f64).collect();
    assert_eq!(renderer.x_series().to_vec(), expected);
}

#[test]
fn reset_then_create_reproduces_empty_charts() {
    let mut renderer: ChartRenderer = ChartRenderer::default();
    for kind in ChartKind::ALL {
        renderer.create(kind);
    }
    renderer.update(GazeSample::new(0.2, 0.3)).unwrap();
    renderer.reset();

    for _ in 0..3 {
        for kind in ChartKind::ALL {
            renderer.create(kind);
        }
    }
    assert_eq!(renderer.state(), RendererState::Created);
    assert!(renderer.x_series().is_empty());
    assert!(renderer.y_series().is_empty());
    assert!(renderer.direction_series().is_empty());
}

#[test]
fn snapshot_contains_current_line() {
    let mut renderer: ChartRenderer = ChartRenderer::default();
    renderer.create_y_chart();
    renderer.update_y(0.0).unwrap();
    let svg = renderer.snapshot(ChartKind::GazeY).unwrap();
    assert!(svg.contains("Vertical Gaze Movement (Y)"));
    assert!(svg.contains(r#"d="M0,240""#));
}

proptest! {
    #[test]
    fn path_always_matches_window(values in proptest::collection::vec(-1.0f64..1.0, 1..250)) {
        let mut renderer: ChartRenderer = ChartRenderer::default();
        renderer.create_x_chart();
        for value in &values {
            renderer.update_x(*value).unwrap();
            let len = renderer.x_series().len();
            let d = renderer
                .handle(ChartKind::GazeX)
                .and_then(|h| h.path_data())
                .unwrap()
                .to_string();
            prop_assert_eq!(d.matches('M').count(), 1);
            prop_assert_eq!(d.matches('L').count(), len - 1);
        }
        prop_assert_eq!(renderer.x_series().len(), values.len().min(100));
    }
}
