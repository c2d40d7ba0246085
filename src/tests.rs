use crate::types::*;
use crate::ui::Painter;
use test_log::test;
fn held(keys: &[Key]) -> InputState {
    let mut input = InputState::default();
    for key in keys {
        input.press(*key)
    }
    input
}
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}
fn painter(plot: &Plot) -> Painter {
    let canvas = tiny_skia::Pixmap::new(plot.screen.x as u32, plot.screen.y as u32).unwrap();
    let mut painter = Painter::new(plot.background_color, false, canvas);
    painter.clear();
    painter
}
fn untouched(plot: &Plot, painter: &Painter) -> bool {
    let bg = plot.background_color.to_col().premultiply().to_color_u8();
    painter.canvas.pixels().iter().all(|p| *p == bg)
}
#[test]
fn starts_from_default_cubic() {
    let plot = Plot::default();
    assert_eq!(plot.state.curve, Polynomial::new(1.0, 1.0, 0.0, 0.0));
    assert_eq!(plot.state.derivative, Polynomial::new(0.0, 3.0, 2.0, 0.0));
    assert_eq!(plot.state.seek, 0.0);
}
#[test]
fn hold_increase_c2_one_tick() {
    let mut plot = Plot::default();
    plot.keybinds(&held(&[Key::Numpad4]));
    assert!(close(plot.state.curve.c2, 1.001));
    assert_eq!(plot.state.curve.c3, 1.0);
    assert_eq!(plot.state.curve.c1, 0.0);
    assert_eq!(plot.state.curve.c0, 0.0);
    assert_eq!(plot.state.derivative, plot.state.curve.derivative());
}
#[test]
fn opposite_keys_cancel() {
    let mut plot = Plot::default();
    plot.keybinds(&held(&[Key::Numpad5, Key::Numpad2, Key::Numpad7, Key::Numpad8]));
    assert_eq!(plot.state.curve.c1, 0.0);
    assert_eq!(plot.state.seek, 0.0);
}
#[test]
fn every_binding_moves_its_quantity() {
    let mut plot = Plot::default();
    let input = held(&[Key::Numpad1, Key::Numpad5, Key::Numpad3, Key::Numpad8]);
    for _ in 0..10 {
        plot.keybinds(&input);
    }
    assert!(close(plot.state.curve.c2, 0.99));
    assert!(close(plot.state.curve.c1, 0.01));
    assert!(close(plot.state.curve.c0, -0.01));
    assert!(close(plot.state.seek, 0.01));
    plot.keybinds(&held(&[Key::Numpad7, Key::Numpad6]));
    assert!(close(plot.state.seek, 0.009));
    assert!(close(plot.state.curve.c0, -0.009));
}
#[test]
fn reset_wins_over_adjustment() {
    let mut plot = Plot::default();
    plot.keybinds(&held(&[Key::Numpad8, Key::Numpad8, Key::Numpad4]));
    plot.keybinds(&held(&[Key::R, Key::Numpad6]));
    assert_eq!(plot.state.curve, Polynomial::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(plot.state.seek, 0.0);
    assert_eq!(plot.state.derivative, Polynomial::new(0.0, 0.0, 2.0, 0.0));
    assert_eq!(plot.state.tangent, Polynomial::default());
}
#[test]
fn unbound_keys_do_nothing() {
    let mut plot = Plot::default();
    plot.keybinds.c2_up = None;
    plot.keybinds(&held(&[Key::Numpad4, Key::Numpad9, Key::Numpad0]));
    assert_eq!(plot.state, State::default());
}
#[test]
fn tangent_touches_curve_at_seek() {
    let mut plot = Plot::default();
    let right = held(&[Key::Numpad8]);
    for _ in 0..250 {
        plot.keybinds(&right);
    }
    let state = plot.state;
    let slope = state.derivative.eval(state.seek);
    assert_eq!(state.tangent, Polynomial::new(0.0, 0.0, slope, 0.0));
    let offset = state.tangent_offset();
    assert_eq!(offset.y, state.curve.eval(state.seek));
    //the tangent polynomial is drawn shifted by offset, so at x = seek it is on the curve
    assert_eq!(state.tangent.eval(0.0) + offset.y, state.curve.eval(state.seek));
    let h = 1e-6;
    let secant = (state.curve.eval(state.seek + h) - state.curve.eval(state.seek - h)) / (2.0 * h);
    assert!((secant - slope).abs() < 1e-6);
}
#[test]
fn input_state_tracks_held_keys() {
    let mut input = InputState::default();
    input.press(Key::R);
    input.press(Key::R);
    assert_eq!(input.keys_down, vec![Key::R]);
    assert!(input.is_down(Some(Key::R)));
    assert!(!input.is_down(None));
    input.press(Key::Numpad1);
    input.release(Key::R);
    assert!(!input.is_down(Some(Key::R)));
    assert!(input.is_down(Some(Key::Numpad1)));
    input.reset();
    assert!(input.keys_down.is_empty());
}
#[test]
fn exit_key() {
    let plot = Plot::default();
    assert!(plot.should_exit(&held(&[Key::Escape])));
    assert!(!plot.should_exit(&held(&[Key::R])));
}
#[test]
fn origin_maps_to_center() {
    let plot = Plot::new(600, 600);
    assert_eq!(plot.to_screen(0.0, 0.0), Pos::new(300.0, 300.0));
    assert_eq!(plot.to_screen(-1.0, 1.0), Pos::new(0.0, 0.0));
    assert_eq!(plot.to_screen(1.0, -1.0), Pos::new(600.0, 600.0));
    assert_eq!(plot.to_screen(0.5, 0.5), Pos::new(450.0, 150.0));
}
#[test]
fn to_coord_inverts_to_screen() {
    let plot = Plot::new(600, 600);
    for (x, y) in [(0.0, 0.0), (0.25, -0.5), (-0.75, 0.125), (1.5, 2.0)] {
        let (a, b) = plot.to_coord(plot.to_screen(x, y));
        assert!((a - x).abs() < 1e-5 && (b - y).abs() < 1e-5);
    }
}
#[test]
fn off_canvas_sample_is_skipped() {
    let plot = Plot::new(600, 600);
    let mut painter = painter(&plot);
    //lands on (-1, 300)
    let offset = Vec2::new(-1.0 / 300.0, 0.0);
    assert_eq!(plot.to_screen(plot.bound.x + offset.x, 0.0), Pos::new(-1.0, 300.0));
    plot.draw_samples(&mut painter, &[0.0], &plot.curve_color, offset);
    assert!(untouched(&plot, &painter));
    plot.draw_samples(&mut painter, &[5.0, -5.0, f64::NAN, f64::INFINITY], &plot.curve_color, Vec2::splat(0.0));
    assert!(untouched(&plot, &painter));
}
#[test]
fn on_canvas_sample_is_plotted() {
    let plot = Plot::new(600, 600);
    let mut painter = painter(&plot);
    plot.draw_samples(&mut painter, &[0.0], &plot.curve_color, Vec2::splat(0.0));
    let px = plot.curve_color.to_col().premultiply().to_color_u8();
    assert_eq!(painter.canvas.pixel(0, 300), Some(px));
    let drawn = painter.canvas.pixels().iter().filter(|p| **p == px).count();
    assert_eq!(drawn, 1);
}
#[test]
fn update_fills_window_buffer() {
    let mut plot = Plot::new(600, 600);
    let mut buffer = vec![0u32; 600 * 600];
    plot.update(600, 600, &mut buffer);
    let bg = plot.background_color;
    let bg = u32::from_be_bytes([0, bg.r, bg.g, bg.b]);
    let c = plot.curve_color;
    let curve = u32::from_be_bytes([0, c.r, c.g, c.b]);
    assert_eq!(buffer[599], bg);
    assert!(buffer.contains(&curve));
    assert!(buffer.iter().all(|p| p >> 24 == 0));
    //curve passes through (-0.5, 0.125)
    let pos = plot.to_screen(-0.5, plot.state.curve.eval(-0.5));
    assert_eq!(buffer[pos.y as usize * 600 + pos.x as usize], curve);
}
#[test]
fn update_skips_empty_canvas() {
    let mut plot = Plot::new(600, 600);
    let mut buffer: Vec<u32> = Vec::new();
    plot.update(0, 0, &mut buffer);
    assert!(plot.canvas.is_none());
    let mut buffer = vec![0u32; 4];
    plot.update(2, 2, &mut buffer);
    assert!(plot.canvas.is_some());
}
