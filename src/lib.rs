mod polynomial;
#[cfg(test)]
mod tests;
pub mod types;
mod ui;
use crate::types::*;
use crate::ui::Painter;
pub use polynomial::sample_len;
impl Plot {
    ///process the currently held keys, see Keybinds for more info,
    ///expected to run once per tick before update()
    pub fn keybinds(&mut self, i: &InputState) {
        let k = &self.keybinds;
        let state = &mut self.state;
        state.curve.c2 += i.axis(k.c2_up, k.c2_down) * self.rate_c2;
        state.curve.c1 += i.axis(k.c1_up, k.c1_down) * self.rate_c1;
        state.curve.c0 += i.axis(k.c0_up, k.c0_down) * self.rate_c0;
        state.seek += i.axis(k.seek_right, k.seek_left) * self.rate_seek;
        if i.is_down(k.reset) {
            log::debug!("reset to {:?}", State::reset().curve);
            *state = State::reset();
        }
        state.recalculate();
        log::trace!(
            "curve {:?} seek {} slope {}",
            state.curve,
            state.seek,
            state.tangent.c1
        );
    }
    ///weather the exit key is held
    pub fn should_exit(&self, i: &InputState) -> bool {
        i.is_down(self.keybinds.exit)
    }
    ///repaints the screen
    pub fn update<T>(&mut self, width: u32, height: u32, buffer: &mut T)
    where
        T: std::ops::DerefMut<Target = [u32]>,
    {
        let canvas = match std::mem::take(&mut self.canvas) {
            Some(canvas) if (width, height) == (canvas.width(), canvas.height()) => Some(canvas),
            _ => tiny_skia::Pixmap::new(width, height),
        };
        let Some(canvas) = canvas else {
            log::warn!("could not allocate a {width}x{height} canvas, skipping frame");
            return;
        };
        self.screen = Vec2::new(width as f64, height as f64);
        let mut painter = Painter::new(self.background_color, self.anti_alias, canvas);
        self.draw(&mut painter);
        painter.save(buffer);
        self.canvas = Some(painter.canvas);
    }
    fn draw(&self, painter: &mut Painter) {
        painter.clear();
        self.write_axis(painter);
        let (start, end, step) = (self.bound.x, self.bound.y, self.step);
        let state = &self.state;
        let origin = Vec2::splat(0.0);
        let curve = state.curve.sample(start, end, step);
        self.draw_samples(painter, &curve, &self.curve_color, origin);
        let derivative = state.derivative.sample(start, end, step);
        self.draw_samples(painter, &derivative, &self.derivative_color, origin);
        let tangent = state.tangent.sample(start, end, step);
        self.draw_samples(
            painter,
            &tangent,
            &self.tangent_color,
            state.tangent_offset(),
        );
    }
    ///plots samples[i] at x = start + i * step, shifted by offset,
    ///one pixel per sample, anything landing off canvas is skipped
    pub(crate) fn draw_samples(
        &self,
        painter: &mut Painter,
        samples: &[f64],
        color: &Color,
        offset: Vec2,
    ) {
        for (i, y) in samples.iter().enumerate() {
            let x = self.bound.x + i as f64 * self.step;
            let p = Vec2::new(x, *y) + offset;
            if !p.x.is_finite() || !p.y.is_finite() {
                continue;
            }
            let pos = self.to_screen(p.x, p.y);
            if self.in_screen(pos) {
                painter.pixel(pos, color);
            }
        }
    }
    fn write_axis(&self, painter: &mut Painter) {
        let (w, h) = (self.screen.x as f32, self.screen.y as f32);
        painter.line_segment(
            [Pos::new(w * 0.5, 0.0), Pos::new(w * 0.5, h)],
            self.line_width,
            &self.axis_color,
        );
        painter.line_segment(
            [Pos::new(0.0, h * 0.5), Pos::new(w, h * 0.5)],
            self.line_width,
            &self.axis_color,
        );
    }
    ///maps a cartesian point in [-1, 1] to a pixel, y pointing down
    pub fn to_screen(&self, x: f64, y: f64) -> Pos {
        let (w, h) = (self.screen.x, self.screen.y);
        Vec2::new(x * (h / 2.0) + h / 2.0, -y * (w / 2.0) + w / 2.0).to_pos()
    }
    pub fn to_coord(&self, p: Pos) -> (f64, f64) {
        let (w, h) = (self.screen.x, self.screen.y);
        let x = (p.x as f64 - h / 2.0) / (h / 2.0);
        let y = (w / 2.0 - p.y as f64) / (w / 2.0);
        (x, y)
    }
    fn in_screen(&self, p: Pos) -> bool {
        p.x >= 0.0 && p.x < self.screen.x as f32 && p.y >= 0.0 && p.y < self.screen.y as f32
    }
}
