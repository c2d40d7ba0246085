use crate::types::{Color, Pos};
pub(crate) struct Painter {
    pub(crate) canvas: tiny_skia::Pixmap,
    background: Color,
    anti_alias: bool,
}
impl Painter {
    pub(crate) fn new(background: Color, anti_alias: bool, canvas: tiny_skia::Pixmap) -> Self {
        Self {
            canvas,
            background,
            anti_alias,
        }
    }
    pub(crate) fn clear(&mut self) {
        self.canvas.fill(self.background.to_col());
    }
    ///writes one pixel, pos must already be inside the canvas
    pub(crate) fn pixel(&mut self, pos: Pos, color: &Color) {
        let (x, y) = (pos.x as usize, pos.y as usize);
        let width = self.canvas.width() as usize;
        debug_assert!(x < width && y < self.canvas.height() as usize);
        if let Some(p) = self.canvas.pixels_mut().get_mut(y * width + x) {
            *p = color.to_col().premultiply().to_color_u8();
        }
    }
    pub(crate) fn line_segment(&mut self, p: [Pos; 2], width: f32, color: &Color) {
        let mut path = tiny_skia::PathBuilder::new();
        path.move_to(p[0].x, p[0].y);
        path.line_to(p[1].x, p[1].y);
        let Some(path) = path.finish() else {
            return;
        };
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(color.to_col());
        paint.anti_alias = self.anti_alias;
        let stroke = tiny_skia::Stroke {
            width,
            ..Default::default()
        };
        self.canvas.stroke_path(
            &path,
            &paint,
            &stroke,
            tiny_skia::Transform::default(),
            None,
        );
    }
    ///copies the canvas into a 0RGB window buffer
    pub(crate) fn save<T>(&self, buffer: &mut T)
    where
        T: std::ops::DerefMut<Target = [u32]>,
    {
        for (dst, src) in buffer.iter_mut().zip(self.canvas.data().chunks_exact(4)) {
            *dst = u32::from_le_bytes([src[0], src[1], src[2], 0]);
        }
    }
}
