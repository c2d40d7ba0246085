use std::ops::Add;
///a polynomial of degree at most 3, c3*x^3 + c2*x^2 + c1*x + c0
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    pub c3: f64,
    pub c2: f64,
    pub c1: f64,
    pub c0: f64,
}
///the live state the controller mutates every tick
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct State {
    ///the plotted cubic
    pub curve: Polynomial,
    ///derivative of curve, recomputed every tick
    pub derivative: Polynomial,
    ///line of slope derivative(seek), drawn offset to (seek, curve(seek))
    pub tangent: Polynomial,
    ///x position the tangent is taken at
    pub seek: f64,
}
impl Default for State {
    fn default() -> Self {
        let curve = Polynomial::new(1.0, 1.0, 0.0, 0.0);
        let mut state = Self {
            curve,
            derivative: Polynomial::default(),
            tangent: Polynomial::default(),
            seek: 0.0,
        };
        state.recalculate();
        state
    }
}
impl State {
    ///the state the reset key returns to
    pub fn reset() -> Self {
        Self {
            curve: Polynomial::new(0.0, 1.0, 0.0, 0.0),
            derivative: Polynomial::default(),
            tangent: Polynomial::default(),
            seek: 0.0,
        }
    }
    ///refreshes derivative and tangent from curve and seek
    pub fn recalculate(&mut self) {
        self.derivative = self.curve.derivative();
        self.tangent = Polynomial::new(0.0, 0.0, self.derivative.eval(self.seek), 0.0);
    }
    ///where the tangent touches the curve
    pub fn tangent_offset(&self) -> Vec2 {
        Vec2::new(self.seek, self.curve.eval(self.seek))
    }
}
pub struct Plot {
    ///current coefficients, derivative, tangent and seek
    pub state: State,
    ///x interval every sequence is sampled over, x is start and y is end
    pub bound: Vec2,
    ///distance between consecutive samples, fixed at construction
    pub step: f64,
    ///per tick change of c2 while its key is held
    pub rate_c2: f64,
    ///per tick change of c1 while its key is held
    pub rate_c1: f64,
    ///per tick change of c0 while its key is held
    pub rate_c0: f64,
    ///per tick change of seek while its key is held
    pub rate_seek: f64,
    ///color of the cubic
    pub curve_color: Color,
    ///color of the derivative
    pub derivative_color: Color,
    ///color of the tangent line
    pub tangent_color: Color,
    ///axis color
    pub axis_color: Color,
    ///background color
    pub background_color: Color,
    ///width of the axis lines
    pub line_width: f32,
    ///weather the axis lines should be anti aliased or not
    pub anti_alias: bool,
    ///current keybinds
    pub keybinds: Keybinds,
    pub(crate) screen: Vec2,
    pub(crate) canvas: Option<tiny_skia::Pixmap>,
}
impl Default for Plot {
    fn default() -> Self {
        Self::new(600, 600)
    }
}
impl Plot {
    ///creates a plot for a width by height canvas,
    ///the sample step is chosen so there is one sample per pixel column
    pub fn new(width: u32, height: u32) -> Self {
        let bound = Vec2::new(-1.0, 1.0);
        let rate = 0.001;
        Self {
            state: State::default(),
            bound,
            step: (bound.y - bound.x) / width.max(1) as f64,
            rate_c2: rate,
            rate_c1: rate,
            rate_c0: rate,
            rate_seek: rate,
            curve_color: Color::new(230, 41, 55),
            derivative_color: Color::new(102, 191, 255),
            tangent_color: Color::new(0, 82, 172),
            axis_color: Color::splat(0),
            background_color: Color::splat(245),
            line_width: 1.0,
            anti_alias: false,
            keybinds: Keybinds::default(),
            screen: Vec2::new(width as f64, height as f64),
            canvas: None,
        }
    }
}
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Keybinds {
    ///increases c2
    pub c2_up: Option<Key>,
    ///decreases c2
    pub c2_down: Option<Key>,
    ///increases c1
    pub c1_up: Option<Key>,
    ///decreases c1
    pub c1_down: Option<Key>,
    ///increases c0
    pub c0_up: Option<Key>,
    ///decreases c0
    pub c0_down: Option<Key>,
    ///moves the tangent left
    pub seek_left: Option<Key>,
    ///moves the tangent right
    pub seek_right: Option<Key>,
    ///returns to State::reset, wins over any other key held on the same tick
    pub reset: Option<Key>,
    ///closes the window
    pub exit: Option<Key>,
}
impl Default for Keybinds {
    fn default() -> Self {
        Self {
            c2_up: Some(Key::Numpad4),
            c2_down: Some(Key::Numpad1),
            c1_up: Some(Key::Numpad5),
            c1_down: Some(Key::Numpad2),
            c0_up: Some(Key::Numpad6),
            c0_down: Some(Key::Numpad3),
            seek_left: Some(Key::Numpad7),
            seek_right: Some(Key::Numpad8),
            reset: Some(Key::R),
            exit: Some(Key::Escape),
        }
    }
}
#[derive(Debug, Clone, Default)]
pub struct InputState {
    ///keys currently held down
    pub keys_down: Vec<Key>,
}
impl InputState {
    pub fn press(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_down.push(key)
        }
    }
    pub fn release(&mut self, key: Key) {
        self.keys_down.retain(|k| *k != key)
    }
    ///releases everything, for when the window loses focus
    pub fn reset(&mut self) {
        self.keys_down.clear()
    }
    pub fn is_down(&self, key: Option<Key>) -> bool {
        key.is_some_and(|key| self.keys_down.contains(&key))
    }
    ///1.0 if only up is held, -1.0 if only down is held, otherwise 0.0
    pub(crate) fn axis(&self, up: Option<Key>, down: Option<Key>) -> f64 {
        let v = |b: bool| if b { 1.0 } else { 0.0 };
        v(self.is_down(up)) - v(self.is_down(down))
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    R,
    Escape,
}
#[cfg(feature = "winit")]
impl TryFrom<winit::keyboard::PhysicalKey> for Key {
    type Error = winit::keyboard::PhysicalKey;
    fn try_from(val: winit::keyboard::PhysicalKey) -> Result<Self, Self::Error> {
        use winit::keyboard::{KeyCode, PhysicalKey};
        let PhysicalKey::Code(code) = val else {
            return Err(val);
        };
        Ok(match code {
            KeyCode::Numpad0 => Key::Numpad0,
            KeyCode::Numpad1 => Key::Numpad1,
            KeyCode::Numpad2 => Key::Numpad2,
            KeyCode::Numpad3 => Key::Numpad3,
            KeyCode::Numpad4 => Key::Numpad4,
            KeyCode::Numpad5 => Key::Numpad5,
            KeyCode::Numpad6 => Key::Numpad6,
            KeyCode::Numpad7 => Key::Numpad7,
            KeyCode::Numpad8 => Key::Numpad8,
            KeyCode::Numpad9 => Key::Numpad9,
            KeyCode::KeyR => Key::R,
            KeyCode::Escape => Key::Escape,
            _ => return Err(val),
        })
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub fn splat(c: u8) -> Self {
        Self { r: c, g: c, b: c }
    }
    pub(crate) fn to_col(self) -> tiny_skia::Color {
        //softbuffer reads each pixel as a little endian 0RGB u32
        tiny_skia::Color::from_rgba8(self.b, self.g, self.r, 255)
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}
impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}
impl Vec2 {
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub(crate) fn to_pos(self) -> Pos {
        Pos {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}
impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
