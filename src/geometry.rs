//! Screen-space primitives (pixels, y pointing down).

/// A position in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: ScreenPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl std::ops::Add for ScreenPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for ScreenPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The pixel rectangle the host hands out for chart drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner in window coordinates.
    pub origin: ScreenPoint,
    pub size: ScreenSize,
}

impl ScreenRect {
    pub const fn new(origin: ScreenPoint, size: ScreenSize) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(ScreenPoint::new(x, y), ScreenSize::new(width, height))
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Center relative to the rectangle's own origin.
    pub fn local_center(&self) -> ScreenPoint {
        ScreenPoint::new(self.size.width * 0.5, self.size.height * 0.5)
    }

    pub fn is_valid(&self) -> bool {
        self.size.width > 0.0 && self.size.height > 0.0
    }
}

/// Supplies the current chart rectangle; updated by the host on resize.
pub trait ViewportProvider {
    fn viewport(&self) -> ScreenRect;
}

impl ViewportProvider for ScreenRect {
    fn viewport(&self) -> ScreenRect {
        *self
    }
}
