//! Viewport and coordinate transformation for the diagram surface.
//!
//! Converts host pointer coordinates (screen space) into diagram-local
//! coordinates (the space overlays and paint hit-tests live in), and owns the
//! pan/zoom state of the diagram group.
//!
//! The pipeline is:
//! ```text
//! screen --(client rect + viewBox, uniform "meet" fit)--> svg user units
//! svg    --(inverse of translate(pan) scale(zoom))------> local
//! ```

use std::fmt;

use odontokit_settings::EditorConfig;

use crate::model::Point;

/// The diagram's `viewBox` in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// True when the box has a positive finite area.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Client rectangle of the mounted rendering surface, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Uniform scale (pixels per user unit) and letterbox offsets for a
    /// centred "meet" fit of `view_box` into this surface.
    fn fit(&self, view_box: &ViewBox) -> Option<(f64, f64, f64)> {
        if !view_box.is_valid() || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let scale = (self.width / view_box.width).min(self.height / view_box.height);
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        let offset_x = (self.width - view_box.width * scale) / 2.0;
        let offset_y = (self.height - view_box.height * scale) / 2.0;
        Some((scale, offset_x, offset_y))
    }
}

/// Pan and zoom of the diagram group, as rendered by
/// `translate(pan_x pan_y) scale(zoom)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanZoom {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl PanZoom {
    /// SVG transform attribute for the diagram group.
    pub fn transform_attr(&self) -> String {
        format!(
            "translate({} {}) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }
}

impl Default for PanZoom {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Represents the viewport transformation state (zoom, pan and mounted surface).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    zoom_min: f64,
    zoom_max: f64,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
    surface: Option<Surface>,
}

impl Viewport {
    /// Creates a viewport at zoom 1 with no pan and no mounted surface.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            zoom_min: config.zoom_min,
            zoom_max: config.zoom_max,
            zoom_in_factor: config.wheel_zoom_in_factor,
            zoom_out_factor: config.wheel_zoom_out_factor,
            surface: None,
        }
    }

    /// Mounts, resizes or unmounts the rendering surface.
    pub fn set_surface(&mut self, surface: Option<Surface>) {
        self.surface = surface;
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
        }
    }

    /// Applies one wheel notch. Negative `delta_y` (scroll up) zooms in,
    /// positive zooms out, zero does nothing.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y < 0.0 {
            self.set_zoom(self.zoom * self.zoom_in_factor);
        } else if delta_y > 0.0 {
            self.set_zoom(self.zoom * self.zoom_out_factor);
        }
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    /// Gets the pan offset (X coordinate, user units).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate, user units).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount in user units.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan and zoom.
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.reset_zoom();
    }

    pub fn pan_zoom(&self) -> PanZoom {
        PanZoom {
            pan_x: self.pan_x,
            pan_y: self.pan_y,
            zoom: self.zoom,
        }
    }

    /// Converts a screen point into the diagram's svg user units, ignoring
    /// pan and zoom. Returns `None` when no surface is mounted.
    pub fn screen_to_user(&self, screen: Point, view_box: &ViewBox) -> Option<Point> {
        let surface = self.surface?;
        let (scale, offset_x, offset_y) = surface.fit(view_box)?;
        Some(Point::new(
            (screen.x - surface.left - offset_x) / scale + view_box.min_x,
            (screen.y - surface.top - offset_y) / scale + view_box.min_y,
        ))
    }

    /// Converts a screen point into diagram-local coordinates.
    ///
    /// Formula:
    /// ```text
    /// local = (user - pan) / zoom
    /// ```
    ///
    /// Falls back to the origin when the surface is not mounted.
    pub fn screen_to_local(&self, screen: Point, view_box: &ViewBox) -> Point {
        match self.screen_to_user(screen, view_box) {
            Some(user) => Point::new(
                (user.x - self.pan_x) / self.zoom,
                (user.y - self.pan_y) / self.zoom,
            ),
            None => Point::origin(),
        }
    }

    /// Converts a screen-space delta into a user-unit delta (what pan moves by).
    pub fn screen_delta_to_user(&self, delta: Point, view_box: &ViewBox) -> Point {
        match self.surface.and_then(|surface| surface.fit(view_box)) {
            Some((scale, _, _)) => Point::new(delta.x / scale, delta.y / scale),
            None => Point::origin(),
        }
    }

    /// Converts a screen-space delta into a diagram-local delta.
    pub fn screen_delta_to_local(&self, delta: Point, view_box: &ViewBox) -> Point {
        let user = self.screen_delta_to_user(delta, view_box);
        Point::new(user.x / self.zoom, user.y / self.zoom)
    }

    /// Converts a local point back to screen pixels, if a surface is mounted.
    pub fn local_to_screen(&self, local: Point, view_box: &ViewBox) -> Option<Point> {
        let surface = self.surface?;
        let (scale, offset_x, offset_y) = surface.fit(view_box)?;
        let user_x = local.x * self.zoom + self.pan_x;
        let user_y = local.y * self.zoom + self.pan_y;
        Some(Point::new(
            (user_x - view_box.min_x) * scale + offset_x + surface.left,
            (user_y - view_box.min_y) * scale + offset_y + surface.top,
        ))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(zoom: {:.2}x, pan: ({:.1}, {:.1}))",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}
