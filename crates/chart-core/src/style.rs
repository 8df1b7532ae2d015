// File: crates/chart-core/src/style.rs
// Summary: Colors and per-chart style configuration with chained setters.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const GRAY: Color = Color::from_argb(255, 142, 142, 147);
    pub const BLUE: Color = Color::from_argb(255, 0, 122, 255);
    pub const ACCENT: Color = Color::BLUE;
    pub const CLEAR: Color = Color::from_argb(0, 0, 0, 0);

    /// Same color with alpha scaled by `opacity` in `[0, 1]`.
    pub fn opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

/// Bar chart configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    pub bar_spacing: f64,
    pub bar_width: f64,
    pub bar_color: Color,
    pub selected_bar_color: Color,
    pub text_color: Color,
    pub selected_text_color: Color,
    /// Reveal bars one after another instead of all at once.
    pub animated: bool,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_spacing: 20.0,
            bar_width: 30.0,
            bar_color: Color::GRAY,
            selected_bar_color: Color::ACCENT,
            text_color: Color::BLACK,
            selected_text_color: Color::ACCENT,
            animated: true,
        }
    }
}

impl BarStyle {
    pub fn bar_spacing(mut self, spacing: f64) -> Self { self.bar_spacing = spacing; self }
    pub fn bar_width(mut self, width: f64) -> Self { self.bar_width = width; self }
    pub fn bar_color(mut self, color: Color) -> Self { self.bar_color = color; self }
    pub fn selected_bar_color(mut self, color: Color) -> Self { self.selected_bar_color = color; self }
    pub fn text_color(mut self, color: Color) -> Self { self.text_color = color; self }
    pub fn selected_text_color(mut self, color: Color) -> Self { self.selected_text_color = color; self }
    pub fn animated(mut self, animated: bool) -> Self { self.animated = animated; self }

    pub fn bar_color_for(&self, selected: bool) -> Color {
        if selected { self.selected_bar_color } else { self.bar_color }
    }

    pub fn text_color_for(&self, selected: bool) -> Color {
        if selected { self.selected_text_color } else { self.text_color }
    }
}

/// Line chart configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub line_width: f64,
    pub point_diameter: f64,
    pub selected_point_diameter: f64,
    pub grid_color: Color,
    pub line_color: Color,
    pub point_color: Color,
    pub selected_point_color: Color,
    pub text_color: Color,
    pub selected_text_color: Color,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            point_diameter: 12.0,
            selected_point_diameter: 18.0,
            grid_color: Color::GRAY,
            line_color: Color::ACCENT,
            point_color: Color::GRAY,
            selected_point_color: Color::BLUE,
            text_color: Color::BLACK,
            selected_text_color: Color::BLUE,
        }
    }
}

impl LineStyle {
    pub fn line_width(mut self, width: f64) -> Self { self.line_width = width; self }
    pub fn point_diameter(mut self, diameter: f64) -> Self { self.point_diameter = diameter; self }
    pub fn selected_point_diameter(mut self, diameter: f64) -> Self { self.selected_point_diameter = diameter; self }
    pub fn grid_color(mut self, color: Color) -> Self { self.grid_color = color; self }
    pub fn line_color(mut self, color: Color) -> Self { self.line_color = color; self }
    pub fn point_color(mut self, color: Color) -> Self { self.point_color = color; self }
    pub fn selected_point_color(mut self, color: Color) -> Self { self.selected_point_color = color; self }
    pub fn text_color(mut self, color: Color) -> Self { self.text_color = color; self }
    pub fn selected_text_color(mut self, color: Color) -> Self { self.selected_text_color = color; self }

    pub fn diameter_for(&self, selected: bool) -> f64 {
        if selected { self.selected_point_diameter } else { self.point_diameter }
    }
}
