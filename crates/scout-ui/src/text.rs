use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle};

/// Text measurement used by panel layout; lets tests lay out panels without a window.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: i32) -> i32;

    /// Widest of `lines` at `font_size`.
    fn widest_line<'a, I>(&self, lines: I, font_size: i32) -> i32
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .map(|line| self.text_width(line, font_size))
            .max()
            .unwrap_or(0)
    }
}

pub trait TextPainter: TextMeasure {
    fn paint_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);

    /// One-pixel drop shadow under the text, for readability over the 3D scene.
    fn paint_text_shadowed(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.paint_text(text, x + 1, y + 1, font_size, Color::new(0, 0, 0, color.a));
        self.paint_text(text, x, y, font_size, color);
    }
}

impl TextMeasure for RaylibDrawHandle<'_> {
    fn text_width(&self, text: &str, font_size: i32) -> i32 {
        self.measure_text(text, font_size)
    }
}

impl TextPainter for RaylibDrawHandle<'_> {
    fn paint_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.draw_text(text, x, y, font_size, color);
    }
}
