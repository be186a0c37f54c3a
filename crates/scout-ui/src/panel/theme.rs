use raylib::prelude::Color;
use scout_labels::Category;

#[derive(Clone, Copy, Debug)]
pub struct PanelTheme {
    pub padding_x: i32,
    pub padding_y: i32,
    pub screen_padding: i32,
    pub anchor_gap: i32,
    pub title_font: i32,
    pub row_font: i32,
    pub title_gap: i32,
    pub line_gap: i32,
    pub marker_radius: f32,
    pub body_color: Color,
    pub row_text: Color,
    /// How strongly the category color tints the panel body.
    pub tint: f32,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            padding_x: 8,
            padding_y: 6,
            screen_padding: 4,
            anchor_gap: 10,
            title_font: 16,
            row_font: 12,
            title_gap: 4,
            line_gap: 2,
            marker_radius: 3.0,
            body_color: Color::new(16, 20, 30, 255),
            row_text: Color::new(220, 226, 236, 255),
            tint: 0.18,
        }
    }
}

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Light => Color::new(255, 250, 170, 255),
        Category::Chest => Color::new(255, 215, 0, 255),
        Category::Drop => Color::new(170, 240, 170, 255),
        Category::Npc => Color::new(255, 165, 165, 255),
        Category::Special => Color::new(215, 175, 255, 255),
        Category::Generic => Color::new(190, 190, 190, 255),
    }
}
