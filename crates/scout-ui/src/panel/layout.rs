use std::cmp::max;

use scout_labels::PanelContent;

use super::{IRect, PanelTheme};
use crate::text::TextMeasure;

/// Placement of one info panel: content-sized, centred above its anchor and kept on
/// screen.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    pub outer: IRect,
    pub title_origin: (i32, i32),
    pub row_origins: Vec<(i32, i32)>,
}

impl PanelLayout {
    pub fn compute<M>(
        measure: &M,
        theme: &PanelTheme,
        content: &PanelContent,
        screen_size: (i32, i32),
    ) -> Self
    where
        M: TextMeasure + ?Sized,
    {
        let row_texts: Vec<String> = content.rows.iter().map(|r| r.text()).collect();
        let title_w = measure.text_width(&content.title, theme.title_font);
        let rows_w = measure.widest_line(row_texts.iter().map(String::as_str), theme.row_font);
        let width = max(title_w, rows_w) + theme.padding_x * 2;

        let row_pitch = theme.row_font + theme.line_gap;
        let rows_h = row_pitch * row_texts.len() as i32;
        let height = theme.padding_y * 2 + theme.title_font + theme.title_gap + rows_h;

        let pad = theme.screen_padding;
        let (screen_w, screen_h) = screen_size;
        let anchor_x = content.anchor.x.round() as i32;
        let anchor_y = content.anchor.y.round() as i32;
        let max_x = max(screen_w - width - pad, pad);
        let max_y = max(screen_h - height - pad, pad);
        let x = (anchor_x - width / 2).clamp(pad, max_x);
        let y = (anchor_y - height - theme.anchor_gap).clamp(pad, max_y);

        let title_origin = (x + theme.padding_x, y + theme.padding_y);
        let rows_top = title_origin.1 + theme.title_font + theme.title_gap;
        let row_origins = (0..row_texts.len() as i32)
            .map(|i| (x + theme.padding_x, rows_top + i * row_pitch))
            .collect();

        Self {
            outer: IRect::new(x, y, width, height),
            title_origin,
            row_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use scout_geom::{Vec2, Vec3};
    use scout_labels::{Category, ObjectDetails, OverlayConfig, TrackedObject};
    use scout_scene::ObjectHandle;

    use super::*;

    struct Monospace;

    impl TextMeasure for Monospace {
        fn text_width(&self, text: &str, font_size: i32) -> i32 {
            text.chars().count() as i32 * font_size / 2
        }
    }

    fn content_at(anchor: Vec2) -> PanelContent {
        let obj = TrackedObject {
            handle: ObjectHandle::new(0, 0),
            world_position: Vec3::ZERO,
            screen_position: anchor,
            category: Category::Drop,
            name: "Loot".to_owned(),
            display_id: "#00c0ffee".to_owned(),
            details: ObjectDetails {
                type_name: None,
                position: Vec3::ZERO,
                rotation: None,
                model: None,
                numeric_id: None,
            },
        };
        PanelContent::from_tracked(&obj, &OverlayConfig::default())
    }

    #[test]
    fn panel_sits_centred_above_anchor() {
        let theme = PanelTheme::default();
        let content = content_at(Vec2::new(640.0, 360.0));
        let layout = PanelLayout::compute(&Monospace, &theme, &content, (1280, 720));
        let outer = layout.outer;
        assert!((outer.x + outer.w / 2 - 640).abs() <= 1);
        assert_eq!(outer.y + outer.h + theme.anchor_gap, 360);
        assert_eq!(layout.row_origins.len(), content.rows.len());
        assert!(layout.row_origins.windows(2).all(|w| w[1].1 > w[0].1));
    }

    #[test]
    fn panel_is_clamped_inside_screen() {
        let theme = PanelTheme::default();
        let content = content_at(Vec2::new(2.0, 3.0));
        let layout = PanelLayout::compute(&Monospace, &theme, &content, (1280, 720));
        assert_eq!(layout.outer.x, theme.screen_padding);
        assert_eq!(layout.outer.y, theme.screen_padding);

        let content = content_at(Vec2::new(1279.0, 719.0));
        let layout = PanelLayout::compute(&Monospace, &theme, &content, (1280, 720));
        assert!(layout.outer.x + layout.outer.w <= 1280 - theme.screen_padding);
    }

    #[test]
    fn width_tracks_widest_line() {
        let theme = PanelTheme::default();
        let content = content_at(Vec2::new(640.0, 360.0));
        let layout = PanelLayout::compute(&Monospace, &theme, &content, (1280, 720));
        let widest = content
            .rows
            .iter()
            .map(|r| Monospace.text_width(&r.text(), theme.row_font))
            .chain(std::iter::once(
                Monospace.text_width(&content.title, theme.title_font),
            ))
            .max()
            .unwrap();
        assert_eq!(layout.outer.w, widest + theme.padding_x * 2);
    }
}
