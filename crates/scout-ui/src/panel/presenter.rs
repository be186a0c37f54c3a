use raylib::prelude::{RaylibDraw, Vector2};
use scout_labels::{ObjectTracker, PanelContent};

use super::util::{blend_color, with_opacity};
use super::{IRect, PanelFlags, PanelLayout, PanelTheme, category_color};
use crate::text::TextPainter;

/// Draws one borderless readout panel per tracked object.
///
/// Panels are immediate mode: nothing is retained between frames, so there is no
/// layout to persist and nothing for the cursor or keyboard to interact with.
pub struct InfoPanelPresenter {
    theme: PanelTheme,
    flags: PanelFlags,
}

impl Default for InfoPanelPresenter {
    fn default() -> Self {
        Self::new(PanelTheme::default())
    }
}

impl InfoPanelPresenter {
    pub fn new(theme: PanelTheme) -> Self {
        Self {
            theme,
            flags: PanelFlags::READOUT,
        }
    }

    pub fn theme(&self) -> &PanelTheme {
        &self.theme
    }

    pub fn flags(&self) -> PanelFlags {
        self.flags
    }

    /// Whether a panel under `cursor` should swallow input; readout panels never do.
    pub fn captures_cursor(&self, _cursor: Vector2) -> bool {
        self.flags.accepts_input
    }

    pub fn panels(tracker: &ObjectTracker) -> Vec<PanelContent> {
        if !tracker.config().enabled {
            return Vec::new();
        }
        tracker
            .tracked()
            .iter()
            .map(|obj| PanelContent::from_tracked(obj, tracker.config()))
            .collect()
    }

    /// Draws the panels computed by the tracker's last refresh.
    pub fn draw<D>(&self, d: &mut D, tracker: &ObjectTracker, screen_size: (i32, i32))
    where
        D: RaylibDraw + TextPainter,
    {
        let opacity = tracker.config().background_opacity;
        for content in Self::panels(tracker) {
            let layout = PanelLayout::compute(&*d, &self.theme, &content, screen_size);
            self.draw_panel(d, &content, &layout, opacity);
        }
    }

    fn draw_panel<D>(&self, d: &mut D, content: &PanelContent, layout: &PanelLayout, opacity: f32)
    where
        D: RaylibDraw + TextPainter,
    {
        let theme = &self.theme;
        let accent = category_color(content.category);
        let body = with_opacity(blend_color(theme.body_color, accent, theme.tint), opacity);
        let IRect { x, y, w, h } = layout.outer;

        d.draw_rectangle(x, y, w, h, body);
        if self.flags.bordered {
            d.draw_rectangle_lines(x, y, w, h, accent);
        }
        d.draw_circle_v(
            Vector2::new(content.anchor.x, content.anchor.y),
            theme.marker_radius,
            accent,
        );

        let (tx, ty) = layout.title_origin;
        d.paint_text_shadowed(&content.title, tx, ty, theme.title_font, accent);
        for (row, &(rx, ry)) in content.rows.iter().zip(&layout.row_origins) {
            d.paint_text(&row.text(), rx, ry, theme.row_font, theme.row_text);
        }
    }
}
