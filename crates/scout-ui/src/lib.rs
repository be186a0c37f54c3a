pub mod panel;
pub mod text;

pub use panel::{
    IRect, InfoPanelPresenter, PanelFlags, PanelLayout, PanelTheme, category_color,
};
pub use text::{TextMeasure, TextPainter};
