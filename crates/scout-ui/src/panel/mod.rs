mod layout;
mod presenter;
mod theme;
mod types;
mod util;

pub use layout::PanelLayout;
pub use presenter::InfoPanelPresenter;
pub use theme::{PanelTheme, category_color};
pub use types::{IRect, PanelFlags};
