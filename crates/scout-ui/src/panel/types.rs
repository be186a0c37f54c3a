#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Panel behaviour switches. Info panels use [`PanelFlags::READOUT`]; they hold no
/// retained state, so there is nothing to focus, resize, move or save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelFlags {
    pub accepts_input: bool,
    pub bordered: bool,
}

impl PanelFlags {
    pub const READOUT: PanelFlags = PanelFlags {
        accepts_input: false,
        bordered: false,
    };
}
