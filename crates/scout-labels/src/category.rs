use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Light,
    Chest,
    Drop,
    Npc,
    Special,
    Generic,
}

impl Category {
    /// Match order when several categories apply; `Generic` is the fallback.
    pub const PRECEDENCE: [Category; 5] = [
        Category::Light,
        Category::Chest,
        Category::Drop,
        Category::Npc,
        Category::Special,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Light => "Light",
            Category::Chest => "Chest",
            Category::Drop => "Drop",
            Category::Npc => "NPC",
            Category::Special => "Special",
            Category::Generic => "Generic",
        }
    }
}
