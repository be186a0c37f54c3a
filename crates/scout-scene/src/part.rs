use serde::Deserialize;

/// Game release a map part was authored for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameVersion {
    DemonsSouls,
    DarkSouls,
    DarkSouls2,
    DarkSouls3,
    Sekiro,
    EldenRing,
    ArmoredCore6,
}

impl GameVersion {
    pub fn tag(self) -> &'static str {
        match self {
            GameVersion::DemonsSouls => "DES",
            GameVersion::DarkSouls => "DS1",
            GameVersion::DarkSouls2 => "DS2",
            GameVersion::DarkSouls3 => "DS3",
            GameVersion::Sekiro => "SDT",
            GameVersion::EldenRing => "ER",
            GameVersion::ArmoredCore6 => "AC6",
        }
    }
}

/// Concrete shape of a wrapped map part, shared across game versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartShape {
    MapPiece,
    Asset,
    DummyAsset,
    Enemy,
    DummyEnemy,
    Player,
    Collision,
    ConnectCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeInfo {
    pub type_name: &'static str,
    pub is_enemy: bool,
    pub carries_type_id: bool,
}

const fn shape(type_name: &'static str, is_enemy: bool, carries_type_id: bool) -> ShapeInfo {
    ShapeInfo {
        type_name,
        is_enemy,
        carries_type_id,
    }
}

// Indexed by `PartShape as usize`.
const SHAPES: [ShapeInfo; 8] = [
    shape("MapPiece", false, false),
    shape("Asset", false, true),
    shape("DummyAsset", false, true),
    shape("Enemy", true, true),
    shape("DummyEnemy", true, true),
    shape("Player", false, false),
    shape("Collision", false, false),
    shape("ConnectCollision", false, false),
];

impl PartShape {
    #[inline]
    pub fn info(self) -> &'static ShapeInfo {
        &SHAPES[self as usize]
    }
}

/// Domain record wrapped by a scene object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PartRef {
    pub game: GameVersion,
    pub shape: PartShape,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub type_id: Option<u16>,
    #[serde(default)]
    pub entity_id: Option<u32>,
}

impl PartRef {
    pub fn new(game: GameVersion, shape: PartShape) -> Self {
        Self {
            game,
            shape,
            model: None,
            type_id: None,
            entity_id: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_type_id(mut self, type_id: u16) -> Self {
        self.type_id = Some(type_id);
        self
    }

    pub fn with_entity_id(mut self, entity_id: u32) -> Self {
        self.entity_id = Some(entity_id);
        self
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Type id, only for shapes that carry one.
    pub fn type_id(&self) -> Option<u16> {
        if self.shape.info().carries_type_id {
            self.type_id
        } else {
            None
        }
    }

    /// Entity id; 0 is the "unassigned" value in the map formats.
    pub fn entity_id(&self) -> Option<u32> {
        self.entity_id.filter(|id| *id != 0)
    }

    pub fn is_enemy(&self) -> bool {
        self.shape.info().is_enemy
    }

    pub fn type_label(&self) -> String {
        format!("{} ({})", self.shape.info().type_name, self.game.tag())
    }
}
