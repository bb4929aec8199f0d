//! Pet avatar model.
//!
//! A pet is drawn by stacking one image per part slot. Every slot is a closed
//! enum, so an unrenderable part cannot be constructed.

use serde::{Deserialize, Serialize};

use crate::config::PET_PARTS_BASE_PATH;

/// One option of a pet part slot.
pub trait PartOption: Copy + Eq + Default + 'static {
    /// Slot directory under the parts base path.
    const SLOT: &'static str;
    /// Every valid option, in display order.
    const ALL: &'static [Self];

    /// File stem of the option's image.
    fn asset_name(self) -> &'static str;

    /// URL of the option's image.
    fn asset_path(self) -> String {
        format!("{}/{}/{}.png", PET_PARTS_BASE_PATH, Self::SLOT, self.asset_name())
    }
}

macro_rules! part_enum {
    ($(#[$meta:meta])* $name:ident, $slot:literal, { $($variant:ident => $asset:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl PartOption for $name {
            const SLOT: &'static str = $slot;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn asset_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $asset),+
                }
            }
        }
    };
}

part_enum!(
    /// Body color.
    BodyColor, "body", {
        Blue => "blue",
        Green => "green",
        Pink => "pink",
        Purple => "purple",
        Yellow => "yellow",
    }
);

part_enum!(
    /// Ear (fin) style.
    EarStyle, "ears", {
        Round => "round",
        Pointy => "pointy",
        Floppy => "floppy",
        Tufted => "tufted",
        Curled => "curled",
        Tiny => "tiny",
    }
);

part_enum!(
    /// Facial expression.
    FaceExpression, "face", {
        Happy => "happy",
        Sleepy => "sleepy",
        Surprised => "surprised",
        Wink => "wink",
    }
);

/// Part selection of a pet. `Default` is the documented default configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetParts {
    pub body: BodyColor,
    pub ears: EarStyle,
    pub face: FaceExpression,
}

impl PetParts {
    /// Image layers from back to front.
    pub fn layers(&self) -> [String; 3] {
        [
            self.body.asset_path(),
            self.ears.asset_path(),
            self.face.asset_path(),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub parts: PetParts,
}

/// The pet shown before any shuffle.
pub const DEFAULT_PET: Pet = Pet {
    id: PetId(0),
    parts: PetParts {
        body: BodyColor::Blue,
        ears: EarStyle::Round,
        face: FaceExpression::Happy,
    },
};

impl Default for Pet {
    fn default() -> Self {
        DEFAULT_PET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pet_matches_default_parts() {
        assert_eq!(Pet::default().parts, PetParts::default());
        assert_eq!(Pet::default().id, PetId(0));
    }

    #[test]
    fn test_option_counts() {
        assert_eq!(BodyColor::ALL.len(), 5);
        assert_eq!(EarStyle::ALL.len(), 6);
        assert_eq!(FaceExpression::ALL.len(), 4);
    }

    #[test]
    fn test_asset_paths() {
        assert_eq!(BodyColor::Pink.asset_path(), "/pet-parts/body/pink.png");
        assert_eq!(EarStyle::Tufted.asset_path(), "/pet-parts/ears/tufted.png");
        assert_eq!(FaceExpression::Wink.asset_path(), "/pet-parts/face/wink.png");
    }

    #[test]
    fn test_layers_order() {
        let parts = PetParts {
            body: BodyColor::Yellow,
            ears: EarStyle::Tiny,
            face: FaceExpression::Sleepy,
        };
        assert_eq!(
            parts.layers(),
            [
                "/pet-parts/body/yellow.png".to_string(),
                "/pet-parts/ears/tiny.png".to_string(),
                "/pet-parts/face/sleepy.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_parts_serialize_snake_case() {
        let json = serde_json::to_string(&PetParts::default()).unwrap();
        assert_eq!(json, r#"{"body":"blue","ears":"round","face":"happy"}"#);
    }
}
