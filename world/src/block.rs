use anyhow::bail;
use fov::LayerMask;
use serde::{Deserialize, Serialize};

/// Materials that make up the solid cells of a wall map.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Block {
    #[default]
    /// Regular wall.
    Stone,
    Door,
    /// Stops movement but not sight unless the mask says otherwise.
    Glass,
    /// Bushes and undergrowth.
    Foliage,
}

use Block::*;

impl Block {
    /// Occlusion layer the block's faces are placed on.
    pub fn layer(self) -> LayerMask {
        match self {
            Stone => LayerMask::WALL,
            Door => LayerMask::DOOR,
            Glass => LayerMask::GLASS,
            Foliage => LayerMask::FOLIAGE,
        }
    }
}

// NB. Whitespace and '.' are open floor, don't use them for any block.

impl TryFrom<char> for Block {
    type Error = anyhow::Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '#' => Ok(Stone),
            '+' => Ok(Door),
            '|' => Ok(Glass),
            '%' => Ok(Foliage),
            _ => bail!("Bad block {value:?}"),
        }
    }
}

impl From<Block> for char {
    fn from(value: Block) -> Self {
        // This must match the mapping in Block::try_from.
        match value {
            Stone => '#',
            Door => '+',
            Glass => '|',
            Foliage => '%',
        }
    }
}
