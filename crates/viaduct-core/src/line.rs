//! Line element types.
//!
//! An edge carries two independent tags: a [`LinePathType`] selecting how the
//! segment is routed between its endpoints, and a [`LineStyleType`] selecting
//! how the routed path is drawn. Each tag has its own attribute shape.

pub mod paths;
pub mod styles;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Discriminator for how a line segment is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinePathType {
    Simple,
    Diagonal,
    Perpendicular,
}

impl LinePathType {
    /// Every registered path type, in registry order.
    pub const ALL: [LinePathType; 3] = [
        LinePathType::Simple,
        LinePathType::Diagonal,
        LinePathType::Perpendicular,
    ];
}

impl From<LinePathType> for &'static str {
    fn from(val: LinePathType) -> Self {
        match val {
            LinePathType::Simple => "simple",
            LinePathType::Diagonal => "diagonal",
            LinePathType::Perpendicular => "perpendicular",
        }
    }
}

impl Display for LinePathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl FromStr for LinePathType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "diagonal" => Ok(Self::Diagonal),
            "perpendicular" => Ok(Self::Perpendicular),
            _ => Err(RegistryError::UnknownType(s.to_string())),
        }
    }
}

/// Discriminator for how a routed line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyleType {
    SingleColor,
    ShmetroVirtualInt,
    GzmtrVirtualInt,
    River,
}

impl LineStyleType {
    /// Every registered style type, in registry order.
    pub const ALL: [LineStyleType; 4] = [
        LineStyleType::SingleColor,
        LineStyleType::ShmetroVirtualInt,
        LineStyleType::GzmtrVirtualInt,
        LineStyleType::River,
    ];
}

impl From<LineStyleType> for &'static str {
    fn from(val: LineStyleType) -> Self {
        match val {
            LineStyleType::SingleColor => "single-color",
            LineStyleType::ShmetroVirtualInt => "shmetro-virtual-int",
            LineStyleType::GzmtrVirtualInt => "gzmtr-virtual-int",
            LineStyleType::River => "river",
        }
    }
}

impl Display for LineStyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl FromStr for LineStyleType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-color" => Ok(Self::SingleColor),
            "shmetro-virtual-int" => Ok(Self::ShmetroVirtualInt),
            "gzmtr-virtual-int" => Ok(Self::GzmtrVirtualInt),
            "river" => Ok(Self::River),
            _ => Err(RegistryError::UnknownType(s.to_string())),
        }
    }
}

/// Attribute bag for a line path, tagged by its routing kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LinePathAttrs {
    Simple(paths::SimplePathAttrs),
    Diagonal(paths::DiagonalPathAttrs),
    Perpendicular(paths::PerpendicularPathAttrs),
}

impl LinePathAttrs {
    /// The tag this bag belongs to.
    pub fn path_type(&self) -> LinePathType {
        match self {
            LinePathAttrs::Simple(_) => LinePathType::Simple,
            LinePathAttrs::Diagonal(_) => LinePathType::Diagonal,
            LinePathAttrs::Perpendicular(_) => LinePathType::Perpendicular,
        }
    }
}

/// Attribute bag for a line style, tagged by its drawing kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LineStyleAttrs {
    SingleColor(styles::SingleColorAttrs),
    ShmetroVirtualInt(styles::ShmetroVirtualIntAttrs),
    GzmtrVirtualInt(styles::GzmtrVirtualIntAttrs),
    River(styles::RiverAttrs),
}

impl LineStyleAttrs {
    /// The tag this bag belongs to.
    pub fn style_type(&self) -> LineStyleType {
        match self {
            LineStyleAttrs::SingleColor(_) => LineStyleType::SingleColor,
            LineStyleAttrs::ShmetroVirtualInt(_) => LineStyleType::ShmetroVirtualInt,
            LineStyleAttrs::GzmtrVirtualInt(_) => LineStyleType::GzmtrVirtualInt,
            LineStyleAttrs::River(_) => LineStyleType::River,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_tags_round_trip() {
        for ty in LinePathType::ALL {
            let tag: &'static str = ty.into();
            assert_eq!(tag.parse::<LinePathType>(), Ok(ty));
        }
    }

    #[test]
    fn test_style_tags_round_trip() {
        for ty in LineStyleType::ALL {
            let tag: &'static str = ty.into();
            assert_eq!(tag.parse::<LineStyleType>(), Ok(ty));
        }
    }

    #[test]
    fn test_attrs_tags_match_variants() {
        let path = LinePathAttrs::Diagonal(paths::DiagonalPathAttrs::default());
        assert_eq!(path.path_type(), LinePathType::Diagonal);

        let style = LineStyleAttrs::River(styles::RiverAttrs::default());
        assert_eq!(style.style_type(), LineStyleType::River);
    }
}
