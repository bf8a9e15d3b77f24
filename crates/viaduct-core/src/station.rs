//! Station element types.
//!
//! A station's concrete kind is selected by a [`StationType`] tag; each tag
//! has its own attribute shape, collected under the [`StationAttrs`] enum.
//! All dispatch over station kinds goes through this one enum, so adding a
//! station type means adding a variant here and a descriptor in the
//! registry.

pub mod gzmtr;
pub mod mtr;
pub mod shmetro;

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{error::RegistryError, theme::Theme};

/// Discriminator for the concrete station kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StationType {
    ShmetroBasic,
    #[serde(rename = "shmetro-basic-2020")]
    ShmetroBasic2020,
    ShmetroInt,
    GzmtrBasic,
    GzmtrInt,
    Mtr,
}

impl StationType {
    /// Every registered station type, in registry order.
    pub const ALL: [StationType; 6] = [
        StationType::ShmetroBasic,
        StationType::ShmetroBasic2020,
        StationType::ShmetroInt,
        StationType::GzmtrBasic,
        StationType::GzmtrInt,
        StationType::Mtr,
    ];
}

impl From<StationType> for &'static str {
    fn from(val: StationType) -> Self {
        match val {
            StationType::ShmetroBasic => "shmetro-basic",
            StationType::ShmetroBasic2020 => "shmetro-basic-2020",
            StationType::ShmetroInt => "shmetro-int",
            StationType::GzmtrBasic => "gzmtr-basic",
            StationType::GzmtrInt => "gzmtr-int",
            StationType::Mtr => "mtr",
        }
    }
}

impl Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl FromStr for StationType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shmetro-basic" => Ok(Self::ShmetroBasic),
            "shmetro-basic-2020" => Ok(Self::ShmetroBasic2020),
            "shmetro-int" => Ok(Self::ShmetroInt),
            "gzmtr-basic" => Ok(Self::GzmtrBasic),
            "gzmtr-int" => Ok(Self::GzmtrInt),
            "mtr" => Ok(Self::Mtr),
            _ => Err(RegistryError::UnknownType(s.to_string())),
        }
    }
}

/// Horizontal placement of a station's name relative to its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameOffsetX {
    Left,
    Middle,
    Right,
}

impl NameOffsetX {
    pub const OPTIONS: [&'static str; 3] = ["left", "middle", "right"];
}

impl FromStr for NameOffsetX {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "middle" => Ok(Self::Middle),
            "right" => Ok(Self::Right),
            _ => Err("Invalid horizontal name offset"),
        }
    }
}

/// Vertical placement of a station's name relative to its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameOffsetY {
    Up,
    Middle,
    Bottom,
}

impl NameOffsetY {
    pub const OPTIONS: [&'static str; 3] = ["up", "middle", "bottom"];
}

impl FromStr for NameOffsetY {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err("Invalid vertical name offset"),
        }
    }
}

/// One line reachable at an interchange, with the codes shown on its badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterchangeInfo {
    pub theme: Theme,
    pub line_code: String,
    pub station_code: String,
}

impl InterchangeInfo {
    pub fn new(theme: Theme, line_code: impl Into<String>, station_code: impl Into<String>) -> Self {
        Self {
            theme,
            line_code: line_code.into(),
            station_code: station_code.into(),
        }
    }
}

/// Transfer attribute shape: one inner vec per interchange group.
pub type Transfer = Vec<Vec<InterchangeInfo>>;

/// Attribute bag for a station, tagged by its concrete kind.
///
/// The variant must match the tag the bag is stored under; constructors in
/// this crate uphold that pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StationAttrs {
    ShmetroBasic(shmetro::ShmetroBasicAttrs),
    #[serde(rename = "shmetro-basic-2020")]
    ShmetroBasic2020(shmetro::ShmetroBasic2020Attrs),
    ShmetroInt(shmetro::ShmetroIntAttrs),
    GzmtrBasic(gzmtr::GzmtrBasicAttrs),
    GzmtrInt(gzmtr::GzmtrIntAttrs),
    Mtr(mtr::MtrAttrs),
}

impl StationAttrs {
    /// The tag this bag belongs to.
    pub fn station_type(&self) -> StationType {
        match self {
            StationAttrs::ShmetroBasic(_) => StationType::ShmetroBasic,
            StationAttrs::ShmetroBasic2020(_) => StationType::ShmetroBasic2020,
            StationAttrs::ShmetroInt(_) => StationType::ShmetroInt,
            StationAttrs::GzmtrBasic(_) => StationType::GzmtrBasic,
            StationAttrs::GzmtrInt(_) => StationType::GzmtrInt,
            StationAttrs::Mtr(_) => StationType::Mtr,
        }
    }

    /// The bilingual name pair; `names[0]` is the primary display name.
    pub fn names(&self) -> &[String; 2] {
        match self {
            StationAttrs::ShmetroBasic(a) => &a.names,
            StationAttrs::ShmetroBasic2020(a) => &a.names,
            StationAttrs::ShmetroInt(a) => &a.names,
            StationAttrs::GzmtrBasic(a) => &a.names,
            StationAttrs::GzmtrInt(a) => &a.names,
            StationAttrs::Mtr(a) => &a.names,
        }
    }

    /// Replace the bilingual name pair.
    pub fn set_names(&mut self, names: [String; 2]) {
        match self {
            StationAttrs::ShmetroBasic(a) => a.names = names,
            StationAttrs::ShmetroBasic2020(a) => a.names = names,
            StationAttrs::ShmetroInt(a) => a.names = names,
            StationAttrs::GzmtrBasic(a) => a.names = names,
            StationAttrs::GzmtrInt(a) => a.names = names,
            StationAttrs::Mtr(a) => a.names = names,
        }
    }
}

/// Placeholder name pair shared by every station type's defaults.
pub(crate) fn default_names() -> [String; 2] {
    ["车站".to_string(), "Stn".to_string()]
}
