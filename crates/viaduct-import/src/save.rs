//! Serde model of the legacy line-save format.
//!
//! A save describes one line as a record set keyed by external station id,
//! with two sentinel ids marking the line's start and end. Fields that a
//! malformed save may omit are modeled as `Option` so a bad station record
//! surfaces as a per-station import error rather than failing the whole
//! deserialization.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use viaduct_core::theme::Theme;

/// Sentinel external id marking the start of the line.
pub const LINE_START: &str = "linestart";

/// Sentinel external id marking the end of the line.
pub const LINE_END: &str = "lineend";

/// Whether this external id is one of the two line sentinels.
pub fn is_sentinel(external_id: &str) -> bool {
    external_id == LINE_START || external_id == LINE_END
}

/// The rendering-family selector carried by a save.
///
/// It decides which station-type conventions the imported stations use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStyle {
    Shmetro,
    Gzmtr,
    Mtr,
}

impl From<SaveStyle> for &'static str {
    fn from(val: SaveStyle) -> Self {
        match val {
            SaveStyle::Shmetro => "shmetro",
            SaveStyle::Gzmtr => "gzmtr",
            SaveStyle::Mtr => "mtr",
        }
    }
}

impl Display for SaveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl FromStr for SaveStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shmetro" => Ok(Self::Shmetro),
            "gzmtr" => Ok(Self::Gzmtr),
            "mtr" => Ok(Self::Mtr),
            _ => Err("Unsupported save style"),
        }
    }
}

/// One line reachable at a transfer point.
///
/// The external format carries no per-line codes, so only the theme is used
/// during import; the name and facility ride along for completeness.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferLine {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub name: Option<[String; 2]>,
    #[serde(default)]
    pub facility: Option<String>,
}

/// A cluster of lines sharing one physical transfer point.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferGroup {
    #[serde(default)]
    pub name: Option<[String; 2]>,
    #[serde(default)]
    pub lines: Vec<TransferLine>,
}

/// The transfer block of a station record.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferData {
    /// `None` marks a structurally malformed record; an intact record with
    /// no transfers has `Some` with an empty list.
    #[serde(default)]
    pub groups: Option<Vec<TransferGroup>>,
}

/// One station record of the save.
///
/// Sentinel records carry none of these fields; non-sentinel records missing
/// a required field are rejected station by station during import.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationRecord {
    /// Bilingual name pair; `name[0]` is the primary display name.
    #[serde(default)]
    pub name: Option<[String; 2]>,
    /// Running number of the station along the line.
    #[serde(default)]
    pub num: Option<String>,
    #[serde(default)]
    pub transfer: Option<TransferData>,
    /// External ids of the adjacent downstream stations.
    #[serde(default)]
    pub children: Vec<String>,
}

impl StationRecord {
    /// Every interchange line across all groups, flattened in group order.
    pub fn interchange_lines(&self) -> Vec<&TransferLine> {
        self.transfer
            .as_ref()
            .and_then(|transfer| transfer.groups.as_ref())
            .map(|groups| groups.iter().flat_map(|group| &group.lines).collect())
            .unwrap_or_default()
    }
}

/// A complete legacy line save.
#[derive(Debug, Clone, Deserialize)]
pub struct LineSave {
    /// Auxiliary panel-type flag; `"sh2020"` selects the 2020 livery.
    #[serde(default)]
    pub info_panel_type: Option<String>,
    /// Shared line identifier for the imported stations.
    pub line_num: String,
    /// Station records keyed by external id, in line order, including the
    /// two sentinels.
    pub stn_list: IndexMap<String, StationRecord>,
    pub style: SaveStyle,
    /// Shared color theme for the imported stations and edges.
    pub theme: Theme,
}
