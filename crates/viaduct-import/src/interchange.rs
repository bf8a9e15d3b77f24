//! Interchange resolution: turning raw transfer groups into the transfer
//! attribute shape a station type expects.
//!
//! The external format carries no per-interchange-line identifiers, so the
//! resolver synthesizes placeholder codes where a shape requires them. Both
//! resolvers are pure functions of their inputs and always produce a
//! populated shape, never an absent value.

use viaduct_core::{
    station::{InterchangeInfo, Transfer},
    theme::Theme,
};

use crate::save::TransferGroup;

/// Placeholder line code for interchange lines the save does not identify.
const PLACEHOLDER_LINE_CODE: &str = "1";

/// Placeholder station code for interchange lines the save does not identify.
const PLACEHOLDER_STATION_CODE: &str = "01";

/// Builds the per-group-row transfer shape used by interchange station types.
///
/// Each input group becomes one output row. Row 0 leads with a synthesized
/// entry for the station's own line, carrying the real line id and running
/// number; every other entry takes the placeholder codes. An entry without
/// its own theme inherits the station's.
///
/// With no groups at all, the result is a single row holding only the own
/// entry.
pub fn interchange_rows(
    groups: &[TransferGroup],
    own_theme: &Theme,
    own_line: &str,
    own_num: &str,
) -> Transfer {
    let own_entry = InterchangeInfo::new(own_theme.clone(), own_line, own_num);

    if groups.is_empty() {
        return vec![vec![own_entry]];
    }

    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let entries = group.lines.iter().map(|line| {
                InterchangeInfo::new(
                    line.theme.clone().unwrap_or_else(|| own_theme.clone()),
                    PLACEHOLDER_LINE_CODE,
                    PLACEHOLDER_STATION_CODE,
                )
            });
            if index == 0 {
                std::iter::once(own_entry.clone()).chain(entries).collect()
            } else {
                entries.collect()
            }
        })
        .collect()
}

/// Builds the single-row transfer shape used by the unified station type,
/// which displays every line serving the station including its own.
///
/// Only group 0 contributes entries; out-of-station transfers (later groups)
/// are modeled as separate stations in this family and dropped here. Codes
/// are left empty since the shape does not display them.
///
/// With no groups, or an empty group 0, the result is one empty row.
pub fn unified_row(groups: &[TransferGroup], own_theme: &Theme) -> Transfer {
    let Some(first) = groups.first().filter(|group| !group.lines.is_empty()) else {
        return vec![vec![]];
    };

    let mut row = Vec::with_capacity(first.lines.len() + 1);
    row.push(InterchangeInfo::new(own_theme.clone(), "", ""));
    row.extend(first.lines.iter().map(|line| {
        InterchangeInfo::new(
            line.theme.clone().unwrap_or_else(|| own_theme.clone()),
            "",
            "",
        )
    }));
    vec![row]
}
