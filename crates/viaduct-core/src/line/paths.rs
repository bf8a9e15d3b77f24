//! Line path routing attributes and descriptors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    field::{Field, SetOutcome},
    line::LinePathAttrs,
    registry::{ElementMetadata, LinePathDescriptor},
};

/// Which endpoint a bent path leaves axis-aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartFrom {
    #[default]
    From,
    To,
}

impl StartFrom {
    pub const OPTIONS: [&'static str; 2] = ["from", "to"];
}

impl FromStr for StartFrom {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from" => Ok(Self::From),
            "to" => Ok(Self::To),
            _ => Err("Invalid start endpoint"),
        }
    }
}

/// A straight segment between the endpoints; nothing to configure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplePathAttrs {}

/// A segment that runs at 45 degrees for part of its length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagonalPathAttrs {
    pub start_from: StartFrom,
    pub offset_from: f64,
    pub offset_to: f64,
}

/// A segment that bends once at a right angle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerpendicularPathAttrs {
    pub start_from: StartFrom,
    pub offset_from: f64,
    pub offset_to: f64,
}

fn ensure_diagonal(attrs: &mut LinePathAttrs) -> &mut DiagonalPathAttrs {
    if !matches!(attrs, LinePathAttrs::Diagonal(_)) {
        *attrs = LinePathAttrs::Diagonal(DiagonalPathAttrs::default());
    }
    match attrs {
        LinePathAttrs::Diagonal(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn ensure_perpendicular(attrs: &mut LinePathAttrs) -> &mut PerpendicularPathAttrs {
    if !matches!(attrs, LinePathAttrs::Perpendicular(_)) {
        *attrs = LinePathAttrs::Perpendicular(PerpendicularPathAttrs::default());
    }
    match attrs {
        LinePathAttrs::Perpendicular(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn diagonal_start_from(attrs: &LinePathAttrs) -> String {
    let start = match attrs {
        LinePathAttrs::Diagonal(a) => a.start_from,
        _ => DiagonalPathAttrs::default().start_from,
    };
    format!("{start:?}").to_lowercase()
}

fn set_diagonal_start_from(attrs: &mut LinePathAttrs, value: &str) -> SetOutcome {
    let Ok(start) = value.parse::<StartFrom>() else {
        return SetOutcome::Rejected;
    };
    ensure_diagonal(attrs).start_from = start;
    SetOutcome::Applied
}

fn diagonal_offset_from(attrs: &LinePathAttrs) -> String {
    match attrs {
        LinePathAttrs::Diagonal(a) => a.offset_from.to_string(),
        _ => DiagonalPathAttrs::default().offset_from.to_string(),
    }
}

fn set_diagonal_offset_from(attrs: &mut LinePathAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<f64>() else {
        return SetOutcome::Rejected;
    };
    ensure_diagonal(attrs).offset_from = offset;
    SetOutcome::Applied
}

fn diagonal_offset_to(attrs: &LinePathAttrs) -> String {
    match attrs {
        LinePathAttrs::Diagonal(a) => a.offset_to.to_string(),
        _ => DiagonalPathAttrs::default().offset_to.to_string(),
    }
}

fn set_diagonal_offset_to(attrs: &mut LinePathAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<f64>() else {
        return SetOutcome::Rejected;
    };
    ensure_diagonal(attrs).offset_to = offset;
    SetOutcome::Applied
}

fn perpendicular_start_from(attrs: &LinePathAttrs) -> String {
    let start = match attrs {
        LinePathAttrs::Perpendicular(a) => a.start_from,
        _ => PerpendicularPathAttrs::default().start_from,
    };
    format!("{start:?}").to_lowercase()
}

fn set_perpendicular_start_from(attrs: &mut LinePathAttrs, value: &str) -> SetOutcome {
    let Ok(start) = value.parse::<StartFrom>() else {
        return SetOutcome::Rejected;
    };
    ensure_perpendicular(attrs).start_from = start;
    SetOutcome::Applied
}

fn perpendicular_offset_from(attrs: &LinePathAttrs) -> String {
    match attrs {
        LinePathAttrs::Perpendicular(a) => a.offset_from.to_string(),
        _ => PerpendicularPathAttrs::default().offset_from.to_string(),
    }
}

fn set_perpendicular_offset_from(attrs: &mut LinePathAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<f64>() else {
        return SetOutcome::Rejected;
    };
    ensure_perpendicular(attrs).offset_from = offset;
    SetOutcome::Applied
}

fn perpendicular_offset_to(attrs: &LinePathAttrs) -> String {
    match attrs {
        LinePathAttrs::Perpendicular(a) => a.offset_to.to_string(),
        _ => PerpendicularPathAttrs::default().offset_to.to_string(),
    }
}

fn set_perpendicular_offset_to(attrs: &mut LinePathAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<f64>() else {
        return SetOutcome::Rejected;
    };
    ensure_perpendicular(attrs).offset_to = offset;
    SetOutcome::Applied
}

pub(crate) fn simple_descriptor() -> LinePathDescriptor {
    LinePathDescriptor::new(
        LinePathAttrs::Simple(SimplePathAttrs::default()),
        vec![],
        ElementMetadata::new("panel.details.line.simple.displayName"),
    )
}

pub(crate) fn diagonal_descriptor() -> LinePathDescriptor {
    LinePathDescriptor::new(
        LinePathAttrs::Diagonal(DiagonalPathAttrs::default()),
        vec![
            Field::select(
                "panel.details.line.diagonal.startFrom",
                &StartFrom::OPTIONS,
                diagonal_start_from,
                set_diagonal_start_from,
            ),
            Field::number(
                "panel.details.line.diagonal.offsetFrom",
                diagonal_offset_from,
                set_diagonal_offset_from,
            ),
            Field::number(
                "panel.details.line.diagonal.offsetTo",
                diagonal_offset_to,
                set_diagonal_offset_to,
            ),
        ],
        ElementMetadata::new("panel.details.line.diagonal.displayName"),
    )
}

pub(crate) fn perpendicular_descriptor() -> LinePathDescriptor {
    LinePathDescriptor::new(
        LinePathAttrs::Perpendicular(PerpendicularPathAttrs::default()),
        vec![
            Field::select(
                "panel.details.line.perpendicular.startFrom",
                &StartFrom::OPTIONS,
                perpendicular_start_from,
                set_perpendicular_start_from,
            ),
            Field::number(
                "panel.details.line.perpendicular.offsetFrom",
                perpendicular_offset_from,
                set_perpendicular_offset_from,
            ),
            Field::number(
                "panel.details.line.perpendicular.offsetTo",
                perpendicular_offset_to,
                set_perpendicular_offset_to,
            ),
        ],
        ElementMetadata::new("panel.details.line.perpendicular.displayName"),
    )
}
