//! Hong Kong-convention station type.
//!
//! One type covers both plain and interchange stations; the transfer rows
//! list every line serving the station, including its own.

use serde::{Deserialize, Serialize};

use crate::{
    field::{Field, SetOutcome},
    registry::{ElementMetadata, StationDescriptor},
    station::{StationAttrs, Transfer, default_names},
    theme::CityCode,
};

/// Attributes of the Hong Kong-style station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtrAttrs {
    pub names: [String; 2],
    pub transfer: Transfer,
}

impl Default for MtrAttrs {
    fn default() -> Self {
        Self {
            names: default_names(),
            transfer: vec![vec![]],
        }
    }
}

fn ensure(attrs: &mut StationAttrs) -> &mut MtrAttrs {
    if !matches!(attrs, StationAttrs::Mtr(_)) {
        *attrs = StationAttrs::Mtr(MtrAttrs::default());
    }
    match attrs {
        StationAttrs::Mtr(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn name_zh(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::Mtr(a) => a.names[0].clone(),
        _ => MtrAttrs::default().names[0].clone(),
    }
}

fn set_name_zh(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure(attrs).names[0] = value.to_string();
    SetOutcome::Applied
}

fn name_en(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::Mtr(a) => a.names[1].clone(),
        _ => MtrAttrs::default().names[1].clone(),
    }
}

fn set_name_en(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure(attrs).names[1] = value.to_string();
    SetOutcome::Applied
}

fn transfer_summary(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::Mtr(a) => a.transfer.len().to_string(),
        _ => MtrAttrs::default().transfer.len().to_string(),
    }
}

fn reject_transfer_edit(_attrs: &mut StationAttrs, _value: &str) -> SetOutcome {
    SetOutcome::Rejected
}

pub(crate) fn descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationAttrs::Mtr(MtrAttrs::default()),
        vec![
            Field::text("panel.details.station.mtr.nameZh", name_zh, set_name_zh),
            Field::text("panel.details.station.mtr.nameEn", name_en, set_name_en),
            Field::custom(
                "panel.details.station.mtr.transfer",
                transfer_summary,
                reject_transfer_edit,
            ),
        ],
        ElementMetadata::new("panel.details.station.mtr.displayName")
            .with_cities(vec![CityCode::new("hongkong")]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transfer_is_single_empty_row() {
        let attrs = MtrAttrs::default();
        assert_eq!(attrs.transfer, vec![Vec::new()]);
    }

    #[test]
    fn test_name_setter_resets_foreign_variant() {
        let mut attrs = StationAttrs::ShmetroBasic(
            crate::station::shmetro::ShmetroBasicAttrs::default(),
        );
        assert!(set_name_zh(&mut attrs, "金钟").is_applied());
        assert!(matches!(attrs, StationAttrs::Mtr(_)));
        assert_eq!(attrs.names()[0], "金钟");
    }
}
