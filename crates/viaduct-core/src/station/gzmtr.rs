//! Guangzhou-convention station types: the basic pill (which shows its line
//! and station codes) and the interchange marker.

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    field::{Field, SetOutcome},
    registry::{ElementMetadata, StationDescriptor},
    station::{NameOffsetX, NameOffsetY, StationAttrs, Transfer, default_names},
    theme::{CityCode, MonoColour, Theme},
};

/// Attributes of the Guangzhou-style basic station pill.
///
/// The pill renders `line_code` and `station_code` side by side, tinted with
/// the line's theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GzmtrBasicAttrs {
    pub names: [String; 2],
    pub name_offset_x: NameOffsetX,
    pub name_offset_y: NameOffsetY,
    pub color: Theme,
    pub line_code: String,
    pub station_code: String,
}

impl Default for GzmtrBasicAttrs {
    fn default() -> Self {
        Self {
            names: default_names(),
            name_offset_x: NameOffsetX::Right,
            name_offset_y: NameOffsetY::Up,
            color: Theme::new(
                CityCode::new("guangzhou"),
                "gz1",
                Color::new("#F3D03E").expect("valid default color"),
                MonoColour::Black,
            ),
            line_code: "1".to_string(),
            station_code: "01".to_string(),
        }
    }
}

/// Attributes of the Guangzhou-style interchange station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GzmtrIntAttrs {
    pub names: [String; 2],
    pub transfer: Transfer,
}

impl Default for GzmtrIntAttrs {
    fn default() -> Self {
        Self {
            names: default_names(),
            transfer: vec![vec![]],
        }
    }
}

fn ensure_basic(attrs: &mut StationAttrs) -> &mut GzmtrBasicAttrs {
    if !matches!(attrs, StationAttrs::GzmtrBasic(_)) {
        *attrs = StationAttrs::GzmtrBasic(GzmtrBasicAttrs::default());
    }
    match attrs {
        StationAttrs::GzmtrBasic(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn ensure_int(attrs: &mut StationAttrs) -> &mut GzmtrIntAttrs {
    if !matches!(attrs, StationAttrs::GzmtrInt(_)) {
        *attrs = StationAttrs::GzmtrInt(GzmtrIntAttrs::default());
    }
    match attrs {
        StationAttrs::GzmtrInt(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn basic_name_zh(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrBasic(a) => a.names[0].clone(),
        _ => GzmtrBasicAttrs::default().names[0].clone(),
    }
}

fn set_basic_name_zh(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic(attrs).names[0] = value.to_string();
    SetOutcome::Applied
}

fn basic_name_en(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrBasic(a) => a.names[1].clone(),
        _ => GzmtrBasicAttrs::default().names[1].clone(),
    }
}

fn set_basic_name_en(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic(attrs).names[1] = value.to_string();
    SetOutcome::Applied
}

fn basic_name_offset_x(attrs: &StationAttrs) -> String {
    let offset = match attrs {
        StationAttrs::GzmtrBasic(a) => a.name_offset_x,
        _ => GzmtrBasicAttrs::default().name_offset_x,
    };
    format!("{offset:?}").to_lowercase()
}

fn set_basic_name_offset_x(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<NameOffsetX>() else {
        return SetOutcome::Rejected;
    };
    ensure_basic(attrs).name_offset_x = offset;
    SetOutcome::Applied
}

fn basic_name_offset_y(attrs: &StationAttrs) -> String {
    let offset = match attrs {
        StationAttrs::GzmtrBasic(a) => a.name_offset_y,
        _ => GzmtrBasicAttrs::default().name_offset_y,
    };
    format!("{offset:?}").to_lowercase()
}

fn set_basic_name_offset_y(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<NameOffsetY>() else {
        return SetOutcome::Rejected;
    };
    ensure_basic(attrs).name_offset_y = offset;
    SetOutcome::Applied
}

fn basic_color(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrBasic(a) => a.color.background().to_string(),
        _ => GzmtrBasicAttrs::default().color.background().to_string(),
    }
}

fn set_basic_color(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    let Ok(color) = Color::new(value) else {
        return SetOutcome::Rejected;
    };
    let inner = ensure_basic(attrs);
    inner.color = inner.color.clone().with_background(color);
    SetOutcome::Applied
}

fn basic_line_code(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrBasic(a) => a.line_code.clone(),
        _ => GzmtrBasicAttrs::default().line_code,
    }
}

fn set_basic_line_code(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic(attrs).line_code = value.to_string();
    SetOutcome::Applied
}

fn basic_station_code(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrBasic(a) => a.station_code.clone(),
        _ => GzmtrBasicAttrs::default().station_code,
    }
}

fn set_basic_station_code(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic(attrs).station_code = value.to_string();
    SetOutcome::Applied
}

fn int_name_zh(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrInt(a) => a.names[0].clone(),
        _ => GzmtrIntAttrs::default().names[0].clone(),
    }
}

fn set_int_name_zh(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_int(attrs).names[0] = value.to_string();
    SetOutcome::Applied
}

fn int_name_en(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrInt(a) => a.names[1].clone(),
        _ => GzmtrIntAttrs::default().names[1].clone(),
    }
}

fn set_int_name_en(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_int(attrs).names[1] = value.to_string();
    SetOutcome::Applied
}

fn int_transfer_summary(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::GzmtrInt(a) => a.transfer.len().to_string(),
        _ => GzmtrIntAttrs::default().transfer.len().to_string(),
    }
}

fn reject_transfer_edit(_attrs: &mut StationAttrs, _value: &str) -> SetOutcome {
    SetOutcome::Rejected
}

pub(crate) fn basic_descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationAttrs::GzmtrBasic(GzmtrBasicAttrs::default()),
        vec![
            Field::text(
                "panel.details.station.gzmtrBasic.nameZh",
                basic_name_zh,
                set_basic_name_zh,
            ),
            Field::text(
                "panel.details.station.gzmtrBasic.nameEn",
                basic_name_en,
                set_basic_name_en,
            ),
            Field::select(
                "panel.details.station.gzmtrBasic.nameOffsetX",
                &NameOffsetX::OPTIONS,
                basic_name_offset_x,
                set_basic_name_offset_x,
            ),
            Field::select(
                "panel.details.station.gzmtrBasic.nameOffsetY",
                &NameOffsetY::OPTIONS,
                basic_name_offset_y,
                set_basic_name_offset_y,
            ),
            Field::color(
                "panel.details.station.gzmtrBasic.color",
                basic_color,
                set_basic_color,
            ),
            Field::text(
                "panel.details.station.gzmtrBasic.lineCode",
                basic_line_code,
                set_basic_line_code,
            ),
            Field::text(
                "panel.details.station.gzmtrBasic.stationCode",
                basic_station_code,
                set_basic_station_code,
            ),
        ],
        ElementMetadata::new("panel.details.station.gzmtrBasic.displayName")
            .with_cities(vec![CityCode::new("guangzhou")]),
    )
}

pub(crate) fn int_descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationAttrs::GzmtrInt(GzmtrIntAttrs::default()),
        vec![
            Field::text(
                "panel.details.station.gzmtrInt.nameZh",
                int_name_zh,
                set_int_name_zh,
            ),
            Field::text(
                "panel.details.station.gzmtrInt.nameEn",
                int_name_en,
                set_int_name_en,
            ),
            Field::custom(
                "panel.details.station.gzmtrInt.transfer",
                int_transfer_summary,
                reject_transfer_edit,
            ),
        ],
        ElementMetadata::new("panel.details.station.gzmtrInt.displayName")
            .with_cities(vec![CityCode::new("guangzhou")]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_defaults_carry_codes() {
        let attrs = GzmtrBasicAttrs::default();
        assert_eq!(attrs.line_code, "1");
        assert_eq!(attrs.station_code, "01");
    }

    #[test]
    fn test_code_fields_edit_codes() {
        let descriptor = basic_descriptor();
        let mut attrs = descriptor.default_attrs();

        let line_code = &descriptor.fields()[5];
        let station_code = &descriptor.fields()[6];
        assert!(line_code.set(&mut attrs, "3").is_applied());
        assert!(station_code.set(&mut attrs, "12").is_applied());

        match &attrs {
            StationAttrs::GzmtrBasic(a) => {
                assert_eq!(a.line_code, "3");
                assert_eq!(a.station_code, "12");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_color_field_rejects_invalid_hex() {
        let descriptor = basic_descriptor();
        let mut attrs = descriptor.default_attrs();
        let before = attrs.clone();

        let color = &descriptor.fields()[4];
        assert!(!color.set(&mut attrs, "not-a-color").is_applied());
        assert_eq!(attrs, before);
    }
}
