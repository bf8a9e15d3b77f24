//! Shanghai-convention station types: basic, the 2020 livery variant, and
//! the interchange marker.

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    field::{Field, SetOutcome},
    registry::{ElementMetadata, StationDescriptor},
    station::{NameOffsetX, NameOffsetY, StationAttrs, Transfer, default_names},
    theme::{CityCode, MonoColour, Theme},
};

/// Attributes of the plain Shanghai-style station tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShmetroBasicAttrs {
    pub names: [String; 2],
    pub name_offset_x: NameOffsetX,
    pub name_offset_y: NameOffsetY,
}

impl Default for ShmetroBasicAttrs {
    fn default() -> Self {
        Self {
            names: default_names(),
            name_offset_x: NameOffsetX::Right,
            name_offset_y: NameOffsetY::Up,
        }
    }
}

/// Attributes of the 2020-livery basic station, which carries its line's
/// theme so the marker can be tinted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShmetroBasic2020Attrs {
    pub names: [String; 2],
    pub color: Theme,
}

impl Default for ShmetroBasic2020Attrs {
    fn default() -> Self {
        Self {
            names: default_names(),
            color: Theme::new(
                CityCode::new("shanghai"),
                "sh1",
                Color::new("#E3002B").expect("valid default color"),
                MonoColour::White,
            ),
        }
    }
}

/// Attributes of the Shanghai-style interchange station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShmetroIntAttrs {
    pub names: [String; 2],
    pub name_offset_x: NameOffsetX,
    pub name_offset_y: NameOffsetY,
    pub transfer: Transfer,
}

impl Default for ShmetroIntAttrs {
    fn default() -> Self {
        Self {
            names: default_names(),
            name_offset_x: NameOffsetX::Right,
            name_offset_y: NameOffsetY::Up,
            transfer: vec![vec![]],
        }
    }
}

fn ensure_basic(attrs: &mut StationAttrs) -> &mut ShmetroBasicAttrs {
    if !matches!(attrs, StationAttrs::ShmetroBasic(_)) {
        *attrs = StationAttrs::ShmetroBasic(ShmetroBasicAttrs::default());
    }
    match attrs {
        StationAttrs::ShmetroBasic(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn ensure_basic_2020(attrs: &mut StationAttrs) -> &mut ShmetroBasic2020Attrs {
    if !matches!(attrs, StationAttrs::ShmetroBasic2020(_)) {
        *attrs = StationAttrs::ShmetroBasic2020(ShmetroBasic2020Attrs::default());
    }
    match attrs {
        StationAttrs::ShmetroBasic2020(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn ensure_int(attrs: &mut StationAttrs) -> &mut ShmetroIntAttrs {
    if !matches!(attrs, StationAttrs::ShmetroInt(_)) {
        *attrs = StationAttrs::ShmetroInt(ShmetroIntAttrs::default());
    }
    match attrs {
        StationAttrs::ShmetroInt(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn basic_name_zh(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroBasic(a) => a.names[0].clone(),
        _ => ShmetroBasicAttrs::default().names[0].clone(),
    }
}

fn set_basic_name_zh(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic(attrs).names[0] = value.to_string();
    SetOutcome::Applied
}

fn basic_name_en(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroBasic(a) => a.names[1].clone(),
        _ => ShmetroBasicAttrs::default().names[1].clone(),
    }
}

fn set_basic_name_en(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic(attrs).names[1] = value.to_string();
    SetOutcome::Applied
}

fn basic_name_offset_x(attrs: &StationAttrs) -> String {
    let offset = match attrs {
        StationAttrs::ShmetroBasic(a) => a.name_offset_x,
        _ => ShmetroBasicAttrs::default().name_offset_x,
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
        StationAttrs::ShmetroBasic(a) => a.name_offset_y,
        _ => ShmetroBasicAttrs::default().name_offset_y,
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

fn basic_2020_name_zh(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroBasic2020(a) => a.names[0].clone(),
        _ => ShmetroBasic2020Attrs::default().names[0].clone(),
    }
}

fn set_basic_2020_name_zh(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic_2020(attrs).names[0] = value.to_string();
    SetOutcome::Applied
}

fn basic_2020_name_en(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroBasic2020(a) => a.names[1].clone(),
        _ => ShmetroBasic2020Attrs::default().names[1].clone(),
    }
}

fn set_basic_2020_name_en(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_basic_2020(attrs).names[1] = value.to_string();
    SetOutcome::Applied
}

fn basic_2020_color(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroBasic2020(a) => a.color.background().to_string(),
        _ => ShmetroBasic2020Attrs::default().color.background().to_string(),
    }
}

fn set_basic_2020_color(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    let Ok(color) = Color::new(value) else {
        return SetOutcome::Rejected;
    };
    let inner = ensure_basic_2020(attrs);
    inner.color = inner.color.clone().with_background(color);
    SetOutcome::Applied
}

fn int_name_zh(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroInt(a) => a.names[0].clone(),
        _ => ShmetroIntAttrs::default().names[0].clone(),
    }
}

fn set_int_name_zh(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_int(attrs).names[0] = value.to_string();
    SetOutcome::Applied
}

fn int_name_en(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroInt(a) => a.names[1].clone(),
        _ => ShmetroIntAttrs::default().names[1].clone(),
    }
}

fn set_int_name_en(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    ensure_int(attrs).names[1] = value.to_string();
    SetOutcome::Applied
}

fn int_name_offset_x(attrs: &StationAttrs) -> String {
    let offset = match attrs {
        StationAttrs::ShmetroInt(a) => a.name_offset_x,
        _ => ShmetroIntAttrs::default().name_offset_x,
    };
    format!("{offset:?}").to_lowercase()
}

fn set_int_name_offset_x(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<NameOffsetX>() else {
        return SetOutcome::Rejected;
    };
    ensure_int(attrs).name_offset_x = offset;
    SetOutcome::Applied
}

fn int_name_offset_y(attrs: &StationAttrs) -> String {
    let offset = match attrs {
        StationAttrs::ShmetroInt(a) => a.name_offset_y,
        _ => ShmetroIntAttrs::default().name_offset_y,
    };
    format!("{offset:?}").to_lowercase()
}

fn set_int_name_offset_y(attrs: &mut StationAttrs, value: &str) -> SetOutcome {
    let Ok(offset) = value.parse::<NameOffsetY>() else {
        return SetOutcome::Rejected;
    };
    ensure_int(attrs).name_offset_y = offset;
    SetOutcome::Applied
}

fn int_transfer_summary(attrs: &StationAttrs) -> String {
    match attrs {
        StationAttrs::ShmetroInt(a) => a.transfer.len().to_string(),
        _ => ShmetroIntAttrs::default().transfer.len().to_string(),
    }
}

fn reject_transfer_edit(_attrs: &mut StationAttrs, _value: &str) -> SetOutcome {
    SetOutcome::Rejected
}

pub(crate) fn basic_descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationAttrs::ShmetroBasic(ShmetroBasicAttrs::default()),
        vec![
            Field::text(
                "panel.details.station.shmetroBasic.nameZh",
                basic_name_zh,
                set_basic_name_zh,
            ),
            Field::text(
                "panel.details.station.shmetroBasic.nameEn",
                basic_name_en,
                set_basic_name_en,
            ),
            Field::select(
                "panel.details.station.shmetroBasic.nameOffsetX",
                &NameOffsetX::OPTIONS,
                basic_name_offset_x,
                set_basic_name_offset_x,
            ),
            Field::select(
                "panel.details.station.shmetroBasic.nameOffsetY",
                &NameOffsetY::OPTIONS,
                basic_name_offset_y,
                set_basic_name_offset_y,
            ),
        ],
        ElementMetadata::new("panel.details.station.shmetroBasic.displayName")
            .with_cities(vec![CityCode::new("shanghai")]),
    )
}

pub(crate) fn basic_2020_descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationAttrs::ShmetroBasic2020(ShmetroBasic2020Attrs::default()),
        vec![
            Field::text(
                "panel.details.station.shmetroBasic2020.nameZh",
                basic_2020_name_zh,
                set_basic_2020_name_zh,
            ),
            Field::text(
                "panel.details.station.shmetroBasic2020.nameEn",
                basic_2020_name_en,
                set_basic_2020_name_en,
            ),
            Field::color(
                "panel.details.station.shmetroBasic2020.color",
                basic_2020_color,
                set_basic_2020_color,
            ),
        ],
        ElementMetadata::new("panel.details.station.shmetroBasic2020.displayName")
            .with_cities(vec![CityCode::new("shanghai")]),
    )
}

pub(crate) fn int_descriptor() -> StationDescriptor {
    StationDescriptor::new(
        StationAttrs::ShmetroInt(ShmetroIntAttrs::default()),
        vec![
            Field::text(
                "panel.details.station.shmetroInt.nameZh",
                int_name_zh,
                set_int_name_zh,
            ),
            Field::text(
                "panel.details.station.shmetroInt.nameEn",
                int_name_en,
                set_int_name_en,
            ),
            Field::select(
                "panel.details.station.shmetroInt.nameOffsetX",
                &NameOffsetX::OPTIONS,
                int_name_offset_x,
                set_int_name_offset_x,
            ),
            Field::select(
                "panel.details.station.shmetroInt.nameOffsetY",
                &NameOffsetY::OPTIONS,
                int_name_offset_y,
                set_int_name_offset_y,
            ),
            Field::custom(
                "panel.details.station.shmetroInt.transfer",
                int_transfer_summary,
                reject_transfer_edit,
            ),
        ],
        ElementMetadata::new("panel.details.station.shmetroInt.displayName")
            .with_cities(vec![CityCode::new("shanghai")]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn test_basic_fields_edit_names() {
        let descriptor = basic_descriptor();
        let mut attrs = descriptor.default_attrs();

        let name_zh = &descriptor.fields()[0];
        assert!(name_zh.set(&mut attrs, "人民广场").is_applied());
        assert_eq!(attrs.names()[0], "人民广场");
        assert_eq!(name_zh.get(&attrs), "人民广场");
    }

    #[test]
    fn test_offset_select_rejects_unknown_option() {
        let descriptor = basic_descriptor();
        let mut attrs = descriptor.default_attrs();
        let before = attrs.clone();

        let offset_x = &descriptor.fields()[2];
        assert_eq!(offset_x.kind(), FieldKind::Select);
        assert!(!offset_x.set(&mut attrs, "diagonal").is_applied());
        assert_eq!(attrs, before);
    }

    #[test]
    fn test_2020_color_field_round_trips_background() {
        let descriptor = basic_2020_descriptor();
        let mut attrs = descriptor.default_attrs();

        let color = &descriptor.fields()[2];
        assert!(color.set(&mut attrs, "#97D700").is_applied());
        match &attrs {
            StationAttrs::ShmetroBasic2020(a) => {
                assert_eq!(a.color.background(), Color::new("#97D700").unwrap());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_setter_resets_foreign_variant_to_own_defaults() {
        let mut attrs = StationAttrs::Mtr(crate::station::mtr::MtrAttrs::default());
        assert!(set_basic_name_zh(&mut attrs, "莘庄").is_applied());
        match &attrs {
            StationAttrs::ShmetroBasic(a) => {
                assert_eq!(a.names[0], "莘庄");
                assert_eq!(a.name_offset_x, NameOffsetX::Right);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
