//! Line style drawing attributes and descriptors.

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    field::{Field, SetOutcome},
    line::{LinePathType, LineStyleAttrs},
    registry::{LineStyleDescriptor, StyleMetadata},
    theme::{CityCode, MonoColour, Theme},
};

/// A stroke in the line's theme color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleColorAttrs {
    pub color: Theme,
}

impl Default for SingleColorAttrs {
    fn default() -> Self {
        Self {
            color: Theme::new(
                CityCode::new("shanghai"),
                "sh1",
                Color::new("#E3002B").expect("valid default color"),
                MonoColour::White,
            ),
        }
    }
}

/// The Shanghai-style out-of-station interchange stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShmetroVirtualIntAttrs {}

/// The Guangzhou-style out-of-station interchange stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GzmtrVirtualIntAttrs {}

/// A wide rounded stroke for rivers and other scenery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverAttrs {
    pub color: Theme,
    pub width: f64,
}

impl Default for RiverAttrs {
    fn default() -> Self {
        Self {
            color: Theme::new(
                CityCode::new("shanghai"),
                "river",
                Color::new("#9EE3F9").expect("valid default color"),
                MonoColour::White,
            ),
            width: 20.0,
        }
    }
}

fn ensure_single_color(attrs: &mut LineStyleAttrs) -> &mut SingleColorAttrs {
    if !matches!(attrs, LineStyleAttrs::SingleColor(_)) {
        *attrs = LineStyleAttrs::SingleColor(SingleColorAttrs::default());
    }
    match attrs {
        LineStyleAttrs::SingleColor(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn ensure_river(attrs: &mut LineStyleAttrs) -> &mut RiverAttrs {
    if !matches!(attrs, LineStyleAttrs::River(_)) {
        *attrs = LineStyleAttrs::River(RiverAttrs::default());
    }
    match attrs {
        LineStyleAttrs::River(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn single_color(attrs: &LineStyleAttrs) -> String {
    match attrs {
        LineStyleAttrs::SingleColor(a) => a.color.background().to_string(),
        _ => SingleColorAttrs::default().color.background().to_string(),
    }
}

fn set_single_color(attrs: &mut LineStyleAttrs, value: &str) -> SetOutcome {
    let Ok(color) = Color::new(value) else {
        return SetOutcome::Rejected;
    };
    let inner = ensure_single_color(attrs);
    inner.color = inner.color.clone().with_background(color);
    SetOutcome::Applied
}

fn river_color(attrs: &LineStyleAttrs) -> String {
    match attrs {
        LineStyleAttrs::River(a) => a.color.background().to_string(),
        _ => RiverAttrs::default().color.background().to_string(),
    }
}

fn set_river_color(attrs: &mut LineStyleAttrs, value: &str) -> SetOutcome {
    let Ok(color) = Color::new(value) else {
        return SetOutcome::Rejected;
    };
    let inner = ensure_river(attrs);
    inner.color = inner.color.clone().with_background(color);
    SetOutcome::Applied
}

fn river_width(attrs: &LineStyleAttrs) -> String {
    match attrs {
        LineStyleAttrs::River(a) => a.width.to_string(),
        _ => RiverAttrs::default().width.to_string(),
    }
}

fn set_river_width(attrs: &mut LineStyleAttrs, value: &str) -> SetOutcome {
    let Ok(width) = value.parse::<f64>() else {
        return SetOutcome::Rejected;
    };
    ensure_river(attrs).width = width;
    SetOutcome::Applied
}

pub(crate) fn single_color_descriptor() -> LineStyleDescriptor {
    LineStyleDescriptor::new(
        LineStyleAttrs::SingleColor(SingleColorAttrs::default()),
        vec![Field::color(
            "panel.details.line.singleColor.color",
            single_color,
            set_single_color,
        )],
        StyleMetadata::new(
            "panel.details.line.singleColor.displayName",
            LinePathType::ALL.to_vec(),
        ),
    )
}

pub(crate) fn shmetro_virtual_int_descriptor() -> LineStyleDescriptor {
    LineStyleDescriptor::new(
        LineStyleAttrs::ShmetroVirtualInt(ShmetroVirtualIntAttrs::default()),
        vec![],
        StyleMetadata::new(
            "panel.details.line.shmetroVirtualInt.displayName",
            LinePathType::ALL.to_vec(),
        ),
    )
}

pub(crate) fn gzmtr_virtual_int_descriptor() -> LineStyleDescriptor {
    LineStyleDescriptor::new(
        LineStyleAttrs::GzmtrVirtualInt(GzmtrVirtualIntAttrs::default()),
        vec![],
        StyleMetadata::new(
            "panel.details.line.gzmtrVirtualInt.displayName",
            LinePathType::ALL.to_vec(),
        ),
    )
}

pub(crate) fn river_descriptor() -> LineStyleDescriptor {
    LineStyleDescriptor::new(
        LineStyleAttrs::River(RiverAttrs::default()),
        vec![
            Field::color(
                "panel.details.line.river.color",
                river_color,
                set_river_color,
            ),
            Field::number(
                "panel.details.line.river.width",
                river_width,
                set_river_width,
            ),
        ],
        StyleMetadata::new(
            "panel.details.line.river.displayName",
            LinePathType::ALL.to_vec(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_river_width_rejects_non_numeric() {
        let descriptor = river_descriptor();
        let mut attrs = descriptor.default_attrs();
        let before = attrs.clone();

        let width = &descriptor.fields()[1];
        assert_eq!(width.set(&mut attrs, "wide"), SetOutcome::Rejected);
        assert_eq!(attrs, before);
    }

    #[test]
    fn test_single_color_updates_background() {
        let descriptor = single_color_descriptor();
        let mut attrs = descriptor.default_attrs();

        let color = &descriptor.fields()[0];
        assert!(color.set(&mut attrs, "#009943").is_applied());
        match &attrs {
            LineStyleAttrs::SingleColor(a) => {
                assert_eq!(a.color.background(), Color::new("#009943").unwrap());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_every_style_supports_every_path() {
        for descriptor in [
            single_color_descriptor(),
            shmetro_virtual_int_descriptor(),
            gzmtr_virtual_int_descriptor(),
            river_descriptor(),
        ] {
            assert_eq!(descriptor.metadata().supported_paths(), LinePathType::ALL);
        }
    }
}
