//! Miscellaneous node types: decorations that sit on the canvas alongside
//! stations but are not part of any line's station sequence.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    error::RegistryError,
    field::{Field, SetOutcome},
    registry::{ElementMetadata, MiscNodeDescriptor},
    theme::{CityCode, MonoColour, Theme},
};

/// Discriminator for the concrete miscellaneous-node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MiscNodeType {
    Virtual,
    BjsubwayNumLineBadge,
    BjsubwayTextLineBadge,
}

impl MiscNodeType {
    /// Every registered miscellaneous-node type, in registry order.
    pub const ALL: [MiscNodeType; 3] = [
        MiscNodeType::Virtual,
        MiscNodeType::BjsubwayNumLineBadge,
        MiscNodeType::BjsubwayTextLineBadge,
    ];
}

impl From<MiscNodeType> for &'static str {
    fn from(val: MiscNodeType) -> Self {
        match val {
            MiscNodeType::Virtual => "virtual",
            MiscNodeType::BjsubwayNumLineBadge => "bjsubway-num-line-badge",
            MiscNodeType::BjsubwayTextLineBadge => "bjsubway-text-line-badge",
        }
    }
}

impl Display for MiscNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

impl FromStr for MiscNodeType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "virtual" => Ok(Self::Virtual),
            "bjsubway-num-line-badge" => Ok(Self::BjsubwayNumLineBadge),
            "bjsubway-text-line-badge" => Ok(Self::BjsubwayTextLineBadge),
            _ => Err(RegistryError::UnknownType(s.to_string())),
        }
    }
}

/// An invisible anchor that lines can attach to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualAttrs {}

/// The Beijing-style numbered line badge ("N 号线 / Line N").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BjsubwayNumLineBadgeAttrs {
    pub num: u32,
    pub color: Theme,
}

impl Default for BjsubwayNumLineBadgeAttrs {
    fn default() -> Self {
        Self {
            num: 1,
            color: Theme::new(
                CityCode::new("beijing"),
                "bj1",
                Color::new("#c23a30").expect("valid default color"),
                MonoColour::White,
            ),
        }
    }
}

/// The Beijing-style named line badge for lines without a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BjsubwayTextLineBadgeAttrs {
    pub names: [String; 2],
    pub color: Theme,
}

impl Default for BjsubwayTextLineBadgeAttrs {
    fn default() -> Self {
        Self {
            names: ["八通线".to_string(), "Batong Line".to_string()],
            color: Theme::new(
                CityCode::new("beijing"),
                "bjbt",
                Color::new("#c23a30").expect("valid default color"),
                MonoColour::White,
            ),
        }
    }
}

/// Attribute bag for a miscellaneous node, tagged by its concrete kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MiscNodeAttrs {
    Virtual(VirtualAttrs),
    BjsubwayNumLineBadge(BjsubwayNumLineBadgeAttrs),
    BjsubwayTextLineBadge(BjsubwayTextLineBadgeAttrs),
}

impl MiscNodeAttrs {
    /// The tag this bag belongs to.
    pub fn misc_node_type(&self) -> MiscNodeType {
        match self {
            MiscNodeAttrs::Virtual(_) => MiscNodeType::Virtual,
            MiscNodeAttrs::BjsubwayNumLineBadge(_) => MiscNodeType::BjsubwayNumLineBadge,
            MiscNodeAttrs::BjsubwayTextLineBadge(_) => MiscNodeType::BjsubwayTextLineBadge,
        }
    }
}

fn ensure_num_badge(attrs: &mut MiscNodeAttrs) -> &mut BjsubwayNumLineBadgeAttrs {
    if !matches!(attrs, MiscNodeAttrs::BjsubwayNumLineBadge(_)) {
        *attrs = MiscNodeAttrs::BjsubwayNumLineBadge(BjsubwayNumLineBadgeAttrs::default());
    }
    match attrs {
        MiscNodeAttrs::BjsubwayNumLineBadge(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn ensure_text_badge(attrs: &mut MiscNodeAttrs) -> &mut BjsubwayTextLineBadgeAttrs {
    if !matches!(attrs, MiscNodeAttrs::BjsubwayTextLineBadge(_)) {
        *attrs = MiscNodeAttrs::BjsubwayTextLineBadge(BjsubwayTextLineBadgeAttrs::default());
    }
    match attrs {
        MiscNodeAttrs::BjsubwayTextLineBadge(inner) => inner,
        _ => unreachable!("variant ensured above"),
    }
}

fn num_badge_num(attrs: &MiscNodeAttrs) -> String {
    match attrs {
        MiscNodeAttrs::BjsubwayNumLineBadge(a) => a.num.to_string(),
        _ => BjsubwayNumLineBadgeAttrs::default().num.to_string(),
    }
}

fn set_num_badge_num(attrs: &mut MiscNodeAttrs, value: &str) -> SetOutcome {
    let Ok(num) = value.parse::<u32>() else {
        return SetOutcome::Rejected;
    };
    ensure_num_badge(attrs).num = num;
    SetOutcome::Applied
}

fn num_badge_color(attrs: &MiscNodeAttrs) -> String {
    match attrs {
        MiscNodeAttrs::BjsubwayNumLineBadge(a) => a.color.background().to_string(),
        _ => BjsubwayNumLineBadgeAttrs::default().color.background().to_string(),
    }
}

fn set_num_badge_color(attrs: &mut MiscNodeAttrs, value: &str) -> SetOutcome {
    let Ok(color) = Color::new(value) else {
        return SetOutcome::Rejected;
    };
    let inner = ensure_num_badge(attrs);
    inner.color = inner.color.clone().with_background(color);
    SetOutcome::Applied
}

fn text_badge_name_zh(attrs: &MiscNodeAttrs) -> String {
    match attrs {
        MiscNodeAttrs::BjsubwayTextLineBadge(a) => a.names[0].clone(),
        _ => BjsubwayTextLineBadgeAttrs::default().names[0].clone(),
    }
}

fn set_text_badge_name_zh(attrs: &mut MiscNodeAttrs, value: &str) -> SetOutcome {
    ensure_text_badge(attrs).names[0] = value.to_string();
    SetOutcome::Applied
}

fn text_badge_name_en(attrs: &MiscNodeAttrs) -> String {
    match attrs {
        MiscNodeAttrs::BjsubwayTextLineBadge(a) => a.names[1].clone(),
        _ => BjsubwayTextLineBadgeAttrs::default().names[1].clone(),
    }
}

fn set_text_badge_name_en(attrs: &mut MiscNodeAttrs, value: &str) -> SetOutcome {
    ensure_text_badge(attrs).names[1] = value.to_string();
    SetOutcome::Applied
}

fn text_badge_color(attrs: &MiscNodeAttrs) -> String {
    match attrs {
        MiscNodeAttrs::BjsubwayTextLineBadge(a) => a.color.background().to_string(),
        _ => BjsubwayTextLineBadgeAttrs::default().color.background().to_string(),
    }
}

fn set_text_badge_color(attrs: &mut MiscNodeAttrs, value: &str) -> SetOutcome {
    let Ok(color) = Color::new(value) else {
        return SetOutcome::Rejected;
    };
    let inner = ensure_text_badge(attrs);
    inner.color = inner.color.clone().with_background(color);
    SetOutcome::Applied
}

pub(crate) fn virtual_descriptor() -> MiscNodeDescriptor {
    MiscNodeDescriptor::new(
        MiscNodeAttrs::Virtual(VirtualAttrs::default()),
        vec![],
        ElementMetadata::new("panel.details.node.virtual.displayName"),
    )
}

pub(crate) fn num_badge_descriptor() -> MiscNodeDescriptor {
    MiscNodeDescriptor::new(
        MiscNodeAttrs::BjsubwayNumLineBadge(BjsubwayNumLineBadgeAttrs::default()),
        vec![
            Field::number(
                "panel.details.node.bjsubwayNumLineBadge.num",
                num_badge_num,
                set_num_badge_num,
            ),
            Field::color(
                "panel.details.node.bjsubwayNumLineBadge.color",
                num_badge_color,
                set_num_badge_color,
            ),
        ],
        ElementMetadata::new("panel.details.node.bjsubwayNumLineBadge.displayName")
            .with_cities(vec![CityCode::new("beijing")]),
    )
}

pub(crate) fn text_badge_descriptor() -> MiscNodeDescriptor {
    MiscNodeDescriptor::new(
        MiscNodeAttrs::BjsubwayTextLineBadge(BjsubwayTextLineBadgeAttrs::default()),
        vec![
            Field::text(
                "panel.details.node.bjsubwayTextLineBadge.nameZh",
                text_badge_name_zh,
                set_text_badge_name_zh,
            ),
            Field::text(
                "panel.details.node.bjsubwayTextLineBadge.nameEn",
                text_badge_name_en,
                set_text_badge_name_en,
            ),
            Field::color(
                "panel.details.node.bjsubwayTextLineBadge.color",
                text_badge_color,
                set_text_badge_color,
            ),
        ],
        ElementMetadata::new("panel.details.node.bjsubwayTextLineBadge.displayName")
            .with_cities(vec![CityCode::new("beijing")]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_field_rejects_non_numeric_and_keeps_value() {
        let descriptor = num_badge_descriptor();
        let mut attrs = descriptor.default_attrs();
        let before = attrs.clone();

        let num = &descriptor.fields()[0];
        assert_eq!(num.set(&mut attrs, "ten"), SetOutcome::Rejected);
        assert_eq!(attrs, before);
    }

    #[test]
    fn test_num_field_applies_numeric_input() {
        let descriptor = num_badge_descriptor();
        let mut attrs = descriptor.default_attrs();

        let num = &descriptor.fields()[0];
        assert!(num.set(&mut attrs, "13").is_applied());
        match &attrs {
            MiscNodeAttrs::BjsubwayNumLineBadge(a) => assert_eq!(a.num, 13),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_misc_tags_round_trip() {
        for ty in MiscNodeType::ALL {
            let tag: &'static str = ty.into();
            assert_eq!(tag.parse::<MiscNodeType>(), Ok(ty));
        }
    }
}
