//! The element type registry.
//!
//! Every element kind (station, line path, line style, miscellaneous node)
//! is described by a descriptor holding its default attributes, its editable
//! field schema, and display metadata. The registry maps each type tag to its
//! descriptor and is the single dispatch point for type-polymorphic element
//! handling: property panels, the importer, and type switching all resolve
//! behavior here instead of branching on concrete types.
//!
//! The process-wide registry is built once by [`ElementRegistry::standard`]
//! and never mutated afterwards, so shared references to it are safe to read
//! from any thread without synchronization.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::{
    error::RegistryError,
    field::Field,
    line::{LinePathAttrs, LinePathType, LineStyleAttrs, LineStyleType, paths, styles},
    misc_node::{self, MiscNodeAttrs, MiscNodeType},
    station::{StationAttrs, StationType, gzmtr, mtr, shmetro},
    theme::CityCode,
};

/// The drawing surfaces an element can appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasType {
    RailMap,
    Platform,
}

/// Railway class an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryType {
    Metro,
    NationalRail,
    LightRail,
    Footpath,
}

/// Display metadata shared by stations, line paths, and miscellaneous nodes.
///
/// `display_name` is a translation key resolved by the presentation layer;
/// the remaining lists drive the element picker's filters.
#[derive(Debug, Clone)]
pub struct ElementMetadata {
    display_name: &'static str,
    cities: Vec<CityCode>,
    canvases: Vec<CanvasType>,
    categories: Vec<CategoryType>,
    tags: Vec<&'static str>,
}

impl ElementMetadata {
    /// Metadata with the given display-name key and picker defaults
    /// (no city restriction, rail-map canvas, metro category).
    pub fn new(display_name: &'static str) -> Self {
        Self {
            display_name,
            cities: vec![],
            canvases: vec![CanvasType::RailMap],
            categories: vec![CategoryType::Metro],
            tags: vec![],
        }
    }

    /// Restrict this element to the given cities.
    pub fn with_cities(mut self, cities: Vec<CityCode>) -> Self {
        self.cities = cities;
        self
    }

    /// Replace the canvases this element can appear on.
    pub fn with_canvases(mut self, canvases: Vec<CanvasType>) -> Self {
        self.canvases = canvases;
        self
    }

    /// Replace the railway categories this element belongs to.
    pub fn with_categories(mut self, categories: Vec<CategoryType>) -> Self {
        self.categories = categories;
        self
    }

    /// Attach free-form search tags.
    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn cities(&self) -> &[CityCode] {
        &self.cities
    }

    pub fn canvases(&self) -> &[CanvasType] {
        &self.canvases
    }

    pub fn categories(&self) -> &[CategoryType] {
        &self.categories
    }

    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }
}

/// Display metadata for line styles, which advertise the path types they can
/// draw instead of picker filters.
#[derive(Debug, Clone)]
pub struct StyleMetadata {
    display_name: &'static str,
    supported_paths: Vec<LinePathType>,
}

impl StyleMetadata {
    pub fn new(display_name: &'static str, supported_paths: Vec<LinePathType>) -> Self {
        Self {
            display_name,
            supported_paths,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn supported_paths(&self) -> &[LinePathType] {
        &self.supported_paths
    }
}

/// A registry entry: default attributes, editable fields, and metadata for
/// one element type.
///
/// The canonical default attributes are private; [`Descriptor::default_attrs`]
/// hands out an independent deep copy on every call, so no two elements (and
/// no element and the registry) ever alias the same bag.
#[derive(Debug)]
pub struct Descriptor<A: Clone, M> {
    default_attrs: A,
    fields: Vec<Field<A>>,
    metadata: M,
}

impl<A: Clone, M> Descriptor<A, M> {
    pub fn new(default_attrs: A, fields: Vec<Field<A>>, metadata: M) -> Self {
        Self {
            default_attrs,
            fields,
            metadata,
        }
    }

    /// An independent deep copy of this type's default attributes.
    pub fn default_attrs(&self) -> A {
        self.default_attrs.clone()
    }

    /// The ordered editable field schema for this type.
    pub fn fields(&self) -> &[Field<A>] {
        &self.fields
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }
}

pub type StationDescriptor = Descriptor<StationAttrs, ElementMetadata>;
pub type MiscNodeDescriptor = Descriptor<MiscNodeAttrs, ElementMetadata>;
pub type LinePathDescriptor = Descriptor<LinePathAttrs, ElementMetadata>;
pub type LineStyleDescriptor = Descriptor<LineStyleAttrs, StyleMetadata>;

static STANDARD: OnceLock<ElementRegistry> = OnceLock::new();

/// The capability table mapping type tags to descriptors.
///
/// Tables are insertion-ordered so pickers and forms list types
/// deterministically. A lookup miss means the document references a type this
/// build does not know about.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    stations: IndexMap<StationType, StationDescriptor>,
    line_paths: IndexMap<LinePathType, LinePathDescriptor>,
    line_styles: IndexMap<LineStyleType, LineStyleDescriptor>,
    misc_nodes: IndexMap<MiscNodeType, MiscNodeDescriptor>,
}

impl ElementRegistry {
    /// The process-wide registry with every built-in element type, built on
    /// first use and immutable afterwards.
    pub fn standard() -> &'static ElementRegistry {
        STANDARD.get_or_init(Self::build_standard)
    }

    fn build_standard() -> Self {
        let mut registry = Self::default();

        registry
            .stations
            .insert(StationType::ShmetroBasic, shmetro::basic_descriptor());
        registry
            .stations
            .insert(StationType::ShmetroBasic2020, shmetro::basic_2020_descriptor());
        registry
            .stations
            .insert(StationType::ShmetroInt, shmetro::int_descriptor());
        registry
            .stations
            .insert(StationType::GzmtrBasic, gzmtr::basic_descriptor());
        registry
            .stations
            .insert(StationType::GzmtrInt, gzmtr::int_descriptor());
        registry.stations.insert(StationType::Mtr, mtr::descriptor());

        registry
            .line_paths
            .insert(LinePathType::Simple, paths::simple_descriptor());
        registry
            .line_paths
            .insert(LinePathType::Diagonal, paths::diagonal_descriptor());
        registry
            .line_paths
            .insert(LinePathType::Perpendicular, paths::perpendicular_descriptor());

        registry
            .line_styles
            .insert(LineStyleType::SingleColor, styles::single_color_descriptor());
        registry.line_styles.insert(
            LineStyleType::ShmetroVirtualInt,
            styles::shmetro_virtual_int_descriptor(),
        );
        registry.line_styles.insert(
            LineStyleType::GzmtrVirtualInt,
            styles::gzmtr_virtual_int_descriptor(),
        );
        registry
            .line_styles
            .insert(LineStyleType::River, styles::river_descriptor());

        registry
            .misc_nodes
            .insert(MiscNodeType::Virtual, misc_node::virtual_descriptor());
        registry.misc_nodes.insert(
            MiscNodeType::BjsubwayNumLineBadge,
            misc_node::num_badge_descriptor(),
        );
        registry.misc_nodes.insert(
            MiscNodeType::BjsubwayTextLineBadge,
            misc_node::text_badge_descriptor(),
        );

        registry
    }

    /// Look up a station descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] when the tag is not registered,
    /// which signals a configuration or version mismatch.
    pub fn station(&self, ty: StationType) -> Result<&StationDescriptor, RegistryError> {
        self.stations
            .get(&ty)
            .ok_or_else(|| RegistryError::UnknownType(ty.to_string()))
    }

    /// Look up a line path descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] when the tag is not registered.
    pub fn line_path(&self, ty: LinePathType) -> Result<&LinePathDescriptor, RegistryError> {
        self.line_paths
            .get(&ty)
            .ok_or_else(|| RegistryError::UnknownType(ty.to_string()))
    }

    /// Look up a line style descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] when the tag is not registered.
    pub fn line_style(&self, ty: LineStyleType) -> Result<&LineStyleDescriptor, RegistryError> {
        self.line_styles
            .get(&ty)
            .ok_or_else(|| RegistryError::UnknownType(ty.to_string()))
    }

    /// Look up a miscellaneous-node descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] when the tag is not registered.
    pub fn misc_node(&self, ty: MiscNodeType) -> Result<&MiscNodeDescriptor, RegistryError> {
        self.misc_nodes
            .get(&ty)
            .ok_or_else(|| RegistryError::UnknownType(ty.to_string()))
    }

    /// Registered station types, in registry order.
    pub fn station_types(&self) -> impl Iterator<Item = StationType> + '_ {
        self.stations.keys().copied()
    }

    /// Registered line path types, in registry order.
    pub fn line_path_types(&self) -> impl Iterator<Item = LinePathType> + '_ {
        self.line_paths.keys().copied()
    }

    /// Registered line style types, in registry order.
    pub fn line_style_types(&self) -> impl Iterator<Item = LineStyleType> + '_ {
        self.line_styles.keys().copied()
    }

    /// Registered miscellaneous-node types, in registry order.
    pub fn misc_node_types(&self) -> impl Iterator<Item = MiscNodeType> + '_ {
        self.misc_nodes.keys().copied()
    }
}
