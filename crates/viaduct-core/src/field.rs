//! Editable field schema for element attribute bags.
//!
//! Every element type descriptor exposes an ordered list of [`Field`]s so
//! that a property panel can render a generic form without per-type editor
//! code. A field knows how to read its value out of an attribute bag and how
//! to write a raw string back into it.
//!
//! Setters never fail loudly: input that does not pass a field's validation
//! (for example non-numeric text for a number field) produces
//! [`SetOutcome::Rejected`] and leaves the bag untouched, so the previous
//! value is retained.

/// The widget family a field should be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// Numeric input; the setter validates and rejects non-numeric text.
    Number,
    /// One-of-N choice; options are listed on the field.
    Select,
    /// Theme/color picker.
    Color,
    /// Type-specific widget supplied by the consumer.
    Custom,
}

/// Result of applying a field setter.
///
/// `Rejected` means the input failed validation and the attribute bag was
/// returned unchanged; callers treat it as "keep the previous value" and
/// must not surface it as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Applied,
    Rejected,
}

impl SetOutcome {
    /// Whether the setter actually wrote the value.
    pub fn is_applied(self) -> bool {
        self == SetOutcome::Applied
    }
}

/// A single editable field over an attribute bag of type `B`.
///
/// The getter renders the current value as a string (falling back to the
/// field's own type defaults when the bag holds a different variant); the
/// setter parses and applies a raw string. Both are plain function pointers
/// so descriptors stay `'static` and cheap to share.
pub struct Field<B> {
    kind: FieldKind,
    label: &'static str,
    options: &'static [&'static str],
    get: fn(&B) -> String,
    set: fn(&mut B, &str) -> SetOutcome,
}

impl<B> Field<B> {
    /// A free-form text field.
    pub fn text(label: &'static str, get: fn(&B) -> String, set: fn(&mut B, &str) -> SetOutcome) -> Self {
        Self {
            kind: FieldKind::Text,
            label,
            options: &[],
            get,
            set,
        }
    }

    /// A numeric field; its setter is expected to reject non-numeric input.
    pub fn number(
        label: &'static str,
        get: fn(&B) -> String,
        set: fn(&mut B, &str) -> SetOutcome,
    ) -> Self {
        Self {
            kind: FieldKind::Number,
            label,
            options: &[],
            get,
            set,
        }
    }

    /// A one-of-N select field.
    pub fn select(
        label: &'static str,
        options: &'static [&'static str],
        get: fn(&B) -> String,
        set: fn(&mut B, &str) -> SetOutcome,
    ) -> Self {
        Self {
            kind: FieldKind::Select,
            label,
            options,
            get,
            set,
        }
    }

    /// A theme color field. The getter/setter work on the background hex.
    pub fn color(
        label: &'static str,
        get: fn(&B) -> String,
        set: fn(&mut B, &str) -> SetOutcome,
    ) -> Self {
        Self {
            kind: FieldKind::Color,
            label,
            options: &[],
            get,
            set,
        }
    }

    /// A field edited through a dedicated widget rather than the generic form.
    ///
    /// The getter gives a read-only summary; the setter typically rejects
    /// everything so the generic form leaves the value alone.
    pub fn custom(
        label: &'static str,
        get: fn(&B) -> String,
        set: fn(&mut B, &str) -> SetOutcome,
    ) -> Self {
        Self {
            kind: FieldKind::Custom,
            label,
            options: &[],
            get,
            set,
        }
    }

    /// The widget family for this field.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The translation key for this field's label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Valid options for a select field; empty for other kinds.
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Read the current value out of `bag`, rendered as a string.
    pub fn get(&self, bag: &B) -> String {
        (self.get)(bag)
    }

    /// Parse `value` and write it into `bag`.
    ///
    /// Returns [`SetOutcome::Rejected`] (with `bag` untouched) when the
    /// value fails the field's validation.
    pub fn set(&self, bag: &mut B, value: &str) -> SetOutcome {
        (self.set)(bag, value)
    }
}

impl<B> std::fmt::Debug for Field<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("options", &self.options)
            .finish()
    }
}
