//! Field descriptors and their capability callbacks
//!
//! A descriptor is a record of optional pure functions rather than a class
//! hierarchy: any field may supply zero or more of `visible`, `disabled`,
//! `choices`, `get_value`, `set_value`, and `format_label`. Absence means
//! the documented default (visible, enabled, no choices, identity
//! transforms). Callbacks are total over well-formed contexts and never
//! panic; missing context data degrades permissively.

use crate::context::FieldContext;
use serde_json::Value;

/// Field value type, determining which UI control renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text (single line, or multiline when flagged)
    String,
    /// Checkbox / toggle
    Boolean,
    /// Multi-select backed by `choices`
    Array,
    /// Slider over a precomputed allowed-values table
    Range,
}

/// A single select/multi-select option: stored value plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Stored value
    pub value: String,
    /// Display label
    pub label: String,
}

impl Choice {
    /// Create a new choice
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Visibility predicate; absent means always visible.
pub type VisibleFn = fn(&FieldContext<'_>) -> bool;

/// Disable predicate; absent means never disabled.
pub type DisabledFn = fn(&FieldContext<'_>) -> bool;

/// Choice producer for select-style fields.
pub type ChoicesFn = fn(&FieldContext<'_>) -> Vec<Choice>;

/// Transform from the raw stored value to the edited representation.
pub type GetValueFn = fn(&Value) -> Value;

/// Transform from the edited representation back to the raw stored value.
/// Receives the context so org-level overrides can take precedence.
pub type SetValueFn = fn(Value, &FieldContext<'_>) -> Value;

/// Display label for a numeric value.
pub type FormatLabelFn = fn(i64) -> String;

/// Declarative metadata for one settings form field.
///
/// Immutable after construction; the registry keys descriptors by `name`
/// and insertion order defines default display order.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name, matching the resource attribute it edits
    pub name: &'static str,
    /// Value type
    pub kind: FieldKind,
    /// Whether a value must be supplied
    pub required: bool,
    /// Display label
    pub label: String,
    /// Help text shown alongside the control
    pub help: String,
    /// Placeholder text for empty inputs
    pub placeholder: Option<String>,
    /// Whether a string field renders as a multiline block
    pub multiline: bool,
    /// Legal values for range fields
    pub allowed_values: Option<Vec<u32>>,
    /// Choice producer
    pub choices: Option<ChoicesFn>,
    /// Visibility predicate
    pub visible: Option<VisibleFn>,
    /// Disable predicate
    pub disabled: Option<DisabledFn>,
    /// Reason shown when the disable predicate fires
    pub disabled_reason: Option<String>,
    /// Raw-to-edited transform
    pub get_value: Option<GetValueFn>,
    /// Edited-to-raw transform
    pub set_value: Option<SetValueFn>,
    /// Numeric display label
    pub format_label: Option<FormatLabelFn>,
}

impl FieldDescriptor {
    /// Create a descriptor with defaults: optional, visible, enabled, no
    /// transforms.
    #[must_use]
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            label: String::new(),
            help: String::new(),
            placeholder: None,
            multiline: false,
            allowed_values: None,
            choices: None,
            visible: None,
            disabled: None,
            disabled_reason: None,
            get_value: None,
            set_value: None,
            format_label: None,
        }
    }

    /// Mark the field as required
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// With display label
    #[inline]
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// With help text
    #[inline]
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// With placeholder text
    #[inline]
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Render as a multiline text block
    #[inline]
    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// With a legal-values table for range fields
    #[inline]
    #[must_use]
    pub fn allowed_values(mut self, values: Vec<u32>) -> Self {
        self.allowed_values = Some(values);
        self
    }

    /// With a choice producer
    #[inline]
    #[must_use]
    pub fn choices(mut self, choices: ChoicesFn) -> Self {
        self.choices = Some(choices);
        self
    }

    /// With a visibility predicate
    #[inline]
    #[must_use]
    pub fn visible(mut self, visible: VisibleFn) -> Self {
        self.visible = Some(visible);
        self
    }

    /// With a disable predicate and the reason to display when it fires.
    ///
    /// The reason is mandatory: a field disabled by an org-level override
    /// must tell the user why it cannot be edited.
    #[inline]
    #[must_use]
    pub fn disabled(mut self, disabled: DisabledFn, reason: impl Into<String>) -> Self {
        self.disabled = Some(disabled);
        self.disabled_reason = Some(reason.into());
        self
    }

    /// With a raw-to-edited transform
    #[inline]
    #[must_use]
    pub fn get_value(mut self, get_value: GetValueFn) -> Self {
        self.get_value = Some(get_value);
        self
    }

    /// With an edited-to-raw transform
    #[inline]
    #[must_use]
    pub fn set_value(mut self, set_value: SetValueFn) -> Self {
        self.set_value = Some(set_value);
        self
    }

    /// With a numeric display label
    #[inline]
    #[must_use]
    pub fn format_label(mut self, format_label: FormatLabelFn) -> Self {
        self.format_label = Some(format_label);
        self
    }

    /// Effective visibility under a context; defaults to visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self, ctx: &FieldContext<'_>) -> bool {
        self.visible.map_or(true, |f| f(ctx))
    }

    /// Effective disabled state under a context; defaults to enabled.
    #[inline]
    #[must_use]
    pub fn is_disabled(&self, ctx: &FieldContext<'_>) -> bool {
        self.disabled.is_some_and(|f| f(ctx))
    }

    /// Effective choices under a context; defaults to none.
    #[must_use]
    pub fn resolve_choices(&self, ctx: &FieldContext<'_>) -> Vec<Choice> {
        self.choices.map(|f| f(ctx)).unwrap_or_default()
    }

    /// Apply the raw-to-edited transform; identity when absent.
    #[must_use]
    pub fn apply_get_value(&self, raw: &Value) -> Value {
        match self.get_value {
            Some(f) => f(raw),
            None => raw.clone(),
        }
    }

    /// Apply the edited-to-raw transform; identity when absent.
    #[must_use]
    pub fn apply_set_value(&self, edited: Value, ctx: &FieldContext<'_>) -> Value {
        match self.set_value {
            Some(f) => f(edited, ctx),
            None => edited,
        }
    }

    /// Format a raw value for display via `format_label`.
    ///
    /// Accepts integers directly or numeric strings, mirroring how the
    /// stored value arrives from the wire.
    #[must_use]
    pub fn formatted_value(&self, raw: &Value) -> Option<String> {
        let format = self.format_label?;
        let hours = raw
            .as_i64()
            .or_else(|| raw.as_str().and_then(|s| s.trim().parse().ok()))?;
        Some(format(hours))
    }
}

/// The effective render-time state of one field under a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Field name
    pub name: &'static str,
    /// Whether the field should render at all
    pub visible: bool,
    /// Whether editing is disabled
    pub disabled: bool,
    /// Reason shown for a disabled field
    pub disabled_reason: Option<String>,
    /// Select options, if any
    pub choices: Vec<Choice>,
    /// Display label for the current value, if the field formats one
    pub formatted_value: Option<String>,
}
