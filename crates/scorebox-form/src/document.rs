//! A value-level stand-in for the claim page's form fields.
//!
//! The binder never touches a live DOM; it operates on this document model,
//! which records the only two things the synchronization rule cares about:
//! whether a checkbox is checked and whether a field is required. Tests
//! construct documents directly; the served page is kept in line with the
//! same binding configuration through the rendered client script.

/// What kind of form field an identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A checkbox — carries a meaningful `checked` state.
    Checkbox,
    /// Any other input — carries a meaningful `required` state.
    Input,
}

/// One form field: an identifier plus the two booleans the binder reads and
/// writes. Fields default to unchecked and not required, matching a field
/// authored without either attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub checked: bool,
    pub required: bool,
}

impl Field {
    /// An unchecked checkbox.
    pub fn checkbox(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: FieldKind::Checkbox,
            checked: false,
            required: false,
        }
    }

    /// A non-required input.
    pub fn input(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: FieldKind::Input,
            checked: false,
            required: false,
        }
    }

    /// Set the initial required flag (as authored in markup).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the initial checked flag (as authored in markup).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// An ordered collection of fields with identifier lookup.
///
/// Lookup returns the first field with a matching identifier; the document
/// does not reject duplicates, it just never finds the second one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDocument {
    fields: Vec<Field>,
}

impl FormDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with the given fields, in order.
    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Append a field.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Look up a field by identifier.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Look up a field by identifier, mutably.
    pub fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// The checked state of `id`, or `None` if it does not resolve.
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.field(id).map(|f| f.checked)
    }

    /// The required state of `id`, or `None` if it does not resolve.
    pub fn is_required(&self, id: &str) -> Option<bool> {
        self.field(id).map(|f| f.required)
    }

    /// Flip the checked state of a checkbox, as a user click would.
    ///
    /// Returns the new checked state, or `None` if `id` does not resolve to
    /// a checkbox. This only mutates the document — the caller decides
    /// whether a change event follows (see [`Binder::apply`]).
    ///
    /// [`Binder::apply`]: crate::Binder::apply
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Option<bool> {
        match self.field_mut(id) {
            Some(f) if f.kind == FieldKind::Checkbox => {
                f.checked = checked;
                Some(f.checked)
            }
            _ => None,
        }
    }
}
