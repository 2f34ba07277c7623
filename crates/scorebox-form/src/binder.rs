//! Synchronization of `required` flags with their trigger checkboxes.

use thiserror::Error;

use crate::bindings::RequirementBindings;
use crate::document::{FieldKind, FormDocument};

/// Errors from applying a change for a specific trigger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// The identifier is not a configured trigger.
    #[error("unknown trigger identifier: {0}")]
    UnknownTrigger(String),
    /// The configured trigger does not resolve to any field in the document.
    #[error("trigger field not found in document: {0}")]
    MissingTrigger(String),
    /// The identifier resolves to a field that is not a checkbox.
    #[error("trigger field is not a checkbox: {0}")]
    NotACheckbox(String),
}

/// What `initialize` managed to wire up, and which identifiers it could not
/// resolve. An incomplete report is not fatal — the resolvable bindings are
/// active regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Triggers that resolved to a checkbox and were synchronized.
    pub bound_triggers: Vec<String>,
    /// Configured triggers absent from the document (or not checkboxes);
    /// their targets were left untouched.
    pub missing_triggers: Vec<String>,
    /// Targets of bound triggers absent from the document.
    pub missing_targets: Vec<String>,
}

impl InitReport {
    /// True when every configured identifier resolved.
    pub fn is_complete(&self) -> bool {
        self.missing_triggers.is_empty() && self.missing_targets.is_empty()
    }
}

/// The outcome of one change application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The trigger whose change was applied.
    pub trigger: String,
    /// The checked state read from the trigger at application time.
    pub checked: bool,
    /// Targets whose `required` flag was written.
    pub synced: Vec<String>,
    /// Targets that did not resolve and were skipped.
    pub missing: Vec<String>,
}

/// Keeps target fields' `required` flags equal to their trigger checkboxes'
/// checked state.
///
/// [`Binder::initialize`] is the explicit entry point the host calls once
/// the document's fields exist (for the live page, that moment is
/// `DOMContentLoaded` — see [`client_script`]). From then on the invariant
/// holds: after every applied change, each resolvable target's `required`
/// equals its trigger's current `checked`.
///
/// [`client_script`]: crate::client_script
#[derive(Debug, Clone)]
pub struct Binder {
    bindings: RequirementBindings,
}

impl Binder {
    /// Wire up the bindings against a document and perform the initial
    /// synchronization.
    ///
    /// Every configured trigger that resolves to a checkbox has its targets
    /// synchronized immediately, so fields authored with a stale `required`
    /// flag are corrected at this point. Identifiers that do not resolve
    /// are collected into the report and logged; they never abort the
    /// remaining bindings.
    pub fn initialize(
        document: &mut FormDocument,
        bindings: RequirementBindings,
    ) -> (Self, InitReport) {
        let mut report = InitReport::default();

        for binding in bindings.bindings() {
            let checked = match document.field(&binding.trigger) {
                Some(f) if f.kind == FieldKind::Checkbox => f.checked,
                Some(_) => {
                    tracing::warn!(id = %binding.trigger, "trigger field is not a checkbox, skipping binding");
                    report.missing_triggers.push(binding.trigger.clone());
                    continue;
                }
                None => {
                    tracing::warn!(id = %binding.trigger, "trigger field not found, skipping binding");
                    report.missing_triggers.push(binding.trigger.clone());
                    continue;
                }
            };

            report.bound_triggers.push(binding.trigger.clone());
            for target in &binding.targets {
                match document.field_mut(target) {
                    Some(f) => f.required = checked,
                    None => {
                        tracing::warn!(id = %target, trigger = %binding.trigger, "target field not found");
                        report.missing_targets.push(target.clone());
                    }
                }
            }
        }

        (Self { bindings }, report)
    }

    /// The configuration this binder was initialized with.
    pub fn bindings(&self) -> &RequirementBindings {
        &self.bindings
    }

    /// Apply a change event for `trigger`.
    ///
    /// Reads the trigger's checked state at this moment and writes it to the
    /// `required` flag of every configured target, in order. Only the
    /// `required` flag is written; values and other state are untouched.
    /// Re-applying an unchanged state is a no-op by construction.
    ///
    /// A target that does not resolve is recorded in the report and skipped;
    /// the remaining targets are still written.
    pub fn apply(
        &self,
        document: &mut FormDocument,
        trigger: &str,
    ) -> Result<SyncReport, BindError> {
        let targets = self
            .bindings
            .targets_of(trigger)
            .ok_or_else(|| BindError::UnknownTrigger(trigger.to_string()))?;

        let checked = match document.field(trigger) {
            Some(f) if f.kind == FieldKind::Checkbox => f.checked,
            Some(_) => return Err(BindError::NotACheckbox(trigger.to_string())),
            None => return Err(BindError::MissingTrigger(trigger.to_string())),
        };

        let mut report = SyncReport {
            trigger: trigger.to_string(),
            checked,
            synced: Vec::new(),
            missing: Vec::new(),
        };

        for target in targets {
            match document.field_mut(target) {
                Some(f) => {
                    f.required = checked;
                    report.synced.push(target.clone());
                }
                None => {
                    tracing::warn!(id = %target, trigger, "target field not found");
                    report.missing.push(target.clone());
                }
            }
        }

        Ok(report)
    }
}
