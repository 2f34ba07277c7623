//! Trigger-to-targets binding configuration.

use serde::{Deserialize, Serialize};

/// One trigger checkbox and the fields it makes mandatory while checked.
///
/// Target order is preserved: targets are synchronized in the order they
/// are listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Identifier of the trigger checkbox.
    pub trigger: String,
    /// Identifiers of the fields whose `required` flag follows the trigger.
    pub targets: Vec<String>,
}

impl Binding {
    /// Build a binding from string-ish parts.
    pub fn new(trigger: impl Into<String>, targets: &[&str]) -> Self {
        Self {
            trigger: trigger.into(),
            targets: targets.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// The full set of conditional-requirement bindings for one form.
///
/// This is a plain value passed into [`Binder::initialize`] and
/// [`client_script`] — there is no ambient global table, so tests can supply
/// any identifier set they like. A trigger with zero targets, or a target
/// listed under two triggers, is accepted as-is; no behavior is defined for
/// either shape.
///
/// [`Binder::initialize`]: crate::Binder::initialize
/// [`client_script`]: crate::client_script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementBindings {
    bindings: Vec<Binding>,
}

impl RequirementBindings {
    /// Build a configuration from an explicit binding list.
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// The bindings used by the score claim form.
    ///
    /// Opting into the public leaderboard makes the nickname mandatory;
    /// opting into the raffle makes the contact fields mandatory.
    pub fn claim_form() -> Self {
        Self::new(vec![
            Binding::new("wants-leaderboard", &["nickname"]),
            Binding::new("wants-hpi", &["email-hpi", "name-hpi"]),
        ])
    }

    /// All bindings, in declaration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Target identifiers bound to `trigger`, if the trigger is configured.
    pub fn targets_of(&self, trigger: &str) -> Option<&[String]> {
        self.bindings
            .iter()
            .find(|b| b.trigger == trigger)
            .map(|b| b.targets.as_slice())
    }

    /// Whether `trigger` names a configured trigger.
    pub fn has_trigger(&self, trigger: &str) -> bool {
        self.bindings.iter().any(|b| b.trigger == trigger)
    }

    /// The fields that are mandatory given the current checkbox states.
    ///
    /// `is_checked` is consulted once per trigger. This is the server-side
    /// projection of the rule: given what the client claims to have checked,
    /// these are the fields a valid submission must fill in.
    pub fn required_targets(&self, is_checked: impl Fn(&str) -> bool) -> Vec<&str> {
        let mut required = Vec::new();
        for binding in &self.bindings {
            if is_checked(&binding.trigger) {
                for target in &binding.targets {
                    required.push(target.as_str());
                }
            }
        }
        required
    }
}
