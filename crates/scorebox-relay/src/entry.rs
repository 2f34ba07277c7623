//! Registration entry data and its mapping onto the upstream form fields.

use serde::Serialize;

/// The occupation options the upstream form accepts.
///
/// The claim form submits machine-friendly values; the upstream form wants
/// its own fixed (German) display strings, so the mapping lives here next
/// to the rest of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupation {
    School,
    University,
    Parent,
    Other,
}

impl Occupation {
    /// Parse the claim form's occupation value. Unknown values fall back to
    /// [`Occupation::Other`] rather than failing the whole entry.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "school" => Self::School,
            "university" => Self::University,
            "parent" => Self::Parent,
            _ => Self::Other,
        }
    }

    /// The exact string the upstream form expects.
    pub fn upstream_value(self) -> &'static str {
        match self {
            Self::School => "Schüler:in",
            Self::University => "Student:in",
            Self::Parent => "Elternteil",
            Self::Other => "sonstiges",
        }
    }
}

/// One raffle entry, as collected by the claim form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationEntry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub occupation: Occupation,
    /// Whether the player opted into the newsletter.
    pub newsletter_opt_in: bool,
}

impl RegistrationEntry {
    /// Build an entry from the claim form's single full-name field.
    ///
    /// The name is split on its last whitespace: everything before it is
    /// the first name, the final token the last name. A single-token name
    /// goes into the last-name field (the upstream form keys the person on
    /// it) with an empty first name.
    pub fn from_claim(
        full_name: &str,
        email: impl Into<String>,
        occupation: Occupation,
        newsletter_opt_in: bool,
    ) -> Self {
        let (first_name, last_name) = split_name(full_name);
        Self {
            first_name,
            last_name,
            email: email.into(),
            occupation,
            newsletter_opt_in,
        }
    }
}

/// Split a full name into (first, last) on the last whitespace.
pub fn split_name(full_name: &str) -> (String, String) {
    let trimmed = full_name.trim();
    match trimmed.rsplit_once(char::is_whitespace) {
        Some((first, last)) => (first.trim_end().to_string(), last.to_string()),
        None => (String::new(), trimmed.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Wire contract
// ---------------------------------------------------------------------------

/// `zz_action` value for a new registration.
const ACTION_INSERT: &str = "insert";

/// The event this deployment registers entries for.
const EVENT_ID: u64 = 4062;

/// The exact consent string the upstream form records.
const DATA_PROCESSING_CONSENT: &str = "Ja, ich stimme zu.";

/// The entry as the upstream form wants it on the wire. Field names are the
/// form's own input names and must not be changed.
#[derive(Debug, Serialize)]
pub(crate) struct WireEntry<'a> {
    #[serde(rename = "persons[0][first_name]")]
    first_name: &'a str,
    #[serde(rename = "persons[0][last_name]")]
    last_name: &'a str,
    #[serde(rename = "contactdetails_5[0][identification]")]
    email: &'a str,
    #[serde(rename = "registrationvarchars_103[0][registrationvarchar]")]
    occupation: &'static str,
    #[serde(rename = "registrationvarchars_105[0][registrationvarchar]")]
    email_consent: &'static str,
    #[serde(rename = "registrationvarchars_106[0][registrationvarchar]")]
    data_processing_consent: &'static str,
    #[serde(rename = "zz_id")]
    token: &'a str,
    #[serde(rename = "zz_action")]
    action: &'static str,
    #[serde(rename = "events_contacts[0][event_id]")]
    event_id: u64,
}

impl<'a> WireEntry<'a> {
    pub(crate) fn new(entry: &'a RegistrationEntry, token: &'a str) -> Self {
        Self {
            first_name: &entry.first_name,
            last_name: &entry.last_name,
            email: &entry.email,
            occupation: entry.occupation.upstream_value(),
            email_consent: if entry.newsletter_opt_in { "yes" } else { "no" },
            data_processing_consent: DATA_PROCESSING_CONSENT,
            token,
            action: ACTION_INSERT,
            event_id: EVENT_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupation_parses_known_values_and_falls_back() {
        assert_eq!(Occupation::from_form_value("school"), Occupation::School);
        assert_eq!(
            Occupation::from_form_value("university"),
            Occupation::University
        );
        assert_eq!(Occupation::from_form_value("parent"), Occupation::Parent);
        assert_eq!(Occupation::from_form_value("other"), Occupation::Other);
        assert_eq!(Occupation::from_form_value("wizard"), Occupation::Other);
        assert_eq!(Occupation::from_form_value(""), Occupation::Other);
    }

    #[test]
    fn occupation_maps_to_upstream_strings() {
        assert_eq!(Occupation::School.upstream_value(), "Schüler:in");
        assert_eq!(Occupation::University.upstream_value(), "Student:in");
        assert_eq!(Occupation::Parent.upstream_value(), "Elternteil");
        assert_eq!(Occupation::Other.upstream_value(), "sonstiges");
    }

    #[test]
    fn split_name_takes_the_last_token_as_last_name() {
        assert_eq!(
            split_name("Ada Lovelace"),
            ("Ada".to_string(), "Lovelace".to_string())
        );
        assert_eq!(
            split_name("Juan Pablo Fernández de la Vega"),
            ("Juan Pablo Fernández de la".to_string(), "Vega".to_string())
        );
    }

    #[test]
    fn single_token_names_become_the_last_name() {
        assert_eq!(split_name("Madonna"), (String::new(), "Madonna".to_string()));
    }

    #[test]
    fn split_name_ignores_surrounding_whitespace() {
        assert_eq!(
            split_name("  Ada   Lovelace  "),
            ("Ada".to_string(), "Lovelace".to_string())
        );
    }

    #[test]
    fn wire_entry_uses_the_upstream_field_names() {
        let entry = RegistrationEntry::from_claim(
            "Testy McTestface",
            "testy@example.com",
            Occupation::School,
            true,
        );
        let wire = WireEntry::new(&entry, "a1b2c3");
        let encoded = serde_urlencoded::to_string(&wire).unwrap();

        for expected in [
            "persons%5B0%5D%5Bfirst_name%5D=Testy",
            "persons%5B0%5D%5Blast_name%5D=McTestface",
            "contactdetails_5%5B0%5D%5Bidentification%5D=testy%40example.com",
            "zz_id=a1b2c3",
            "zz_action=insert",
            "events_contacts%5B0%5D%5Bevent_id%5D=4062",
        ] {
            assert!(encoded.contains(expected), "missing {expected} in {encoded}");
        }
    }

    #[test]
    fn newsletter_opt_in_maps_to_yes_no() {
        let entry = RegistrationEntry::from_claim("A B", "a@b.c", Occupation::Other, false);
        let wire = WireEntry::new(&entry, "t0ken");
        let encoded = serde_urlencoded::to_string(&wire).unwrap();
        assert!(encoded.contains("registrationvarchars_105%5B0%5D%5Bregistrationvarchar%5D=no"));

        let entry = RegistrationEntry::from_claim("A B", "a@b.c", Occupation::Other, true);
        let wire = WireEntry::new(&entry, "t0ken");
        let encoded = serde_urlencoded::to_string(&wire).unwrap();
        assert!(encoded.contains("registrationvarchars_105%5B0%5D%5Bregistrationvarchar%5D=yes"));
    }
}
