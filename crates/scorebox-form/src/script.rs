//! Browser projection of the binding configuration.
//!
//! The claim page runs the same synchronization rule client-side so the
//! `required` attributes react as the player clicks. Rather than keeping a
//! hand-written script in step with the server's configuration, the script
//! is rendered from the [`RequirementBindings`] value itself.

use std::fmt::Write;

use crate::bindings::RequirementBindings;

/// Render the client-side script for a binding configuration.
///
/// The script waits for `DOMContentLoaded` (the fields must exist before
/// they can be looked up), attaches one change listener per trigger, and
/// performs an initial synchronization so the page honors the rule from
/// that moment on. Lookups are guarded: a missing identifier is logged to
/// the console and skipped, never aborting the remaining bindings.
pub fn client_script(bindings: &RequirementBindings) -> String {
    let mut table = String::new();
    for binding in bindings.bindings() {
        let targets = binding
            .targets
            .iter()
            .map(|t| js_string(t))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            table,
            "  [{}, [{}]],",
            js_string(&binding.trigger),
            targets
        );
    }

    format!(
        r#"const bindings = [
{table}];

document.addEventListener("DOMContentLoaded", () => {{
  for (const [trigger, targets] of bindings) {{
    const box = document.getElementById(trigger);
    if (!box) {{
      console.warn("missing trigger field: " + trigger);
      continue;
    }}
    const sync = () => {{
      for (const id of targets) {{
        const field = document.getElementById(id);
        if (!field) {{
          console.warn("missing target field: " + id);
          continue;
        }}
        field.required = box.checked;
      }}
    }};
    box.addEventListener("change", sync);
    sync();
  }}
}});
"#
    )
}

/// Quote a string as a JavaScript double-quoted literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::Binding;

    #[test]
    fn claim_form_script_lists_all_contract_identifiers() {
        let script = client_script(&RequirementBindings::claim_form());
        for id in [
            "wants-leaderboard",
            "wants-hpi",
            "nickname",
            "email-hpi",
            "name-hpi",
        ] {
            assert!(script.contains(&format!("\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn script_waits_for_structural_ready_and_guards_lookups() {
        let script = client_script(&RequirementBindings::claim_form());
        assert!(script.contains("DOMContentLoaded"));
        assert!(script.contains("addEventListener(\"change\""));
        assert!(script.contains("if (!box)"));
        assert!(script.contains("if (!field)"));
        // Initial synchronization call after registration.
        assert!(script.contains("sync();"));
    }

    #[test]
    fn identifiers_are_escaped_for_embedding() {
        let bindings =
            RequirementBindings::new(vec![Binding::new(r#"we"ird</script>"#, &["a\\b"])]);
        let script = client_script(&bindings);
        assert!(script.contains(r#""we\"ird\u003c/script>""#));
        assert!(script.contains(r#""a\\b""#));
        // A literal close tag would end an inline script element early.
        assert!(!script.contains("</script>"));
    }

    #[test]
    fn braces_are_balanced() {
        let script = client_script(&RequirementBindings::claim_form());
        let opens = script.matches('{').count();
        let closes = script.matches('}').count();
        assert_eq!(opens, closes);
    }
}
