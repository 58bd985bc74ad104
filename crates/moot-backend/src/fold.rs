//! Reply folding: convert a raw backend reply into transcript turns plus a
//! gate update.
//!
//! The reply is a loosely-typed object with optionally-present named
//! sections. Folding order is fixed — it governs transcript order.

use serde_json::Value;

use moot_core::{Role, Turn};

use crate::config::FieldMap;

/// What one fold produced: turns to append (in order), whether the report
/// gate should open, and the side-channel report source.
#[derive(Debug)]
pub struct FoldOutcome {
    pub turns: Vec<Turn>,
    pub gate_update: bool,
    pub report_source: Option<Value>,
}

/// Placeholder content when the backend sent nothing renderable. A turn is
/// always appended for a well-formed reply — never one with undefined content.
pub const NO_RESPONSE: &str = "[No response]";

/// Fold a raw reply. Pure; transport failures never reach this point.
pub fn fold(raw: &Value, fields: &FieldMap, reply_role: &Role) -> FoldOutcome {
    let mut turns = Vec::new();

    let technical = non_empty_str(raw, &fields.technical_analysis);
    let business = non_empty_str(raw, &fields.business_analysis);

    if let Some(text) = technical {
        // Emphasis markers stay as-is for later rendering.
        turns.push(Turn::new(Role::TechnicalAnalyst, text));
    }
    if let Some(text) = business {
        turns.push(Turn::new(Role::BusinessAnalyst, text));
    }

    if turns.is_empty() {
        let reply = non_empty_str(raw, &fields.reply).unwrap_or(NO_RESPONSE);
        turns.push(Turn::new(reply_role.clone(), reply));
    }

    let report_source = extract_report_source(raw, &fields.final_report);

    let flagged = raw
        .get(&fields.can_generate_report)
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let gate_update =
        technical.is_some() || business.is_some() || flagged || report_source.is_some();

    if gate_update {
        tracing::debug!(turns = turns.len(), "fold opened the report gate");
    }

    FoldOutcome {
        turns,
        gate_update,
        report_source,
    }
}

/// A string field with visible content, or `None`.
fn non_empty_str<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// The report source may be textual or structured; empty strings and nulls
/// count as absent.
fn extract_report_source(raw: &Value, key: &str) -> Option<Value> {
    match raw.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(other) => Some(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> (FieldMap, Role) {
        (FieldMap::default(), Role::Other("model".to_string()))
    }

    #[test]
    fn technical_section_becomes_one_analyst_turn() {
        let (fields, reply_role) = defaults();
        let raw = serde_json::json!({"technical_analysis": "A **B**"});
        let outcome = fold(&raw, &fields, &reply_role);

        assert_eq!(outcome.turns.len(), 1);
        assert_eq!(outcome.turns[0].role, Role::TechnicalAnalyst);
        assert_eq!(outcome.turns[0].content, "A **B**");
        assert!(outcome.gate_update);
        assert!(outcome.report_source.is_none());
    }

    #[test]
    fn both_sections_fold_technical_first() {
        let (fields, reply_role) = defaults();
        let raw = serde_json::json!({
            "business_analysis": "strong demand",
            "technical_analysis": "feasible",
        });
        let outcome = fold(&raw, &fields, &reply_role);

        let roles: Vec<&Role> = outcome.turns.iter().map(|t| &t.role).collect();
        assert_eq!(roles, [&Role::TechnicalAnalyst, &Role::BusinessAnalyst]);
        assert!(outcome.gate_update);
    }

    #[test]
    fn empty_reply_folds_to_placeholder() {
        let (fields, reply_role) = defaults();
        let outcome = fold(&serde_json::json!({}), &fields, &reply_role);

        assert_eq!(outcome.turns.len(), 1);
        assert_eq!(outcome.turns[0].role, reply_role);
        assert_eq!(outcome.turns[0].content, NO_RESPONSE);
        assert!(!outcome.gate_update);
    }

    #[test]
    fn generic_reply_uses_configured_role() {
        let fields = FieldMap::default();
        let raw = serde_json::json!({"reply": "could you narrow that down?"});
        let outcome = fold(&raw, &fields, &Role::System);

        assert_eq!(outcome.turns.len(), 1);
        assert_eq!(outcome.turns[0].role, Role::System);
        assert_eq!(outcome.turns[0].content, "could you narrow that down?");
        assert!(!outcome.gate_update);
    }

    #[test]
    fn reply_is_ignored_when_analysis_is_present() {
        let (fields, reply_role) = defaults();
        let raw = serde_json::json!({
            "technical_analysis": "use federated learning",
            "reply": "should not appear",
        });
        let outcome = fold(&raw, &fields, &reply_role);

        assert_eq!(outcome.turns.len(), 1);
        assert_eq!(outcome.turns[0].role, Role::TechnicalAnalyst);
    }

    #[test]
    fn final_report_is_side_channel_not_a_turn() {
        let (fields, reply_role) = defaults();
        let raw = serde_json::json!({
            "reply": "here you go",
            "final_report": "# Summary\nall good",
        });
        let outcome = fold(&raw, &fields, &reply_role);

        assert_eq!(outcome.turns.len(), 1);
        assert_eq!(outcome.turns[0].content, "here you go");
        assert_eq!(
            outcome.report_source,
            Some(Value::String("# Summary\nall good".to_string()))
        );
        assert!(outcome.gate_update);
    }

    #[test]
    fn structured_final_report_is_kept_as_is() {
        let (fields, reply_role) = defaults();
        let raw = serde_json::json!({"final_report": {"sections": ["a", "b"]}});
        let outcome = fold(&raw, &fields, &reply_role);

        assert_eq!(
            outcome.report_source,
            Some(serde_json::json!({"sections": ["a", "b"]}))
        );
        assert!(outcome.gate_update);
    }

    #[test]
    fn explicit_flag_opens_gate_without_sections() {
        let (fields, reply_role) = defaults();
        let raw = serde_json::json!({"reply": "almost there", "can_generate_report": true});
        let outcome = fold(&raw, &fields, &reply_role);

        assert!(outcome.gate_update);
        assert_eq!(outcome.turns.len(), 1);
    }

    #[test]
    fn blank_sections_count_as_absent() {
        let (fields, reply_role) = defaults();
        let raw = serde_json::json!({
            "technical_analysis": "   ",
            "final_report": "",
            "can_generate_report": false,
        });
        let outcome = fold(&raw, &fields, &reply_role);

        assert_eq!(outcome.turns[0].content, NO_RESPONSE);
        assert!(!outcome.gate_update);
        assert!(outcome.report_source.is_none());
    }

    #[test]
    fn renamed_fields_are_honored() {
        let fields = FieldMap {
            reply: "answer".to_string(),
            technical_analysis: "tech".to_string(),
            ..Default::default()
        };
        let raw = serde_json::json!({"tech": "looks solid", "answer": "ignored"});
        let outcome = fold(&raw, &fields, &Role::System);

        assert_eq!(outcome.turns[0].role, Role::TechnicalAnalyst);
        assert_eq!(outcome.turns[0].content, "looks solid");
    }
}
