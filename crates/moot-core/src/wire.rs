//! Outbound request encoding.
//!
//! Two element shapes exist across deployed backends: a compact
//! `"role:content"` string and a tagged `{role, content}` object. The
//! encoder is configurable over the shape; the decoder accepts either.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Role, Turn};

/// Element shape for the `messages` array of the outbound body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireShape {
    /// `"role:content"` strings.
    #[default]
    Compact,
    /// `{"role": ..., "content": ...}` objects.
    Tagged,
}

/// Encode a transcript snapshot as the outbound request body:
/// `{"messages": [...]}` with elements in snapshot order.
pub fn encode_turns(turns: &[Turn], shape: WireShape) -> Value {
    let messages: Vec<Value> = turns.iter().map(|t| encode_turn(t, shape)).collect();
    serde_json::json!({ "messages": messages })
}

fn encode_turn(turn: &Turn, shape: WireShape) -> Value {
    match shape {
        WireShape::Compact => Value::String(format!("{}:{}", turn.role.as_str(), turn.content)),
        WireShape::Tagged => serde_json::json!({
            "role": turn.role.as_str(),
            "content": turn.content,
        }),
    }
}

/// Decode a single message element in either shape.
///
/// Compact strings split on the first `:`; tagged objects read `role` and
/// `content` string fields. Anything else is rejected.
pub fn decode_turn(value: &Value) -> Option<Turn> {
    match value {
        Value::String(s) => {
            let (role, content) = s.split_once(':')?;
            if role.is_empty() {
                return None;
            }
            Some(Turn::new(Role::parse(role), content))
        }
        Value::Object(map) => {
            let role = map.get("role")?.as_str()?;
            if role.is_empty() {
                return None;
            }
            let content = map.get("content")?.as_str()?;
            Some(Turn::new(Role::parse(role), content))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_shape_joins_role_and_content() {
        let turns = vec![
            Turn::new(Role::User, "hello"),
            Turn::new(Role::Other("model".to_string()), "hi there"),
        ];
        let body = encode_turns(&turns, WireShape::Compact);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages[0], "user:hello");
        assert_eq!(messages[1], "model:hi there");
    }

    #[test]
    fn tagged_shape_emits_role_content_pairs() {
        let turns = vec![Turn::new(Role::TechnicalAnalyst, "feasible")];
        let body = encode_turns(&turns, WireShape::Tagged);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages[0]["role"], "technical_analyst");
        assert_eq!(messages[0]["content"], "feasible");
    }

    #[test]
    fn decode_accepts_both_shapes() {
        let compact = Value::String("user:what about privacy?".to_string());
        let tagged = serde_json::json!({"role": "system", "content": "noted"});

        assert_eq!(
            decode_turn(&compact),
            Some(Turn::new(Role::User, "what about privacy?"))
        );
        assert_eq!(decode_turn(&tagged), Some(Turn::new(Role::System, "noted")));
    }

    #[test]
    fn decode_keeps_colons_inside_content() {
        let value = Value::String("user:ratio is 3:1".to_string());
        let turn = decode_turn(&value).unwrap();
        assert_eq!(turn.content, "ratio is 3:1");
    }

    #[test]
    fn decode_rejects_empty_role_and_foreign_shapes() {
        assert!(decode_turn(&Value::String(":dangling".to_string())).is_none());
        assert!(decode_turn(&Value::String("no separator".to_string())).is_none());
        assert!(decode_turn(&serde_json::json!(42)).is_none());
        assert!(decode_turn(&serde_json::json!({"role": "", "content": "x"})).is_none());
    }

    #[test]
    fn encode_then_decode_preserves_order() {
        let turns = vec![
            Turn::new(Role::User, "a"),
            Turn::new(Role::System, "b"),
            Turn::new(Role::User, "c"),
        ];
        for shape in [WireShape::Compact, WireShape::Tagged] {
            let body = encode_turns(&turns, shape);
            let decoded: Vec<Turn> = body["messages"]
                .as_array()
                .unwrap()
                .iter()
                .filter_map(decode_turn)
                .collect();
            assert_eq!(decoded, turns);
        }
    }
}
