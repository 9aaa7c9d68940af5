//! JSON-Lines fixture harness. Each fixture file holds one case per line;
//! expected operations are compared after canonicalization, which decoding
//! performs.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use weft::{Compose, Delta, Side, Transform};

#[derive(Deserialize)]
struct ApplyCase {
    #[serde(rename = "str")]
    doc: String,
    op: Delta,
    result: String,
}

#[derive(Deserialize)]
struct ComposeCase {
    op1: Delta,
    op2: Delta,
    result: Delta,
}

#[derive(Deserialize)]
struct TransformCase {
    op: Delta,
    #[serde(rename = "otherOp")]
    other_op: Delta,
    side: Side,
    result: Delta,
}

fn cases<T>(raw: &str) -> impl Iterator<Item = (usize, T)> + '_
where
    T: DeserializeOwned,
{
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            (
                index + 1,
                serde_json::from_str(line).expect("malformed fixture line"),
            )
        })
}

#[test]
fn apply_fixtures() {
    for (line, case) in cases::<ApplyCase>(include_str!("fixtures/apply.jsonl")) {
        assert_eq!(
            case.op.apply(&case.doc).as_deref(),
            Ok(case.result.as_str()),
            "apply fixture on line {line}",
        );
    }
}

#[test]
fn compose_fixtures() {
    for (line, case) in cases::<ComposeCase>(include_str!("fixtures/compose.jsonl")) {
        assert_eq!(
            case.op1.compose(case.op2),
            case.result,
            "compose fixture on line {line}",
        );
    }
}

#[test]
fn transform_fixtures() {
    for (line, case) in cases::<TransformCase>(include_str!("fixtures/transform.jsonl")) {
        assert_eq!(
            case.op.transform(case.other_op, case.side),
            case.result,
            "transform fixture on line {line}",
        );
    }
}
