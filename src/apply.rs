use thiserror::Error;

use super::{Delta, Op};

/// Reason a delta could not be applied to a document.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    /// A retain component extended past the end of the document.
    #[error("retain extends past the end of the document")]
    RetainTooLong,

    /// A delete component could not consume its declared number of code
    /// points because the document ended first.
    #[error("delete exceeds the remaining document")]
    DeleteMismatch,
}

/// Splits `doc` after its first `len` code points, or returns `None` if the
/// document is shorter than that.
fn split_at_char(doc: &str, len: usize) -> Option<(&str, &str)> {
    if len == 0 {
        return Some(("", doc));
    }

    doc.char_indices()
        .nth(len - 1)
        .map(|(index, c)| doc.split_at(index + c.len_utf8()))
}

impl Delta {
    /// Applies this delta to a document, returning the edited document.
    ///
    /// The delta's components are executed left to right: retains copy code
    /// points, deletes discard them, inserts append their text without
    /// consuming anything. A delta may cover less than the whole document;
    /// whatever it does not reach is carried over unchanged. The first
    /// component that reaches past the end of the document aborts the
    /// application with an [`ApplyError`].
    pub fn apply(&self, doc: &str) -> Result<String, ApplyError> {
        let mut output = String::with_capacity(doc.len());
        let mut rest = doc;

        for op in self.ops() {
            match op {
                Op::Retain(retain) => {
                    let (retained, remainder) =
                        split_at_char(rest, retain.retain).ok_or(ApplyError::RetainTooLong)?;

                    output.push_str(retained);
                    rest = remainder;
                }
                Op::Insert(insert) => {
                    output.push_str(&insert.insert);
                }
                Op::Delete(delete) => {
                    let (_, remainder) =
                        split_at_char(rest, delete.delete).ok_or(ApplyError::DeleteMismatch)?;

                    rest = remainder;
                }
            }
        }

        output.push_str(rest);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplyError, Delta};

    #[test]
    fn test_apply_retain_insert() {
        let delta = Delta::new().retain(3).insert(" Bar");

        assert_eq!(delta.apply("Foo"), Ok("Foo Bar".to_owned()));
    }

    #[test]
    fn test_apply_delete_too_long() {
        let delta = Delta::new().delete(4);

        assert_eq!(delta.apply("Foo"), Err(ApplyError::DeleteMismatch));
    }

    #[test]
    fn test_apply_retain_too_long() {
        let delta = Delta::new().retain(5);

        assert_eq!(delta.apply("Hi"), Err(ApplyError::RetainTooLong));
    }

    #[test]
    fn test_apply_empty_delta_is_identity() {
        assert_eq!(Delta::new().apply("unchanged"), Ok("unchanged".to_owned()));
    }

    #[test]
    fn test_apply_keeps_unreached_tail() {
        let delta = Delta::new().retain(1).insert("-");

        assert_eq!(delta.apply("abc"), Ok("a-bc".to_owned()));
    }

    #[test]
    fn test_apply_replaces_mid_document() {
        let delta = Delta::new().retain(6).delete(5).insert("there");

        assert_eq!(delta.apply("hello world"), Ok("hello there".to_owned()));
    }

    #[test]
    fn test_apply_counts_code_points_not_bytes() {
        let delta = Delta::new().retain(1).insert("β²").delete(1).retain(2);

        assert_eq!(delta.apply("αβγδ"), Ok("αβ²γδ".to_owned()));
    }

    #[test]
    fn test_apply_insert_into_empty_document() {
        let delta = Delta::new().insert("🙂 ok");

        assert_eq!(delta.apply(""), Ok("🙂 ok".to_owned()));
    }

    #[test]
    fn test_apply_stops_at_first_failure() {
        let delta = Delta::new().insert("x").retain(9).insert("y");

        assert_eq!(delta.apply("short"), Err(ApplyError::RetainTooLong));
    }
}
