use std::cmp::{min, Ordering};

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use super::ops::{Delete, Insert, Retain};

/// Implemented by types that have a length in code points.
pub trait Len {
    /// Should return the exact length of the receiver.
    fn len(&self) -> usize;
}

/// Implemented by types that can split their value in two at any given index.
pub trait Split {
    /// Removes and returns the first `len` items from this component.
    fn split(&mut self, len: usize) -> Self;
}

pub fn split<T, U>(lhs: &mut T, rhs: &mut U) -> (T, U)
where
    T: Len + Split,
    U: Len + Split,
{
    let len = min(lhs.len(), rhs.len());

    (lhs.split(len), rhs.split(len))
}

/// Individual retain, insert or delete component.
///
/// On the wire, the three kinds are distinguished by shape: a bare integer
/// retains, a bare string inserts, and `{"d": n}` deletes.
#[derive(Arbitrary, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Op {
    /// Represents a retain component. [Click here](Retain) to read more about
    /// retain components.
    Retain(Retain),

    /// Represents an insert component. [Click here](Insert) to read more about
    /// insert components.
    Insert(Insert),

    /// Represents a delete component. [Click here](Delete) to read more about
    /// delete components.
    Delete(Delete),
}

/// Discriminant of an [`Op`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A retain component.
    Retain,

    /// An insert component.
    Insert,

    /// A delete component.
    Delete,
}

impl Op {
    /// Returns this component's kind.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Retain(_) => Kind::Retain,
            Self::Insert(_) => Kind::Insert,
            Self::Delete(_) => Kind::Delete,
        }
    }

    /// Returns true iff this component has zero length and therefore no
    /// effect on any document.
    pub fn is_noop(&self) -> bool {
        self.len() == 0
    }

    /// Compares two components by length alone, regardless of kind.
    pub fn cmp_len(&self, other: &Op) -> Ordering {
        self.len().cmp(&other.len())
    }

    /// Folds `other` into this component if both share a kind: retains and
    /// deletes sum their lengths, inserts concatenate their text. Returns
    /// whatever could not be merged.
    ///
    /// Summing two lengths can overflow `usize`. In that case this component
    /// saturates at `usize::MAX` and the remainder is handed back as a carry
    /// component of the same kind.
    pub fn merge(&mut self, other: Op) -> Option<Op> {
        match (self, other) {
            (Op::Retain(lhs), Op::Retain(rhs)) => match lhs.retain.overflowing_add(rhs.retain) {
                (retain, false) => {
                    lhs.retain = retain;
                    None
                }
                (retain, true) => {
                    lhs.retain = usize::MAX;
                    Some(Op::Retain(Retain { retain: retain + 1 }))
                }
            },
            (Op::Insert(lhs), Op::Insert(rhs)) => {
                lhs.insert.push_str(&rhs.insert);
                None
            }
            (Op::Delete(lhs), Op::Delete(rhs)) => match lhs.delete.overflowing_add(rhs.delete) {
                (delete, false) => {
                    lhs.delete = delete;
                    None
                }
                (delete, true) => {
                    lhs.delete = usize::MAX;
                    Some(Op::Delete(Delete { delete: delete + 1 }))
                }
            },
            (_, other) => Some(other),
        }
    }
}

impl Len for Op {
    fn len(&self) -> usize {
        match self {
            Self::Retain(retain) => retain.len(),
            Self::Insert(insert) => insert.len(),
            Self::Delete(delete) => delete.len(),
        }
    }
}

impl From<Retain> for Op {
    fn from(value: Retain) -> Self {
        Self::Retain(value)
    }
}

impl From<Insert> for Op {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Delete> for Op {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl Split for Op {
    fn split(&mut self, len: usize) -> Op {
        let len = min(self.len(), len);

        match self {
            Self::Retain(retain) => retain.split(len).into(),
            Self::Insert(insert) => insert.split(len).into(),
            Self::Delete(delete) => delete.split(len).into(),
        }
    }
}
