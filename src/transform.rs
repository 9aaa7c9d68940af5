use std::cmp::min;
use std::mem::take;

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use super::op::split;
use super::ops::{Delete, Insert, Retain};
use super::{Delta, Len, Op};

/// Deterministic tie-breaker for two inserts landing on the same position.
///
/// Both sides of a concurrent pair must agree on who goes first, so one
/// client transforms with [`Side::Left`] and its counterpart with
/// [`Side::Right`]. The side matters for nothing but the insert/insert
/// collision.
#[derive(Arbitrary, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The receiver's insert goes first.
    Left,

    /// The concurrent insert goes first.
    Right,
}

impl Side {
    /// The side opposite to this one.
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Implemented by types that can be rewritten against a concurrent edit to
/// make the pair behave commutatively (i.e. order-independent).
///
/// The receiver is Alice's component (the edit being rebased) and `rhs` is
/// Bob's (the concurrent edit that has already been applied). The rows of the
/// table below represent Alice's components and the columns represent Bob's,
/// e.g. bottom left means Alice deleted what Bob was inserting over.
///
/// | ↱      | Insert         | Retain        | Delete        |
/// |:-------|:---------------|:--------------|:--------------|
/// | Insert | side decides   | Alice's insert | Alice's insert |
/// | Retain | hop Bob's text | retain        | gone          |
/// | Delete | hop Bob's text | Alice's delete | gone          |
pub trait Transform<Rhs> {
    /// Output type that rewriting the receiver against another edit produces.
    type Output;

    /// Rewrites the receiver against the given concurrent edit.
    fn transform(self, rhs: Rhs, side: Side) -> Self::Output;
}

/// Alice and Bob are both inserting at the same position, and both want their
/// text to be preserved. On [`Side::Left`], Alice's text goes first and is
/// emitted as-is. On [`Side::Right`], Bob's text goes first, so Alice must
/// retain over it before her own insert gets its turn.
impl Transform<&mut Insert> for &mut Insert {
    type Output = Op;

    fn transform(self, rhs: &mut Insert, side: Side) -> Self::Output {
        match side {
            Side::Left => take(self).into(),
            Side::Right => take(rhs).as_retain().into(),
        }
    }
}

/// Alice is inserting text that Bob is merely retaining past. Her insert
/// survives unchanged; Bob's retain still covers the document behind it.
impl Transform<&mut Retain> for &mut Insert {
    type Output = Insert;

    fn transform(self, _rhs: &mut Retain, _side: Side) -> Self::Output {
        take(self)
    }
}

/// Alice is inserting while Bob is deleting. Bob was unaware of Alice's
/// insert, so it is unlikely he intended to undo it: her text survives, and
/// his delete keeps consuming the document around it.
impl Transform<&mut Delete> for &mut Insert {
    type Output = Insert;

    fn transform(self, _rhs: &mut Delete, _side: Side) -> Self::Output {
        take(self)
    }
}

/// Bob inserted text that Alice has never seen. Alice must retain over all of
/// it before her own components line up with the document again.
impl Transform<&mut Insert> for &mut Retain {
    type Output = Retain;

    fn transform(self, rhs: &mut Insert, _side: Side) -> Self::Output {
        take(rhs).as_retain()
    }
}

/// Alice and Bob are both retaining the same slice.
impl Transform<&mut Retain> for &mut Retain {
    type Output = Retain;

    fn transform(self, rhs: &mut Retain, _side: Side) -> Self::Output {
        let (lhs, _rhs) = split(self, rhs);

        lhs
    }
}

/// Bob deleted the slice Alice wanted to retain. Those positions no longer
/// exist, so nothing of Alice's retain survives.
impl Transform<&mut Delete> for &mut Retain {
    type Output = Delete;

    fn transform(self, rhs: &mut Delete, _side: Side) -> Self::Output {
        let (_, _) = split(self, rhs);

        Default::default()
    }
}

/// Bob inserted text in the middle of a slice Alice is deleting. Her delete
/// must hop over his text first; the delete itself is served again on the
/// next step.
impl Transform<&mut Insert> for &mut Delete {
    type Output = Retain;

    fn transform(self, rhs: &mut Insert, _side: Side) -> Self::Output {
        take(rhs).as_retain()
    }
}

/// Alice is deleting a slice that Bob merely retained. Her delete stands.
impl Transform<&mut Retain> for &mut Delete {
    type Output = Delete;

    fn transform(self, rhs: &mut Retain, _side: Side) -> Self::Output {
        let (lhs, _rhs) = split(self, rhs);

        lhs
    }
}

/// Alice and Bob are deleting the same slice. Bob's delete has already been
/// applied, so Alice's copy of it must not run twice.
impl Transform<&mut Delete> for &mut Delete {
    type Output = Delete;

    fn transform(self, rhs: &mut Delete, _side: Side) -> Self::Output {
        let (_, _) = split(self, rhs);

        Default::default()
    }
}

impl Transform<&mut Op> for &mut Op {
    type Output = Op;

    fn transform(self, rhs: &mut Op, side: Side) -> Self::Output {
        match self {
            Op::Insert(lhs) => match rhs {
                Op::Insert(rhs) => lhs.transform(rhs, side),
                Op::Retain(rhs) => lhs.transform(rhs, side).into(),
                Op::Delete(rhs) => lhs.transform(rhs, side).into(),
            },
            Op::Retain(lhs) => match rhs {
                Op::Insert(rhs) => lhs.transform(rhs, side).into(),
                Op::Retain(rhs) => lhs.transform(rhs, side).into(),
                Op::Delete(rhs) => lhs.transform(rhs, side).into(),
            },
            Op::Delete(lhs) => match rhs {
                Op::Insert(rhs) => lhs.transform(rhs, side).into(),
                Op::Retain(rhs) => lhs.transform(rhs, side).into(),
                Op::Delete(rhs) => lhs.transform(rhs, side).into(),
            },
        }
    }
}

impl Transform<Delta> for Delta {
    type Output = Delta;

    /// Rewrites this delta against a concurrent `rhs` so it applies to the
    /// document `rhs` produced, with the same intent it had against their
    /// common ancestor.
    ///
    /// Once this delta is exhausted the remainder of `rhs` is dropped: there
    /// is no more of Alice's edit left to rewrite, and [`apply`](Delta::apply)
    /// carries an untouched document tail over as-is. Trailing retains are
    /// stripped from the result for the same reason.
    fn transform(self, rhs: Delta, side: Side) -> Self::Output {
        let mut self_iter = self.into_iter();
        let mut other_iter = rhs.into_iter();

        let mut result = Delta::new();

        result.extend(self_iter.zip_mut(&mut other_iter, |a, b| a.transform(b, side)));
        result.extend(self_iter);

        result.chop()
    }
}

/// Rewrites a cursor position against a concurrent edit. Deletes ahead of the
/// cursor pull it backwards, inserts push it forwards; [`Side::Left`] keeps
/// the cursor in place when text is inserted exactly at it.
impl Transform<usize> for &Delta {
    type Output = usize;

    fn transform(self, rhs: usize, side: Side) -> Self::Output {
        let mut index = rhs;
        let mut offset = 0;

        for op in self.ops() {
            if offset > rhs {
                break;
            }

            match op {
                Op::Insert(insert) => {
                    if offset < index || side == Side::Right {
                        index += insert.len()
                    }

                    offset += insert.len()
                }
                Op::Retain(retain) => {
                    offset += retain.len();
                }
                Op::Delete(delete) => {
                    index -= min(delete.len(), index.saturating_sub(offset));
                }
            }
        }

        index
    }
}
