use std::mem::take;

use super::op::split;
use super::ops::{Delete, Insert, Retain};
use super::{Delta, Op};

/// Implemented by types that can apply a series of components in sequence.
///
/// The table below summarizes how [`Compose`] pairs up aligned components.
/// The rows represent Alice's components (i.e. the first edit) and the columns
/// represent Bob's components (i.e. the second edit), e.g. bottom left means
/// Alice's delete followed by Bob's insert.
///
/// | ↱      | Insert          | Retain       | Delete        |
/// |:-------|:----------------|:-------------|:--------------|
/// | Insert | Bob's insert    | Alice's text | cancel both   |
/// | Retain | Bob's insert    | retain       | Bob's delete  |
/// | Delete | Bob's insert    | Alice's delete | Alice's delete |
pub trait Compose<Rhs> {
    /// Output type that applying a series of components to this type produces.
    type Output;

    /// Applies the given series of components to the receiver and returns the
    /// result.
    fn compose(self, rhs: Rhs) -> Self::Output;
}

/// Bob is retaining a slice of the text that Alice inserted, so that slice of
/// Alice's insert survives as-is.
impl Compose<&mut Retain> for &mut Insert {
    type Output = Insert;

    fn compose(self, rhs: &mut Retain) -> Self::Output {
        let (lhs, _rhs) = split(self, rhs);

        lhs
    }
}

/// Bob is deleting text that Alice only just inserted. The text never makes
/// it into the composed edit at all.
impl Compose<&mut Delete> for &mut Insert {
    type Output = Delete;

    fn compose(self, rhs: &mut Delete) -> Self::Output {
        let (_, _) = split(self, rhs);

        Default::default()
    }
}

/// Alice and Bob both leave this slice of the document untouched.
impl Compose<&mut Retain> for &mut Retain {
    type Output = Retain;

    fn compose(self, rhs: &mut Retain) -> Self::Output {
        let (lhs, _rhs) = split(self, rhs);

        lhs
    }
}

/// Bob deletes a slice of the original document that Alice had retained.
impl Compose<&mut Delete> for &mut Retain {
    type Output = Delete;

    fn compose(self, rhs: &mut Delete) -> Self::Output {
        let (_lhs, rhs) = split(self, rhs);

        rhs
    }
}

/// Bob's inserts always survive composition verbatim, no matter what Alice
/// did around them: Bob typed them into Alice's output.
impl<U> Compose<&mut Insert> for U {
    type Output = Insert;

    fn compose(self, rhs: &mut Insert) -> Self::Output {
        take(rhs)
    }
}

/// Alice's delete already removed this text before Bob ever saw it, so Bob's
/// component still has the rest of Alice's output ahead of it.
impl Compose<&mut Retain> for &mut Delete {
    type Output = Delete;

    fn compose(self, _rhs: &mut Retain) -> Self::Output {
        take(self)
    }
}

/// Alice's delete already removed this text before Bob ever saw it.
impl Compose<&mut Delete> for &mut Delete {
    type Output = Delete;

    fn compose(self, _rhs: &mut Delete) -> Self::Output {
        take(self)
    }
}

impl Compose<&mut Op> for &mut Op {
    type Output = Op;

    fn compose(self, rhs: &mut Op) -> Self::Output {
        match self {
            Op::Insert(lhs) => match rhs {
                Op::Insert(rhs) => lhs.compose(rhs).into(),
                Op::Retain(rhs) => lhs.compose(rhs).into(),
                Op::Delete(rhs) => lhs.compose(rhs).into(),
            },
            Op::Retain(lhs) => match rhs {
                Op::Insert(rhs) => lhs.compose(rhs).into(),
                Op::Retain(rhs) => lhs.compose(rhs).into(),
                Op::Delete(rhs) => lhs.compose(rhs).into(),
            },
            Op::Delete(lhs) => match rhs {
                Op::Insert(rhs) => lhs.compose(rhs).into(),
                Op::Retain(rhs) => lhs.compose(rhs).into(),
                Op::Delete(rhs) => lhs.compose(rhs).into(),
            },
        }
    }
}

impl Compose<Delta> for Delta {
    type Output = Self;

    /// Folds two sequential deltas into one, so that applying the result to a
    /// document equals applying `self` and then `rhs`.
    ///
    /// Trailing retains are preserved: a retain at the end of `rhs` witnesses
    /// a document tail that the composed delta must still reach over.
    fn compose(self, rhs: Delta) -> Self {
        let mut self_iter = self.into_iter();
        let mut other_iter = rhs.into_iter();

        let mut result = Delta::new();

        result.extend(self_iter.zip_mut(&mut other_iter, |a, b| a.compose(b)));
        result.extend(self_iter.chain(other_iter));

        result
    }
}
