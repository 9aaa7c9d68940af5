use std::{iter::from_fn, vec::IntoIter};

use super::{Len, Op};

/// Iterator over [`Ops`](Op) with a utility function to zip two iters together
/// and apply a map function that supports partial consumption of either
/// component, as used by [`Compose`](crate::Compose) and
/// [`Transform`](crate::Transform).
pub struct Iter {
    iter: IntoIter<Op>,
    partial: Option<Op>,
}

impl Iter {
    pub(crate) fn new(iter: IntoIter<Op>) -> Iter {
        Iter {
            iter,
            partial: Default::default(),
        }
    }

    /// Returns a mutable reference to the next component. The caller of this
    /// function may use the mutable reference to partially consume the next
    /// component (instead of fully); the remainder is served again on the
    /// next call. Components that have been consumed down to zero length are
    /// skipped, so a head is always effectful.
    pub fn next_mut(&mut self) -> Option<&mut Op> {
        loop {
            if matches!(&self.partial, Some(partial) if partial.len() > 0) {
                return self.partial.as_mut();
            }

            match self.iter.next() {
                Some(op) => self.partial = Some(op),
                None => return None,
            }
        }
    }

    /// Utility function that zips two iters and applies the given map function
    /// to each pair of components. This function may choose to only partially
    /// consume a component. The remainder of that component will be fed to the
    /// next invocation. This will continue until either iterator is exhausted.
    /// Note that this means that the iterators are not necessarily both
    /// exhausted when this function returns.
    pub fn zip_mut<'a, F, U>(&'a mut self, other: &'a mut Iter, map_fn: F) -> impl Iterator<Item = U> + 'a
    where
        F: for<'b> Fn(&'b mut Op, &'b mut Op) -> U + 'a,
    {
        from_fn(move || match (self.next_mut(), other.next_mut()) {
            (Some(self_op), Some(other_op)) => Some(map_fn(self_op, other_op)),
            _ => None,
        })
    }
}

impl Iterator for Iter {
    type Item = Op;

    fn next(&mut self) -> Option<Self::Item> {
        match self.partial.take() {
            Some(partial) if partial.len() > 0 => Some(partial),
            Some(_) | None => self.iter.next(),
        }
    }
}
