//! Types that represent the retain, insert and delete components within weft.

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use super::{Len, Split};

/// Advances the cursor over a run of code points, leaving them in place.
///
/// On the wire, a retain is a bare non-negative integer.
#[derive(Arbitrary, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Retain {
    /// Number of code points to retain.
    pub retain: usize,
}

impl Len for Retain {
    fn len(&self) -> usize {
        self.retain
    }
}

impl Split for Retain {
    fn split(&mut self, len: usize) -> Self {
        self.retain -= len;

        Retain { retain: len }
    }
}

/// Inserts a string at the current cursor position.
///
/// On the wire, an insert is a bare string. Its length is counted in code
/// points, never bytes, so multi-byte text aligns the same way everywhere.
#[derive(Arbitrary, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Insert {
    /// The text this component inserts.
    pub insert: String,
}

impl Insert {
    /// Returns a retain spanning exactly this insert's text.
    pub fn as_retain(&self) -> Retain {
        Retain { retain: self.len() }
    }
}

impl Len for Insert {
    fn len(&self) -> usize {
        self.insert.chars().count()
    }
}

impl Split for Insert {
    fn split(&mut self, len: usize) -> Self {
        let prefix = self.insert.chars().take(len).collect();
        self.insert = self.insert.chars().skip(len).collect();

        Insert { insert: prefix }
    }
}

/// Removes the next run of code points at the current cursor position.
///
/// On the wire, a delete is an object with a single `d` field: `{"d": n}`.
#[derive(Arbitrary, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Delete {
    /// Number of code points to delete.
    #[serde(rename = "d")]
    pub delete: usize,
}

impl Len for Delete {
    fn len(&self) -> usize {
        self.delete
    }
}

impl Split for Delete {
    fn split(&mut self, len: usize) -> Self {
        self.delete -= len;

        Delete { delete: len }
    }
}
