#![warn(missing_docs)]
//! Plain-text mechanics for operational transformation in Rust,
//! wire-compatible with the `ot-text` JSON shape used by widely deployed
//! collaborative editors and fully fuzzed.
//!
//! Operational Transformation (OT) enables real-time collaborative editing by
//! enabling two (or more) users to make changes at the same time. An
//! OT-capable central server transforms and broadcasts these changes so
//! everyone is looking at the same synchronized state, even in the presence
//! of severe latency.
//!
//! This library can be integrated to build both a client-side and/or
//! server-side implementation of operational transformation within your
//! application.
//!
//! # Usage
//!
//! ```
//! use weft::{Delta, Side, Transform};
//!
//! let base = "Hello World";
//!
//! let alice = Delta::new().retain(5).insert(",");
//! let bob = Delta::new().retain(11).insert("!");
//!
//! let alice_first = alice.apply(base)?;
//! let bob_first = bob.apply(base)?;
//!
//! let alice_rebased = alice.clone().transform(bob.clone(), Side::Left);
//! let bob_rebased = bob.transform(alice, Side::Right);
//!
//! assert_eq!(
//!     bob_rebased.apply(&alice_first)?,
//!     alice_rebased.apply(&bob_first)?,
//! );
//! # Ok::<_, weft::ApplyError>(())
//! ```
//!
//! # Wire format
//!
//! A delta serializes as a JSON list whose elements are a bare non-negative
//! integer (retain), a bare string (insert) or `{"d": n}` (delete). Input
//! lists may contain zero-length components and adjacent same-kind runs;
//! decoding canonicalizes them away. All lengths count Unicode code points,
//! never bytes.

mod apply;
mod compose;
mod delta;
mod iter;
mod op;
mod ops;
mod transform;

pub use apply::ApplyError;
pub use compose::Compose;
pub use delta::Delta;
pub use iter::Iter;
pub use op::{Kind, Len, Op, Split};
pub use ops::{Delete, Insert, Retain};
pub use transform::{Side, Transform};

#[cfg(test)]
mod tests {
    use super::{Compose, Delta, Side, Transform};

    #[test]
    fn test_end_to_end() {
        let before = Delta::new().insert("Hello World");

        let alice = Delta::new().retain(5).insert(",");
        let bob = Delta::new().retain(11).insert("!");

        assert_eq!(
            before
                .clone()
                .compose(alice.clone())
                .compose(bob.clone().transform(alice.clone(), Side::Right)),
            before
                .clone()
                .compose(bob.clone())
                .compose(alice.transform(bob, Side::Left)),
        )
    }

    #[test]
    fn test_end_to_end_insert_retain_1() {
        let before = Delta::new().insert("0123456");

        let alice = Delta::new().retain(1000).insert("6");
        let bob = Delta::new().insert("ABCD");

        assert_eq!(
            before
                .clone()
                .compose(alice.clone())
                .compose(bob.clone().transform(alice.clone(), Side::Right)),
            before
                .clone()
                .compose(bob.clone())
                .compose(alice.transform(bob, Side::Left)),
        )
    }

    #[test]
    fn test_end_to_end_insert_retain_2() {
        let before = Delta::new().retain(5).insert("ABCD");

        let alice = Delta::new().retain(5).insert("ABCD");
        let bob = Delta::new().insert("ABC");

        assert_eq!(
            before
                .clone()
                .compose(alice.clone())
                .compose(bob.clone().transform(alice.clone(), Side::Right)),
            before
                .clone()
                .compose(bob.clone())
                .compose(alice.transform(bob, Side::Left)),
        )
    }

    #[test]
    fn test_end_to_end_concurrent_replacements() {
        let doc = "The quick fox";

        let alice = Delta::new().retain(4).delete(5).insert("slow");
        let bob = Delta::new().retain(10).delete(3).insert("dog");

        let alice_rebased = alice.clone().transform(bob.clone(), Side::Left);
        let bob_rebased = bob.clone().transform(alice.clone(), Side::Right);

        let via_alice = bob_rebased.apply(&alice.apply(doc).unwrap()).unwrap();
        let via_bob = alice_rebased.apply(&bob.apply(doc).unwrap()).unwrap();

        assert_eq!(via_alice, "The slow dog");
        assert_eq!(via_bob, "The slow dog");
    }

    #[test]
    fn test_end_to_end_multi_byte() {
        let doc = "née 🙂";

        let alice = Delta::new().retain(3).insert("ë").delete(2);
        let bob = Delta::new().retain(4).insert("!");

        let alice_rebased = alice.clone().transform(bob.clone(), Side::Left);
        let bob_rebased = bob.clone().transform(alice.clone(), Side::Right);

        assert_eq!(
            bob_rebased.apply(&alice.apply(doc).unwrap()).unwrap(),
            alice_rebased.apply(&bob.apply(doc).unwrap()).unwrap(),
        );
    }
}
