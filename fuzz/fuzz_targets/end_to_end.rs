#![no_main]

use libfuzzer_sys::fuzz_target;
use weft::{Delta, Side, Transform};

fuzz_target!(|data: (String, Delta, Delta, Side)| {
    let (doc, alice, bob, side) = data;

    let alice = alice.into_iter().collect::<Delta>();
    let bob = bob.into_iter().collect::<Delta>();

    let Ok(after_alice) = alice.apply(&doc) else {
        return;
    };
    let Ok(after_bob) = bob.apply(&doc) else {
        return;
    };

    let alice_rebased = alice.clone().transform(bob.clone(), side);
    let bob_rebased = bob.transform(alice, side.other());

    assert_eq!(
        bob_rebased.apply(&after_alice).unwrap(),
        alice_rebased.apply(&after_bob).unwrap(),
    );
});
