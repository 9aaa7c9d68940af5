#![no_main]

use libfuzzer_sys::fuzz_target;
use weft::{Compose, Delta};

fuzz_target!(|data: (String, Delta, Delta)| {
    let (doc, first, second) = data;

    let first = first.into_iter().collect::<Delta>();
    let second = second.into_iter().collect::<Delta>();

    let Ok(middle) = first.apply(&doc) else {
        return;
    };
    let Ok(expected) = second.apply(&middle) else {
        return;
    };

    assert_eq!(first.compose(second).apply(&doc).unwrap(), expected);
});
