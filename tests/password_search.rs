//! Recovering a password from a fixed candidate list by comparing SHA-1
//! digests against a target digest.

use hash_core::crypto::sha1::{sha1, Sha1Digest};
use std::cell::Cell;

const CANDIDATES: [&str; 20] = [
    "123456",
    "password",
    "123456789",
    "12345678",
    "qwerty",
    "12345",
    "123123",
    "111111",
    "abc123",
    "password1",
    "admin",
    "qwerty123",
    "letmein",
    "welcome",
    "monkey",
    "1234",
    "sunshine",
    "iloveyou",
    "dragon",
    "football",
];

fn first_match<'a>(
    target: Sha1Digest,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates.into_iter().find(|word| sha1(word) == target)
}

#[test]
fn test_search_finds_password() {
    let target = sha1("qwerty123");
    assert_eq!(first_match(target, CANDIDATES), Some("qwerty123"));
}

#[test]
fn test_search_halts_on_first_match() {
    let target = sha1("qwerty123");
    let tried = Cell::new(0);

    let found = first_match(
        target,
        CANDIDATES.iter().copied().inspect(|_| tried.set(tried.get() + 1)),
    );

    assert_eq!(found, Some("qwerty123"));
    assert_eq!(tried.get(), 12, "the search must stop at the first match");
}

#[test]
fn test_search_exhausts_without_match() {
    let target = sha1("hunter2");
    let tried = Cell::new(0);

    let found = first_match(
        target,
        CANDIDATES.iter().copied().inspect(|_| tried.set(tried.get() + 1)),
    );

    assert_eq!(found, None);
    assert_eq!(tried.get(), CANDIDATES.len(), "a failed search must try every candidate");
}
