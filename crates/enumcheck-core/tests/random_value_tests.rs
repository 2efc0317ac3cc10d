#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{Empty, Shade, Single, T1};
use enumcheck_core::errors::ExError;
use enumcheck_core::{
    random_value, random_value_with, EnumCheckError, EnumType, ExErrorKind, SharedRandom,
    ThreadRandom,
};
use std::collections::HashMap;
use std::sync::Arc;

const TRIALS: usize = 60_000;

#[test]
fn test_always_returns_a_declared_value() {
    let declared = T1::values();
    for _ in 0..1_000 {
        let value = random_value::<T1>().unwrap();
        assert!(declared.contains(&value));
    }
}

#[test]
fn test_single_member_always_selected() {
    for _ in 0..100 {
        assert_eq!(random_value::<Single>().unwrap(), Single::Only);
    }
}

#[test]
fn test_empty_enum_is_empty_domain() {
    let err = random_value::<Empty>().unwrap_err();
    assert_eq!(
        err,
        EnumCheckError::EmptyDomain {
            enum_type: "Namespace.Empty".to_string()
        }
    );

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::EmptyDomain);
    assert_eq!(ex.code(), "ERR_EMPTY_DOMAIN");
    assert_eq!(ex.enum_type(), Some("Namespace.Empty"));
}

#[test]
fn test_empty_enum_fails_with_every_source() {
    let seeded = SharedRandom::seeded(11);
    assert!(matches!(
        random_value_with::<Empty, _>(&seeded),
        Err(EnumCheckError::EmptyDomain { .. })
    ));
    assert!(matches!(
        random_value_with::<Empty, _>(&ThreadRandom),
        Err(EnumCheckError::EmptyDomain { .. })
    ));
}

#[test]
fn test_selection_is_uniform_by_value() {
    let source = SharedRandom::seeded(0x5eed);
    let mut counts: HashMap<T1, usize> = HashMap::new();
    for _ in 0..TRIALS {
        *counts
            .entry(random_value_with::<T1, _>(&source).unwrap())
            .or_default() += 1;
    }

    let expected = TRIALS / 3;
    for value in T1::values() {
        let seen = counts.get(&value).copied().unwrap_or(0);
        assert!(
            seen.abs_diff(expected) < expected / 20,
            "{:?} selected {} times, expected about {}",
            value,
            seen,
            expected
        );
    }
}

#[test]
fn test_aliases_are_independent_candidates() {
    // Shade declares Red twice (Red, Crimson) and Blue once
    let source = SharedRandom::seeded(77);
    let reds = (0..TRIALS)
        .filter(|_| random_value_with::<Shade, _>(&source).unwrap() == Shade::Red)
        .count();

    let expected = TRIALS * 2 / 3;
    assert!(
        reds.abs_diff(expected) < TRIALS / 40,
        "Red selected {} times, expected about {}",
        reds,
        expected
    );
}

#[test]
fn test_seeded_sources_reproduce_selections() {
    let a = SharedRandom::seeded(2024);
    let b = SharedRandom::seeded(2024);
    let seq_a: Vec<T1> = (0..64)
        .map(|_| random_value_with::<T1, _>(&a).unwrap())
        .collect();
    let seq_b: Vec<T1> = (0..64)
        .map(|_| random_value_with::<T1, _>(&b).unwrap())
        .collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_global_source_serves_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..500).all(|_| {
                    let value = random_value_with::<T1, _>(SharedRandom::global()).unwrap();
                    T1::values().contains(&value)
                })
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_thread_sources_serve_concurrent_callers() {
    let shared = Arc::new(SharedRandom::seeded(1));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                (0..500).all(|_| {
                    let value = if i % 2 == 0 {
                        random_value::<T1>().unwrap()
                    } else {
                        random_value_with::<T1, _>(shared.as_ref()).unwrap()
                    };
                    T1::values().contains(&value)
                })
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
