#![cfg(test)]
use std::collections::BTreeSet;

use hostprobe_common::config::{LEGACY_SUBMISSION_LIMIT, WorkerCount};
use hostprobe_core::collection::ResultCollection;
use hostprobe_core::dispatch::Dispatcher;
use hostprobe_core::validator::Validator;

use crate::utils::{MockResolver, hosts};

fn workers(n: usize) -> WorkerCount {
    WorkerCount::new(n).unwrap()
}

fn collection(forms: &[&str]) -> ResultCollection {
    forms.iter().copied().collect()
}

#[test]
fn single_host_partial_resolution() {
    let resolver = MockResolver::new(["example.com", "www.example.com", "https://example.com"]);
    let validator = Validator::new(resolver);

    let results = Dispatcher::new(workers(10), None)
        .run(&hosts(&["example.com"]), &validator, None)
        .unwrap();

    assert_eq!(
        results,
        collection(&["example.com", "www.example.com", "https://example.com"])
    );
}

#[test]
fn unresolvable_host_contributes_nothing() {
    let validator = Validator::new(MockResolver::new(Vec::<String>::new()));

    let results = Dispatcher::new(workers(10), None)
        .run(&hosts(&["nope.invalid"]), &validator, None)
        .unwrap();

    assert!(results.is_empty());
}

#[test]
fn worker_count_does_not_change_results() {
    let input = hosts(&[
        "example.com",
        "www.example.org",
        "https://example.net",
        "http://www.example.edu",
        "nope.invalid",
        "10.0.0.1",
    ]);
    let resolvable = [
        "example.com",
        "https://example.com",
        "example.org",
        "www.example.org",
        "example.net",
        "http://example.net",
        "www.example.edu",
        "10.0.0.1",
    ];

    let serial = Dispatcher::new(workers(1), None)
        .run(&input, &Validator::new(MockResolver::new(resolvable)), None)
        .unwrap();
    let parallel = Dispatcher::new(workers(50), None)
        .run(&input, &Validator::new(MockResolver::new(resolvable)), None)
        .unwrap();

    assert_eq!(serial, parallel);
    assert_eq!(
        serial,
        collection(&[
            "example.com",
            "https://example.com",
            "example.org",
            "www.example.org",
            "example.net",
            "www.example.edu",
            "10.0.0.1",
        ])
    );
}

#[test]
fn repeated_runs_are_deterministic() {
    let input = hosts(&["a.test", "b.test", "c.test"]);
    let resolvable = ["a.test", "www.b.test", "https://c.test"];

    let first = Dispatcher::new(workers(3), None)
        .run(&input, &Validator::new(MockResolver::new(resolvable)), None)
        .unwrap();
    for _ in 0..5 {
        let again = Dispatcher::new(workers(3), None)
            .run(&input, &Validator::new(MockResolver::new(resolvable)), None)
            .unwrap();
        assert_eq!(first.to_text(), again.to_text());
    }
}

#[test]
fn duplicate_forms_across_hosts_collapse() {
    let validator = Validator::new(MockResolver::new(["example.com", "www.example.com"]));

    let results = Dispatcher::new(workers(4), None)
        .run(&hosts(&["example.com", "www.example.com"]), &validator, None)
        .unwrap();

    assert_eq!(results, collection(&["example.com", "www.example.com"]));
}

#[test]
fn legacy_limit_only_probes_first_eleven_hosts() {
    let names: Vec<String> = (0..15).map(|i| format!("host{i}.test")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let input = hosts(&name_refs);

    let resolver = MockResolver::new(names.clone());
    let validator = Validator::new(resolver);

    let results = Dispatcher::new(workers(50), Some(LEGACY_SUBMISSION_LIMIT))
        .run(&input, &validator, None)
        .unwrap();

    let expected: ResultCollection = names[..11].iter().cloned().collect();
    assert_eq!(results, expected);
}

#[test]
fn legacy_limit_never_probes_dropped_hosts() {
    let names: Vec<String> = (0..15).map(|i| format!("host{i}.test")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let validator = Validator::new(MockResolver::new(names.clone()));

    let dispatcher = Dispatcher::new(workers(2), Some(LEGACY_SUBMISSION_LIMIT));
    dispatcher.run(&hosts(&name_refs), &validator, None).unwrap();

    let probed: BTreeSet<String> = validator.resolver().probed().into_iter().collect();
    for dropped in &names[11..] {
        assert!(
            !probed.iter().any(|form| form.contains(dropped.as_str())),
            "{dropped} was probed"
        );
    }
    assert_eq!(probed.len(), 11 * 4);
}

#[test]
fn without_limit_every_host_is_probed() {
    let names: Vec<String> = (0..15).map(|i| format!("host{i}.test")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let validator = Validator::new(MockResolver::new(names.clone()));

    let results = Dispatcher::new(workers(5), None)
        .run(&hosts(&name_refs), &validator, None)
        .unwrap();

    assert_eq!(results.len(), 15);
    assert_eq!(validator.resolver().probed().len(), 15 * 4);
}
