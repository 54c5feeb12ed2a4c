#![cfg(test)]
use std::fs;
use std::io::Write;

use hostprobe_common::config::Config;
use hostprobe_common::input::{self, InputError};
use hostprobe_core::dispatch::Dispatcher;
use hostprobe_core::sink::{FileSink, ResultSink};
use hostprobe_core::validator::Validator;

use crate::utils::MockResolver;

/// Reads a host file, resolves it against a fixed set of names and writes the output file.
#[test]
fn file_to_output_round() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("hosts.txt");
    let output_path = dir.path().join("resolve.out");

    let mut file = fs::File::create(&input_path).unwrap();
    write!(file, "example.com\nnot a host\n\nwww.example.org\r\nhttps://example.net").unwrap();
    fs::write(&output_path, "left over from a previous run").unwrap();

    let cfg = Config {
        output: output_path.clone(),
        ..Config::default()
    };

    let hosts = input::collect_hosts(Some("solo.test"), Some(&input_path)).unwrap();
    assert_eq!(hosts.len(), 4);

    let validator = Validator::new(MockResolver::new([
        "solo.test",
        "www.example.com",
        "example.org",
        "example.net",
    ]));
    let results = Dispatcher::from_config(&cfg)
        .run(&hosts, &validator, None)
        .unwrap();

    FileSink::new(&cfg.output).write(results).unwrap();

    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "example.net\nexample.org\nsolo.test\nwww.example.com"
    );
}

#[test]
fn missing_input_fails_before_any_probe() {
    let err = input::collect_hosts(None, None).unwrap_err();
    assert!(matches!(err, InputError::MissingInput));
    assert_eq!(
        err.to_string(),
        "a host, a file of hosts, or both must be passed in"
    );
}

#[test]
fn nothing_resolved_writes_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("resolve.out");

    let hosts = input::collect_hosts(Some("nope.invalid"), None).unwrap();
    let validator = Validator::new(MockResolver::new(Vec::<String>::new()));
    let results = Dispatcher::from_config(&Config::default())
        .run(&hosts, &validator, None)
        .unwrap();

    FileSink::new(&output_path).write(results).unwrap();
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "");
}
