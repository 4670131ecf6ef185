//! Configuration Parsing.

use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvpipe_core::common::ConfigError;
use rvpipe_core::config::{Config, MemoryInit};
use rvpipe_core::{HazardPolicy, Simulator};

use crate::common::builder::instruction::asm;

#[test]
fn empty_object_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.general.max_cycles, 10_000);
    assert_eq!(config.pipeline.hazard_policy, HazardPolicy::Forwarding);
    assert!(!config.general.trace_instructions);
    assert!(config.memory.initial.is_empty());
}

#[rstest]
#[case("Stall", HazardPolicy::Stall)]
#[case("stall", HazardPolicy::Stall)]
#[case("STALL", HazardPolicy::Stall)]
#[case("Forwarding", HazardPolicy::Forwarding)]
#[case("forwarding", HazardPolicy::Forwarding)]
fn policy_names(#[case] name: &str, #[case] expected: HazardPolicy) {
    let text = format!(r#"{{ "pipeline": {{ "hazard_policy": "{name}" }} }}"#);
    assert_eq!(Config::from_json(&text).unwrap().pipeline.hazard_policy, expected);
}

#[test]
fn full_document() {
    let text = r#"{
        "general": { "trace_instructions": true, "max_cycles": 500 },
        "pipeline": { "hazard_policy": "Stall" },
        "memory": { "initial": [ { "address": 0, "value": 7 }, { "address": 8, "value": 9 } ] }
    }"#;
    let config = Config::from_json(text).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_cycles, 500);
    assert_eq!(
        config.memory.initial,
        vec![
            MemoryInit { address: 0, value: 7 },
            MemoryInit { address: 8, value: 9 },
        ]
    );
}

#[rstest]
#[case::unknown_field(r#"{ "general": { "width": 4 } }"#)]
#[case::unknown_policy(r#"{ "pipeline": { "hazard_policy": "Speculate" } }"#)]
#[case::not_json("hazard_policy = stall")]
fn rejects_invalid(#[case] text: &str) {
    assert!(matches!(Config::from_json(text), Err(ConfigError::Parse(_))));
}

#[test]
fn reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "max_cycles": 42 }} }}"#).unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.max_cycles, 42);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("none.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn initial_memory_applied_on_every_load() {
    let config = Config::from_json(
        r#"{ "memory": { "initial": [ { "address": 0, "value": 7 } ] } }"#,
    )
    .unwrap();
    let mut sim = Simulator::new(&config);
    sim.load(&[asm::sw(0, 0, 0)]);
    let _ = sim.run();
    assert_eq!(sim.memory().read(0), 0);

    sim.load(&[asm::lw(1, 0, 0)]);
    assert_eq!(sim.memory().read(0), 7);
    let _ = sim.run();
    assert_eq!(sim.registers().read(1), 7);
}
