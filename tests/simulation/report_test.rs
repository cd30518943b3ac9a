/*!
 * Report Tests
 * Result file rendering and file-based round trips
 */

use mlq_scheduler::core::limits::MAX_TIME;
use mlq_scheduler::{
    load_processes, parse_processes, render_json, render_text, simulate, write_report,
    MlqError, OutputFormat, SchedulerConfig, SimulationReport,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run(input: &str) -> SimulationReport {
    simulate(parse_processes(input).unwrap(), SchedulerConfig::default()).unwrap()
}

#[test]
fn test_text_report_layout() {
    let report = run("# etiqueta; BT; AT; Q; Pr\nB;2;0;3;2\nA;5;0;1;1\n");

    let expected = "\
# archivo: out.txt
# etiqueta; BT; AT; Q; Pr; WT; CT; RT; TAT
A;5;0;1;1;0;5;0;5
B;2;0;3;2;5;7;5;7

WT=2.5; CT=6.0; RT=2.5; TAT=6.0;
";
    assert_eq!(render_text("out.txt", &report), expected);
}

#[test]
fn test_sample_workload_report() {
    let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("mlq019.txt");
    let report = simulate(load_processes(&input).unwrap(), SchedulerConfig::default()).unwrap();

    let expected = "\
# archivo: mlq019_output.txt
# etiqueta; BT; AT; Q; Pr; WT; CT; RT; TAT
A;6;0;1;5;8;14;0;14
B;9;0;1;4;10;19;1;19
C;10;0;2;3;28;38;19;38
D;15;0;2;3;29;44;22;44
E;8;0;3;2;47;55;47;55
F;3;2;3;1;42;47;42;45
G;4;5;1;2;6;15;0;10

WT=24.285714285714285; CT=33.142857142857146; RT=18.714285714285715; TAT=32.142857142857146;
";
    assert_eq!(render_text("mlq019_output.txt", &report), expected);
}

#[test]
fn test_large_averages_use_exponent_form() {
    let report = run(&format!("A;{0};{0};3;1", MAX_TIME));
    let text = render_text("out.txt", &report);
    assert_eq!(
        text.lines().last(),
        Some("WT=0.0; CT=1.8014398509481984e+16; RT=0.0; TAT=9007199254740992.0;")
    );
}

#[test]
fn test_empty_report() {
    let report = run("");

    let expected = "\
# archivo: out.txt
# etiqueta; BT; AT; Q; Pr; WT; CT; RT; TAT

WT=0; CT=0; RT=0; TAT=0;
";
    assert_eq!(render_text("out.txt", &report), expected);
}

#[test]
fn test_rendering_is_deterministic() {
    let input = "A;3;0;2;1\nB;2;1;1;4\nC;4;0;3;2\nD;1;2;3;1\nE;2;9;1;3";
    let first = render_text("x", &run(input));
    let second = render_text("x", &run(input));
    assert_eq!(first, second);
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("mlq001.txt");
    let output = dir.path().join("mlq001_output.txt");
    fs::write(&input, "# test\nA;4;0;3;1\nB;2;0;3;1\n").unwrap();

    let report = simulate(load_processes(&input).unwrap(), SchedulerConfig::default()).unwrap();
    write_report(&output, OutputFormat::Text, &report).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], format!("# archivo: {}", output.display()));
    assert_eq!(lines[2], "A;4;0;3;1;2;6;2;6");
    assert_eq!(lines[3], "B;2;0;3;1;0;2;0;2");
    assert_eq!(lines[5], "WT=1.0; CT=4.0; RT=1.0; TAT=4.0;");
}

#[test]
fn test_json_report() {
    let report = run("A;2;0;1;1\nB;1;0;3;7");
    let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

    assert_eq!(json["processes"][0]["label"], "A");
    assert_eq!(json["processes"][0]["queue_level"], "q1");
    assert_eq!(json["processes"][0]["completion_time"], 2);
    assert_eq!(json["processes"][1]["priority"], 7);
    assert_eq!(json["processes"][1]["waiting_time"], 2);
    assert_eq!(json["averages"]["turnaround_time"], 2.5);
    assert_eq!(json["stats"]["dispatches"], 3);
    assert_eq!(json["timeline"].as_array().unwrap().len(), 3);
}

#[test]
fn test_write_json_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.json");
    write_report(&output, OutputFormat::Json, &run("A;1;0;2;1")).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["stats"]["makespan"], 1);
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing").join("out.txt");
    let err = write_report(&output, OutputFormat::Text, &run("")).unwrap_err();
    assert!(matches!(err, MlqError::Io { ref path, .. } if *path == output));
}

#[test]
fn test_parse_error_surfaces_from_loader() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "A;1;0;1;1\nB;1;0;9;1\n").unwrap();

    match load_processes(&input).unwrap_err() {
        MlqError::Parse(err) => assert_eq!(err.line(), 2),
        other => panic!("unexpected error: {other}"),
    }
}
