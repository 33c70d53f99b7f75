/*!
 * Loader Tests
 * Reading process files from disk into a simulator
 */

use cpu_sched_sim::{load_from_path, InputError, SchedulingPolicy, Simulator};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_simulate_from_file() {
    let file = write_file("# id arrival burst cost\n1 0 5 0\n2 1 3 0\n3 2 8 0\n");
    let store = load_from_path(file.path()).unwrap();
    assert_eq!(store.len(), 3);

    let mut sim = Simulator::new(store);
    let outcome = sim.run(SchedulingPolicy::Fcfs, None).unwrap();
    assert_eq!(outcome.report.total_waiting_time, 10);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn test_malformed_record_reports_line() {
    let file = write_file("1 0 5 0\n2 x 3 0\n");
    let err = load_from_path(file.path()).unwrap_err();
    assert_eq!(
        err,
        InputError::InvalidField {
            line: 2,
            field: "arrival".to_string(),
            value: "x".to_string(),
        }
    );
}

#[test]
fn test_empty_file_loads_but_cannot_run() {
    let file = write_file("# nothing here\n");
    let store = load_from_path(file.path()).unwrap();
    assert!(store.is_empty());
    assert!(Simulator::new(store)
        .run(SchedulingPolicy::Fcfs, None)
        .is_err());
}

#[test]
fn test_arrival_at_end_of_tick_range_is_rejected() {
    let file = write_file("1 18446744073709551615 1 0\n");
    let err = load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, InputError::ClockOverflow { line: 1, pid: 1, .. }));
}
