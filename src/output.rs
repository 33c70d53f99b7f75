/*!
 * Output Rendering
 * Plain-text tables, Gantt chart, and report for terminal display
 */

use crate::metrics::SimulationReport;
use crate::process::ProcessDescriptor;
use crate::scheduler::{SimulationOutcome, Timeline};
use std::fmt::Write;

/// Per-process table with computed statistics
pub fn render_processes(processes: &[ProcessDescriptor]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>8} {:>6} {:>6} {:>7} {:>8} {:>11}",
        "PID", "Arrival", "Burst", "Start", "Finish", "Waiting", "Turnaround"
    );
    for p in processes {
        let start = p
            .start_time
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        let _ = writeln!(
            out,
            "{:>6} {:>8} {:>6} {:>6} {:>7} {:>8} {:>11}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            start,
            p.finish_time,
            p.waiting_time,
            p.turnaround_time
        );
    }
    out
}

/// One-line Gantt chart with boundary times underneath
///
/// Back-to-back slices of the same process are merged and idle gaps are shown
/// as `idle` segments.
pub fn render_gantt(timeline: &Timeline) -> String {
    let mut bars = String::from("|");
    let mut times = String::from("0");
    let mut clock = 0;

    let segment = |label: String, end: u64, bars: &mut String, times: &mut String| {
        let cell = format!(" {label} ");
        let _ = write!(bars, "{cell}|");
        let mark = end.to_string();
        let pad = (cell.len() + 1).saturating_sub(mark.len());
        let _ = write!(times, "{}{}", " ".repeat(pad), mark);
    };

    for slice in timeline.coalesced() {
        if slice.start > clock {
            segment("idle".to_string(), slice.start, &mut bars, &mut times);
        }
        segment(format!("P{}", slice.pid), slice.end(), &mut bars, &mut times);
        clock = slice.end();
    }

    format!("{bars}\n{times}\n")
}

/// Aggregate statistics block
pub fn render_report(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Waiting Time: {}", report.total_waiting_time);
    let _ = writeln!(out, "Average Waiting Time: {:.2}", report.average_waiting_time);
    let _ = writeln!(out, "Total Turnaround Time: {}", report.total_turnaround_time);
    let _ = writeln!(
        out,
        "Average Turnaround Time: {:.2}",
        report.average_turnaround_time
    );
    let _ = writeln!(out, "Average Response Time: {:.2}", report.average_response_time);
    let _ = writeln!(
        out,
        "Context Switches: {} (overhead {:.2})",
        report.context_switches, report.switch_overhead
    );
    let _ = writeln!(out, "Idle Time: {}", report.idle_time);
    let _ = writeln!(out, "CPU Utilization: {:.2}%", report.cpu_utilization_percent);
    out
}

/// Full text rendering of a run
pub fn render_outcome(outcome: &SimulationOutcome) -> String {
    let mut header = outcome.policy.display_name().to_string();
    if let Some(quantum) = outcome.quantum {
        let _ = write!(header, ", quantum {}", quantum.ticks());
    }
    format!(
        "== {header} ==\n{}\nGantt chart:\n{}\n{}",
        render_processes(&outcome.processes),
        render_gantt(&outcome.timeline),
        render_report(&outcome.report)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gantt_shows_idle_and_merges_runs() {
        let mut timeline = Timeline::new();
        timeline.record(1, 1);
        timeline.record(1, 1);
        timeline.advance_idle_to(4);
        timeline.record(2, 3);

        let chart = render_gantt(&timeline);
        let mut lines = chart.lines();
        assert_eq!(lines.next(), Some("| P1 | idle | P2 |"));
        assert_eq!(lines.next(), Some("0    2      4    7"));
    }

    #[test]
    fn test_empty_gantt() {
        assert_eq!(render_gantt(&Timeline::new()), "|\n0\n");
    }

    #[test]
    fn test_process_table_marks_unstarted() {
        let table = render_processes(&[ProcessDescriptor::new(3, 0, 2, 0.0)]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.trim_start().starts_with("3"));
        assert!(row.contains(" - "));
    }
}
