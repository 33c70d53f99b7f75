/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Usage:
 * - `cpu-sched <policy> [quantum]` runs one policy and exits
 * - `cpu-sched` with no arguments opens the interactive menu
 *
 * The process file and output format come from SCHED_* environment variables.
 */

use cpu_sched_sim::output::render_outcome;
use cpu_sched_sim::{
    init_tracing, load_from_path, SchedulingPolicy, SimulationOutcome, Simulator,
    SimulatorConfig, SimulatorError, TimeQuantum,
};
use miette::IntoDiagnostic;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

fn main() -> miette::Result<()> {
    let config = SimulatorConfig::from_env()?;
    init_tracing(config.trace_json);

    info!(
        input = %config.input_path.display(),
        switch_cost = %config.switch_cost,
        "CPU scheduling simulator starting"
    );

    let store = load_from_path(&config.input_path)?;
    let mut simulator = Simulator::new(store).with_switch_cost(config.switch_cost);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        interactive(&mut simulator, &config).into_diagnostic()?;
    } else {
        let outcome = one_shot(&mut simulator, &args)?;
        print_outcome(&outcome, config.output_json)?;
    }
    Ok(())
}

fn one_shot(
    simulator: &mut Simulator,
    args: &[String],
) -> Result<SimulationOutcome, SimulatorError> {
    let policy = SchedulingPolicy::from_str(&args[0])?;
    let quantum = args.get(1).map(|raw| parse_quantum(raw)).transpose()?;
    if args.len() > 2 {
        warn!(ignored = ?&args[2..], "Ignoring extra arguments");
    }
    Ok(simulator.run(policy, quantum)?)
}

fn parse_quantum(raw: &str) -> Result<TimeQuantum, SimulatorError> {
    let ticks: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SimulatorError::Configuration(format!("quantum '{raw}' is not an integer")))?;
    Ok(TimeQuantum::new(ticks)?)
}

fn print_outcome(outcome: &SimulationOutcome, json: bool) -> Result<(), SimulatorError> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        println!("{}", render_outcome(outcome));
    }
    Ok(())
}

/// Menu loop: pick a policy, see the results, repeat until exit or EOF
fn interactive(simulator: &mut Simulator, config: &SimulatorConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(
            "=======================================\n\
             1) First-Come First-Served (FCFS)\n\
             2) Shortest Remaining Time First (SRT)\n\
             3) Round-Robin (RR)\n\
             4) Exit Program\n\
             Enter your choice: "
        );
        io::stdout().flush()?;

        let Some(choice) = lines.next().transpose()? else {
            break;
        };

        let selection = match choice.trim() {
            "1" => Ok((SchedulingPolicy::Fcfs, None)),
            "2" => Ok((SchedulingPolicy::ShortestRemainingTime, None)),
            "3" => {
                print!("Enter quantum time: ");
                io::stdout().flush()?;
                let Some(raw) = lines.next().transpose()? else {
                    break;
                };
                parse_quantum(&raw).map(|q| (SchedulingPolicy::RoundRobin, Some(q)))
            }
            "4" => {
                println!("Bye Bye");
                break;
            }
            _ => {
                println!("Invalid Choice");
                continue;
            }
        };

        let result = selection.and_then(|(policy, quantum)| {
            let outcome = simulator.run(policy, quantum)?;
            print_outcome(&outcome, config.output_json)
        });
        if let Err(e) = result {
            eprintln!("{:?}", miette::Report::new(e));
        }
    }

    Ok(())
}
