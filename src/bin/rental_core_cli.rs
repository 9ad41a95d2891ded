use std::env;
use std::process::ExitCode;

use rental_core::cli;
use rental_core::storage::JsonSnapshotStore;

const USAGE: &str = "usage: rental_core_cli <snapshot.json> [status|obligations]";

fn main() -> ExitCode {
    rental_core::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (path, report) = match args.as_slice() {
        [path] => (path, "status"),
        [path, report] if report == "status" || report == "obligations" => {
            (path, report.as_str())
        }
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let store = JsonSnapshotStore::new(path);
    let snapshot = match store.load() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("failed to load snapshot {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let lines = match report {
        "obligations" => cli::obligation_report(&snapshot),
        _ => cli::status_report(&snapshot),
    };
    for line in lines {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
