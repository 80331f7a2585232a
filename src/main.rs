// Entry point and interactive menu.
//
// The dataset is loaded once at startup and then only read. Each menu
// option runs one report from `reports` and prints the text rendered by
// `output`. A missing or unreadable data file ends the program before the
// menu is shown.
mod aggregate;
mod config;
mod error;
mod loader;
mod output;
mod rank;
mod reports;
mod types;
mod util;
mod window;

use std::io::{self, BufRead, Write};
use tracing::{debug, error};
use types::AccidentRecord;

/// Print `prompt` and read one line from stdin.
///
/// Returns `None` once stdin is closed so the menu loop can stop instead of
/// spinning on empty input.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().lock().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim_end_matches(&['\r', '\n'][..]).to_string()),
    }
}

fn print_menu() {
    println!("\nBitte wählen Sie eine Funktion aus:");
    println!(
        "1. Liste der neusten Fahrzeuge (letzte {} Monate) pro Gemeinde",
        reports::LATEST_WINDOW_MONTHS
    );
    println!(
        "2. Die Fahrzeuge einer ausgewählten Gemeinde in den letzten {} Jahren",
        reports::HISTORY_YEARS
    );
    println!("3. Gibt die Anzahl der Fahrzeuge pro Fahrzeugart aus");
    println!("4. Rangliste der Anzahl Fahrzeuge pro Gemeinde");
    println!("5. Anzahl der Fahrzeuge pro Treibstoffart");
    println!("6. Beenden");
}

/// Handle option [2]. Returns `false` if stdin closed at the prompt.
fn handle_municipality_history(data: &[AccidentRecord]) -> bool {
    let Some(municipality) =
        read_line("Bitte geben Sie den Gemeindenamen ein (z.B., 'Grellingen'): ")
    else {
        return false;
    };
    let found =
        reports::accidents_in_municipality_over_years(data, &municipality, reports::HISTORY_YEARS);
    print!(
        "{}",
        output::render_municipality_history(&municipality, reports::HISTORY_YEARS, &found)
    );
    true
}

fn main() {
    util::init_tracing();

    let path = &config::CONFIG.data_path;
    let data = match loader::load_records(path) {
        Ok((data, load_report)) => {
            println!(
                "Datensatz geladen: {} Einträge aus {} Gemeinden (neuester Monat {}).",
                util::format_int(load_report.total_rows),
                util::format_int(load_report.municipalities),
                load_report.latest_period
            );
            data
        }
        Err(e) => {
            error!(error = %e, "failed to load accident data");
            eprintln!("{}", e);
            return;
        }
    };

    loop {
        print_menu();
        let Some(choice) = read_line("Ihre Wahl (1-6): ") else {
            println!("\nProgramm beendet.");
            break;
        };
        debug!(choice = choice.as_str(), "menu selection");
        match choice.trim() {
            "1" => {
                let grouped = reports::latest_accidents_by_municipality(&data);
                print!(
                    "{}",
                    output::render_latest_by_municipality(&grouped, reports::LATEST_WINDOW_MONTHS)
                );
            }
            "2" => {
                if !handle_municipality_history(&data) {
                    println!("\nProgramm beendet.");
                    break;
                }
            }
            "3" => {
                let totals = reports::quantity_by_vehicle_type(&data);
                print!(
                    "{}",
                    output::render_totals("Anzahl Fahrzeuge pro Fahrzeugart:", &totals)
                );
            }
            "4" => {
                let ranked = reports::ranked_quantity_by_municipality(&data);
                print!("{}", output::render_ranking(&ranked));
            }
            "5" => {
                let totals = reports::quantity_by_fuel_type(&data);
                print!(
                    "{}",
                    output::render_totals("Anzahl Fahrzeuge pro Treibstoffart:", &totals)
                );
            }
            "6" => {
                println!("Programm beendet.");
                break;
            }
            _ => {
                println!("Ungültige Auswahl. Bitte versuchen Sie es erneut.");
            }
        }
    }
}
