// Text rendering of report results. Every function returns the finished
// block so the driver only has to print it.
use crate::aggregate::Buckets;
use crate::rank::Ranked;
use crate::types::{AccidentRecord, MunicipalityRankingRow, TotalRow};
use crate::util::format_int;
use std::fmt::Write;
use tabled::{settings::Style, Table, Tabled};

pub fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    if rows.is_empty() {
        return "(keine Einträge)\n".to_string();
    }
    let table_str = Table::new(rows).with(Style::markdown()).to_string();
    format!("{}\n", table_str)
}

pub fn render_record(record: &AccidentRecord) -> String {
    format!(
        " Jahr-Monat: {}\n Gemeinde: {}\n Fahrzeugart: {}\n Treibstoff: {}\n Anzahl: {}\n",
        record.period,
        record.municipality,
        record.vehicle_type,
        record.fuel_label(),
        record.quantity
    )
}

pub fn render_latest_by_municipality(
    grouped: &Buckets<&str, Vec<&AccidentRecord>>,
    months: usize,
) -> String {
    if grouped.is_empty() {
        return format!("Keine Unfälle in den letzten {} Monaten gefunden.\n", months);
    }
    let mut out = String::new();
    for (municipality, records) in grouped.iter() {
        let _ = writeln!(out, "Gemeinde {}:", municipality);
        for r in records {
            let _ = writeln!(out, "{}", render_record(r));
        }
    }
    out
}

pub fn render_municipality_history(
    municipality: &str,
    n_years: usize,
    records: &[&AccidentRecord],
) -> String {
    if records.is_empty() {
        return format!(
            "Keine Unfälle in der Gemeinde {} in den letzten {} Jahren gefunden.\n",
            municipality, n_years
        );
    }
    let mut out = format!(
        "Unfälle in der Gemeinde {} in den letzten {} Jahren:\n",
        municipality, n_years
    );
    for r in records {
        let _ = writeln!(out, "{}", render_record(r));
    }
    out
}

pub fn render_totals(title: &str, totals: &Buckets<&str, u64>) -> String {
    let rows: Vec<TotalRow> = totals
        .iter()
        .map(|(label, total)| TotalRow {
            label: label.to_string(),
            total_quantity: format_int(*total),
        })
        .collect();
    format!("{}\n\n{}", title, render_table(rows))
}

pub fn render_ranking(ranked: &[Ranked<&str>]) -> String {
    let rows: Vec<MunicipalityRankingRow> = ranked
        .iter()
        .map(|r| MunicipalityRankingRow {
            rank: r.rank,
            municipality: r.key.to_string(),
            total_quantity: format_int(r.value),
        })
        .collect();
    format!(
        "Rangliste der Anzahl Fahrzeuge pro Gemeinde:\n\n{}",
        render_table(rows)
    )
}
