use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colmap_cli::report::Verdict;
use colmap_map::ACCEPT_THRESHOLD;

use crate::commands::{RankOutcome, ScoreOutcome, SuggestOutcome};

pub fn print_suggest(outcome: &SuggestOutcome) {
    let report = &outcome.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Attribute"),
        header_cell("Required"),
        header_cell("Type"),
        header_cell("Column"),
        header_cell("Score"),
        header_cell("Samples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in &report.rows {
        let target_cell = if row.required {
            Cell::new(&row.target).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&row.target)
        };
        let column_cell = match (&row.source_column, row.required) {
            (Some(name), _) => Cell::new(name).fg(Color::Green),
            (None, true) => Cell::new("(unmapped)").fg(Color::Red),
            (None, false) => dim_cell("-"),
        };
        table.add_row(vec![
            target_cell,
            required_cell(row.required),
            Cell::new(row.attribute_type),
            column_cell,
            score_cell(row.score),
            samples_cell(&row.samples),
        ]);
    }
    println!("{table}");
    println!("{}", report.summary_text());
    if let Some(path) = &outcome.record_path {
        println!("Mapping written to {}", path.display());
    }
    if report.verdict == Verdict::Blocked {
        eprintln!("error: required attributes are not mapped");
    }
}

pub fn print_score(outcome: &ScoreOutcome) {
    println!("normalized: {:?} vs {:?}", outcome.normalized_a, outcome.normalized_b);
    let verdict = if outcome.score >= ACCEPT_THRESHOLD {
        "accepted"
    } else {
        "rejected"
    };
    println!("similarity: {:.4} ({verdict})", outcome.score);
}

pub fn print_rank(target: &str, outcome: &RankOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Score"),
        header_cell("Accepted"),
        header_cell("Samples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (rank, candidate) in outcome.candidates.iter().enumerate() {
        let samples = outcome
            .columns
            .iter()
            .find(|c| c.name == candidate.source_column)
            .map(|c| c.sample_values.as_slice())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&candidate.source_column),
            score_cell(Some(candidate.score)),
            required_cell(candidate.is_acceptable()),
            samples_cell(samples),
        ]);
    }
    println!("Candidates for {target}:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn required_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn score_cell(score: Option<f64>) -> Cell {
    match score {
        Some(value) if value >= ACCEPT_THRESHOLD => Cell::new(format!("{value:.2}")),
        Some(value) => Cell::new(format!("{value:.2}")).fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

fn samples_cell(samples: &[String]) -> Cell {
    if samples.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(samples.join(", "))
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
