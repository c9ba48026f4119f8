// ===== swingfit/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use swingfit::advisor::{Advisory, Severity};
use swingfit::scoring::{ComparisonRow, DecisionReport};
use swingfit::shortlist::ShortlistEntry;

fn fmt_opt(v: Option<f64>, precision: usize) -> String {
    match v {
        Some(v) => format!("{:+.*}", precision, v),
        None => "-".to_string(),
    }
}

pub fn print_comparison_table(rows: &[ComparisonRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shaft").add_attribute(Attribute::Bold),
        Cell::new("Shots"),
        Cell::new("Eff").fg(Color::Cyan),
        Cell::new("Conf"),
        Cell::new("Carry Δ"),
        Cell::new("Launch Δ"),
        Cell::new("Spin Δ"),
        Cell::new("Disp"),
    ]);

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in rows {
        let name_cell = if row.is_baseline {
            Cell::new(format!("{} (gamer)", row.shaft_label)).fg(Color::Yellow)
        } else {
            Cell::new(&row.shaft_label).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            name_cell,
            Cell::new(row.shots),
            Cell::new(format!("{:.1}", row.efficiency)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", row.confidence)),
            Cell::new(fmt_opt(row.carry_delta, 1)),
            Cell::new(fmt_opt(row.launch_delta, 1)),
            Cell::new(fmt_opt(row.spin_delta, 0)),
            Cell::new(match row.dispersion {
                Some(d) => format!("{:.1}", d),
                None => "-".to_string(),
            }),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_decision_matrix(report: &DecisionReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shaft").add_attribute(Attribute::Bold),
        Cell::new("Overall").fg(Color::Cyan),
        Cell::new("Eff"),
        Cell::new("Disp"),
        Cell::new("Dist"),
        Cell::new("Hold"),
        Cell::new("Flight"),
        Cell::new("Feel"),
        Cell::new("Conf"),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for rec in &report.matrix {
        let highlighted = report.highlighted.as_deref() == Some(rec.shaft_id.as_str());
        let name_cell = if highlighted {
            Cell::new(format!("» {}", rec.shaft_label))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else if rec.is_baseline {
            Cell::new(format!("{} (gamer)", rec.shaft_label)).fg(Color::Yellow)
        } else {
            Cell::new(&rec.shaft_label)
        };
        table.add_row(vec![
            name_cell,
            Cell::new(format!("{:.1}", rec.overall)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", rec.efficiency)),
            Cell::new(format!("{:.1}", rec.dispersion)),
            Cell::new(format!("{:.1}", rec.distance)),
            Cell::new(format!("{:.1}", rec.hold)),
            Cell::new(format!("{:.1}", rec.flight)),
            Cell::new(format!("{:.1}", rec.feel)),
            Cell::new(format!("{:.0}", rec.confidence)),
        ]);
    }
    println!("\n{}", table);

    if let Some(note) = &report.highlight_note {
        println!("ℹ️  {}", note);
    }
    if let Some(note) = &report.too_close_note {
        println!("⚖️  {}", note);
    }
    if let Some(check) = &report.gamer_check {
        match &check.note {
            Some(note) => println!("⚠️  {}", note),
            None => println!("✅ Clear upgrade over the gamer."),
        }
    }
    for rec in &report.matrix {
        for note in &rec.notes {
            println!("   {} — {}", rec.shaft_label, note);
        }
    }
}

pub fn print_shortlist(entries: &[ShortlistEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shaft").add_attribute(Attribute::Bold),
        Cell::new("Flex"),
        Cell::new("Weight (g)"),
        Cell::new("Penalty").fg(Color::Cyan),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for e in entries {
        table.add_row(vec![
            Cell::new(&e.shaft_label).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", e.flex_score)),
            Cell::new(format!("{:.0}", e.weight_g)),
            Cell::new(format!("{:.0}", e.penalty)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_advisories(advisories: &[Advisory]) {
    if advisories.is_empty() {
        return;
    }
    println!("\n🔧 Fitter notes:");
    for a in advisories {
        let marker = match a.severity {
            Severity::Info => "•",
            Severity::Warn => "⚠",
        };
        println!("  {} [{}] {}", marker, a.category, a.text);
    }
}
