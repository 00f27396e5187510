use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use diabolo_judge::competitor::{Category, CompetitorRecord, PERFORMANCE_CATEGORY_NAMES};
use diabolo_judge::ranking::{PanelStanding, PerformanceStanding, TechnicalStanding};
use diabolo_judge::rules::{RuleBook, Tier};
use diabolo_judge::scorer::{format_score, ScorePreview};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn rank_cell(position: usize, disqualified: bool) -> Cell {
    if disqualified {
        Cell::new("DQ").fg(Color::Red)
    } else {
        Cell::new(position + 1)
    }
}

pub fn tricks(rules: &RuleBook, only: Option<Tier>, decimals: usize) {
    let mut table = new_table();

    let mut header = vec![
        Cell::new("Trick").add_attribute(Attribute::Bold),
        Cell::new("Abbr"),
    ];
    header.extend(Tier::iter().map(|t| Cell::new(t.label()).fg(Color::Cyan)));
    table.add_row(header);
    align_right(&mut table, 2..=Tier::iter().count() + 1);

    for trick in &rules.tricks {
        if let Some(tier) = only {
            if trick.base_score(tier).is_none() {
                continue;
            }
        }
        let mut row = vec![
            Cell::new(&trick.name).add_attribute(Attribute::Bold),
            Cell::new(&trick.abbreviation),
        ];
        row.extend(Tier::iter().map(|t| match trick.base_score(t) {
            Some(score) => Cell::new(format_score(score, decimals)),
            None => Cell::new("-").fg(Color::DarkGrey),
        }));
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn modifiers(rules: &RuleBook, decimals: usize) {
    let mut levels = new_table();
    levels.add_row(vec![
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("Factor"),
    ]);
    for l in &rules.levels {
        levels.add_row(vec![
            Cell::new(format!("L{}", l.level)),
            Cell::new(format!("×{}", format_score(l.factor, decimals))),
        ]);
    }
    align_right(&mut levels, 1..=1);
    println!("\n{}", levels);

    let mut features = new_table();
    features.add_row(vec![
        Cell::new("Feature").add_attribute(Attribute::Bold),
        Cell::new("Abbr"),
        Cell::new("Kind"),
        Cell::new("Effect"),
    ]);
    for f in &rules.features {
        features.add_row(vec![
            Cell::new(&f.name),
            Cell::new(&f.abbreviation),
            Cell::new(f.capability),
            Cell::new(format!(
                "{}{}",
                f.effect.operator(),
                format_score(f.effect.value(), decimals)
            ))
            .fg(Color::Green),
        ]);
    }
    align_right(&mut features, 3..=3);
    println!("\n{}", features);

    let mut grades = new_table();
    grades.add_row(vec![
        Cell::new("Execution").add_attribute(Attribute::Bold),
        Cell::new("Factor"),
    ]);
    for g in &rules.grades {
        grades.add_row(vec![
            Cell::new(format!("E{:+}", g.grade)),
            Cell::new(format!("×{}", format_score(g.factor, decimals))),
        ]);
    }
    align_right(&mut grades, 1..=1);
    println!("\n{}", grades);

    let mut deductions = new_table();
    deductions.add_row(vec![
        Cell::new("Deduction").add_attribute(Attribute::Bold),
        Cell::new("Abbr"),
        Cell::new("Points"),
    ]);
    for d in &rules.deductions {
        let name = if d.excludes_trick {
            format!("{} (no trick)", d.name)
        } else {
            d.name.clone()
        };
        deductions.add_row(vec![
            Cell::new(name),
            Cell::new(&d.abbreviation),
            Cell::new(format_score(d.points, decimals)).fg(Color::Red),
        ]);
    }
    align_right(&mut deductions, 2..=2);
    println!("\n{}", deductions);
}

pub fn attempt(preview: &ScorePreview, decimals: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(format_score(preview.final_score, decimals)).fg(Color::Cyan),
    ]);
    table.add_row(vec![Cell::new("Identifier"), Cell::new(&preview.identifier)]);
    table.add_row(vec![Cell::new("Description"), Cell::new(&preview.description)]);
    println!("\n{}", table);
}

pub fn competitor(record: &CompetitorRecord, decimals: usize) {
    println!(
        "\n{} ({}){}",
        record.name,
        record.category,
        if record.disqualified { " [DQ]" } else { "" }
    );
    let mut table = new_table();

    match record.category {
        Category::Technical => {
            table.add_row(vec![
                Cell::new("#").add_attribute(Attribute::Bold),
                Cell::new("Identifier"),
                Cell::new("Description"),
                Cell::new("Score").fg(Color::Cyan),
            ]);
            for (i, r) in record.records.iter().enumerate() {
                let score = Cell::new(format_score(r.final_score, decimals));
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&r.identifier),
                    Cell::new(&r.description),
                    if r.final_score < 0.0 {
                        score.fg(Color::Red)
                    } else {
                        score
                    },
                ]);
            }
            align_right(&mut table, 3..=3);
        }
        Category::Performance => {
            table.add_row(vec![
                Cell::new("Category").add_attribute(Attribute::Bold),
                Cell::new("Score").fg(Color::Cyan),
            ]);
            for (i, score) in record.performance_scores.iter().enumerate() {
                let label = PERFORMANCE_CATEGORY_NAMES
                    .get(i)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("Category {}", i + 1));
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(format_score(*score, decimals)),
                ]);
            }
            align_right(&mut table, 1..=1);
        }
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format_score(record.reported_total(), decimals))
            .add_attribute(Attribute::Bold),
    ]);
    println!("{}", table);
}

pub fn technical(standings: &[TechnicalStanding], decimals: usize) {
    println!("\nTechnical");
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Total"),
        Cell::new("Adjusted").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=3);

    for (i, s) in standings.iter().enumerate() {
        table.add_row(vec![
            rank_cell(i, s.disqualified),
            Cell::new(&s.name),
            Cell::new(format_score(s.total, decimals)),
            Cell::new(format_score(s.adjusted, decimals)).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn performance(standings: &[PerformanceStanding], decimals: usize) {
    println!("\nPerformance");
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Total").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=2);

    for (i, s) in standings.iter().enumerate() {
        table.add_row(vec![
            rank_cell(i, s.disqualified),
            Cell::new(&s.name),
            Cell::new(format_score(s.total, decimals)).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn panel(standings: &[PanelStanding], decimals: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Technical"),
        Cell::new("Performance"),
        Cell::new("Final").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 2..=4);

    for (i, s) in standings.iter().enumerate() {
        table.add_row(vec![
            rank_cell(i, s.disqualified),
            Cell::new(&s.name),
            Cell::new(format_score(s.score.normalized_technical, decimals)),
            Cell::new(format_score(s.score.average_performance, decimals)),
            Cell::new(format_score(s.score.final_score, decimals)).add_attribute(Attribute::Bold),
        ]);
    }
    println!("\n{}", table);
}
