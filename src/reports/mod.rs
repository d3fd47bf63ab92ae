use clipforge::assembly::FinalAssembly;
use clipforge::clips::UniqueReaction;
use clipforge::config::PlanConfig;
use clipforge::design::Construct;
use clipforge::error::CapacityKind;
use clipforge::plan::PlanSummary;
use clipforge::reducer::ReactionTriple;
use clipforge::script::{ClipTransfer, SpottingGroup};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn join_wells<I: IntoIterator<Item = T>, T: ToString>(wells: I) -> String {
    wells
        .into_iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_reaction_table(reactions: &[UniqueReaction]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Prefix"),
        Cell::new("Part").add_attribute(Attribute::Bold),
        Cell::new("Suffix"),
        Cell::new("Demand"),
        Cell::new("Repeats").fg(Color::Cyan),
        Cell::new("Wells").fg(Color::Green),
    ]);

    for (i, r) in reactions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.triple.prefix),
            Cell::new(&r.triple.part).add_attribute(Attribute::Bold),
            Cell::new(&r.triple.suffix),
            Cell::new(r.demand),
            Cell::new(r.repeat_count).fg(Color::Cyan),
            Cell::new(join_wells(&r.wells)).fg(Color::Green),
        ]);
    }

    for i in [0, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n🧪 CLIP REACTIONS\n{}", table);
}

pub fn print_assembly_table(assemblies: &[FinalAssembly]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Construct"),
        Cell::new("CLIP wells").fg(Color::Green),
    ]);

    for a in assemblies {
        table.add_row(vec![
            Cell::new(a.target_well).add_attribute(Attribute::Bold),
            Cell::new(&a.name),
            Cell::new(join_wells(&a.sources)).fg(Color::Green),
        ]);
    }

    println!("\n🧬 FINAL ASSEMBLIES\n{}", table);
}

pub fn print_summary(summary: &PlanSummary, limits: &PlanConfig) {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value", "Limit"]);

    for kind in CapacityKind::iter() {
        let count = summary.count(kind);
        let limit = limits.limit(kind);
        let value = if count == limit {
            Cell::new(count).fg(Color::Yellow)
        } else {
            Cell::new(count)
        };
        table.add_row(vec![Cell::new(kind), value, Cell::new(limit)]);
    }
    table.add_row(vec![
        Cell::new("clip_wells"),
        Cell::new(summary.clip_wells),
        Cell::new(format!("from well {}", limits.clip_well_offset + 1)),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n📊 SUMMARY\n{}", table);
}

pub fn print_transfer_table(transfers: &[ClipTransfer]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Dest").add_attribute(Attribute::Bold),
        Cell::new("Prefix (slot:well)"),
        Cell::new("Part (slot:well)"),
        Cell::new("Suffix (slot:well)"),
        Cell::new("ng/µL"),
    ]);

    for t in transfers {
        let conc = t
            .part
            .concentration
            .map(|c| format!("{:.1}", c))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(t.destination).add_attribute(Attribute::Bold),
            Cell::new(format!("{}:{}", t.prefix.plate, t.prefix.well)),
            Cell::new(format!("{}:{}", t.part.plate, t.part.well)),
            Cell::new(format!("{}:{}", t.suffix.plate, t.suffix.well)),
            Cell::new(conc),
        ]);
    }

    println!("\n🚚 CLIP TRANSFERS\n{}", table);
}

pub fn print_spotting_table(groups: &[SpottingGroup]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Wells").fg(Color::Green),
        Cell::new("Parts"),
    ]);

    for (i, g) in groups.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Bold),
            Cell::new(join_wells(&g.wells)).fg(Color::Green),
            Cell::new(join_wells(&g.part_counts)),
        ]);
    }

    println!("\n🧫 TRANSFORMATION SPOTTING\n{}", table);
}

pub fn print_triples(constructs: &[Construct], reduced: &[Vec<ReactionTriple>]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Construct"),
        Cell::new("CLIP triples"),
    ]);

    for (c, triples) in constructs.iter().zip(reduced) {
        table.add_row(vec![
            Cell::new(c.order_index() + 1),
            Cell::new(c.name()),
            Cell::new(
                triples
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        ]);
    }

    println!("{}", table);
}

pub fn print_demand(demand: &[(&ReactionTriple, usize)]) {
    let mut table = new_table();
    table.set_header(vec!["CLIP", "Demand"]);
    for (triple, n) in demand {
        table.add_row(vec![Cell::new(triple), Cell::new(n)]);
    }
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!(
        "\n{} unique CLIP reactions across the batch\n{}",
        demand.len(),
        table
    );
}
