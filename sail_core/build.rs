//! Build script: compiles `data/price_tables.toml` into static lookup arrays.
//!
//! The generated file is written to `$OUT_DIR/price_table_data.rs` and pulled
//! into the crate by `crate::generated::price_table_data`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Deserialize;

const DATA_FILE: &str = "data/price_tables.toml";

#[derive(Deserialize)]
struct PriceData {
    fabric_table: Vec<FabricTable>,
    corner_cost: Vec<CornerCosts>,
    hardware_cost: Vec<CornerCosts>,
}

#[derive(Deserialize)]
struct FabricTable {
    edge: String,
    fabric: String,
    rows: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct CornerCosts {
    edge: String,
    costs: [f64; 4],
}

fn main() {
    println!("cargo:rerun-if-changed={}", DATA_FILE);

    let raw = fs::read_to_string(DATA_FILE)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", DATA_FILE, e));
    let data: PriceData =
        toml::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse {}: {}", DATA_FILE, e));

    for table in &data.fabric_table {
        if table.rows.is_empty() {
            panic!("price table {}/{} has no rows", table.edge, table.fabric);
        }
        if table.rows.windows(2).any(|w| w[1][0] <= w[0][0]) {
            panic!(
                "price table {}/{} perimeters must be strictly ascending",
                table.edge, table.fabric
            );
        }
    }

    let mut out = String::new();
    out.push_str("// @generated by build.rs from data/price_tables.toml. Do not edit.\n\n");

    out.push_str("pub struct FabricTable {\n");
    out.push_str("    pub edge: &'static str,\n");
    out.push_str("    pub fabric: &'static str,\n");
    out.push_str("    pub rows: &'static [(f64, f64)],\n");
    out.push_str("}\n\n");

    let _ = writeln!(
        out,
        "pub static FABRIC_TABLES: [FabricTable; {}] = [",
        data.fabric_table.len()
    );
    for table in &data.fabric_table {
        let _ = writeln!(
            out,
            "    FabricTable {{ edge: {:?}, fabric: {:?}, rows: &[",
            table.edge, table.fabric
        );
        for row in &table.rows {
            let _ = writeln!(out, "        ({:?}, {:?}),", row[0], row[1]);
        }
        out.push_str("    ] },\n");
    }
    out.push_str("];\n\n");

    write_corner_table(&mut out, "CORNER_COSTS", &data.corner_cost);
    write_corner_table(&mut out, "HARDWARE_COSTS", &data.hardware_cost);

    out.push_str(
        "pub fn fabric_rows(edge: &str, fabric: &str) -> Option<&'static [(f64, f64)]> {\n\
         \x20   FABRIC_TABLES\n\
         \x20       .iter()\n\
         \x20       .find(|t| t.edge == edge && t.fabric == fabric)\n\
         \x20       .map(|t| t.rows)\n\
         }\n\n",
    );
    out.push_str(
        "pub fn corner_costs(edge: &str) -> Option<[f64; 4]> {\n\
         \x20   CORNER_COSTS.iter().find(|(e, _)| *e == edge).map(|(_, c)| *c)\n\
         }\n\n",
    );
    out.push_str(
        "pub fn hardware_costs(edge: &str) -> Option<[f64; 4]> {\n\
         \x20   HARDWARE_COSTS.iter().find(|(e, _)| *e == edge).map(|(_, c)| *c)\n\
         }\n",
    );

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("price_table_data.rs");
    fs::write(&dest, out).unwrap_or_else(|e| panic!("failed to write {}: {}", dest.display(), e));
}

fn write_corner_table(out: &mut String, name: &str, tables: &[CornerCosts]) {
    let _ = writeln!(
        out,
        "pub static {}: [(&str, [f64; 4]); {}] = [",
        name,
        tables.len()
    );
    for table in tables {
        let _ = writeln!(
            out,
            "    ({:?}, [{:?}, {:?}, {:?}, {:?}]),",
            table.edge, table.costs[0], table.costs[1], table.costs[2], table.costs[3]
        );
    }
    out.push_str("];\n\n");
}
