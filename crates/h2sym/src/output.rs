use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use h2sym_registry::{Category, CodeTable, Symbol};
use serde::Serialize;

pub const SYMBOL_SCHEMA_ID: &str = "https://schemas.3leaps.dev/h2sym/cli/v1/symbol.schema.json";
pub const TABLE_SCHEMA_ID: &str =
    "https://schemas.3leaps.dev/h2sym/cli/v1/symbol-table.schema.json";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct SymbolRecord {
    schema_id: &'static str,
    category: Category,
    code: u32,
    hex: String,
    name: Option<&'static str>,
    display: String,
    known: bool,
}

impl From<Symbol> for SymbolRecord {
    fn from(symbol: Symbol) -> Self {
        Self {
            schema_id: SYMBOL_SCHEMA_ID,
            category: symbol.category(),
            code: symbol.code(),
            hex: format!("0x{:x}", symbol.code()),
            name: symbol.name(),
            display: symbol.to_string(),
            known: symbol.is_known(),
        }
    }
}

#[derive(Serialize)]
struct TableEntry {
    code: u32,
    name: &'static str,
}

#[derive(Serialize)]
struct TableRecord {
    schema_id: &'static str,
    category: Category,
    size: usize,
    entries: Vec<TableEntry>,
}

impl From<&CodeTable> for TableRecord {
    fn from(table: &CodeTable) -> Self {
        Self {
            schema_id: TABLE_SCHEMA_ID,
            category: table.category(),
            size: table.len(),
            entries: table
                .iter()
                .map(|(code, name)| TableEntry { code, name })
                .collect(),
        }
    }
}

/// Print resolved symbols. JSON output is one object per line.
pub fn print_symbols(symbols: &[Symbol], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for symbol in symbols {
                print_json(&SymbolRecord::from(*symbol));
            }
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["CATEGORY", "CODE", "HEX", "NAME"]);
            for symbol in symbols {
                table.add_row(vec![
                    symbol.category().to_string(),
                    symbol.code().to_string(),
                    format!("0x{:x}", symbol.code()),
                    symbol.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for symbol in symbols {
                println!(
                    "{} {} (0x{:x}) = {}",
                    symbol.category(),
                    symbol.code(),
                    symbol.code(),
                    symbol
                );
            }
        }
        OutputFormat::Raw => {
            for symbol in symbols {
                println!("{symbol}");
            }
        }
    }
}

/// Print a reverse-lookup result.
pub fn print_code(category: Category, name: &str, code: u32, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&SymbolRecord::from(h2sym_registry::describe(
            category, code,
        ))),
        OutputFormat::Table => {
            let mut table = new_table(vec!["CATEGORY", "NAME", "CODE", "HEX"]);
            table.add_row(vec![
                category.to_string(),
                name.to_string(),
                code.to_string(),
                format!("0x{code:x}"),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("{category} {name} = {code} (0x{code:x})"),
        OutputFormat::Raw => println!("{code}"),
    }
}

/// Print whole code tables in code order.
pub fn print_tables(tables: &[&CodeTable], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for table in tables {
                print_json(&TableRecord::from(*table));
            }
        }
        OutputFormat::Table => {
            let mut out = new_table(vec!["CATEGORY", "CODE", "HEX", "NAME"]);
            for table in tables {
                for (code, name) in table.iter() {
                    out.add_row(vec![
                        table.category().to_string(),
                        code.to_string(),
                        format!("0x{code:x}"),
                        name.to_string(),
                    ]);
                }
            }
            println!("{out}");
        }
        OutputFormat::Pretty => {
            for (idx, table) in tables.iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                println!("{} ({} entries)", table.category(), table.len());
                for (code, name) in table.iter() {
                    println!("  {code:>3}  0x{code:02x}  {name}");
                }
            }
        }
        OutputFormat::Raw => {
            for table in tables {
                for (code, name) in table.iter() {
                    println!("{}\t{code}\t{name}", table.category());
                }
            }
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use h2sym_registry::describe;

    #[test]
    fn symbol_record_for_known_code() {
        let record = SymbolRecord::from(describe(Category::SettingsParameter, 4));
        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["schema_id"], SYMBOL_SCHEMA_ID);
        assert_eq!(json["category"], "settings-parameter");
        assert_eq!(json["name"], "INITIAL_WINDOW_SIZE");
        assert_eq!(json["hex"], "0x4");
        assert_eq!(json["known"], true);
    }

    #[test]
    fn symbol_record_for_unknown_code_keeps_raw_value() {
        let record = SymbolRecord::from(describe(Category::FrameType, 0x63));
        let json = serde_json::to_value(&record).expect("record should serialize");
        assert!(json["name"].is_null());
        assert_eq!(json["display"], "UNKNOWN(0x63)");
        assert_eq!(json["code"], 99);
        assert_eq!(json["known"], false);
    }

    #[test]
    fn table_record_lists_entries_in_order() {
        let record = TableRecord::from(Category::ErrorCode.table());
        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["size"], 14);
        let entries = json["entries"].as_array().expect("entries array");
        assert_eq!(entries.len(), 14);
        assert_eq!(entries[0]["name"], "NO_ERROR");
        assert_eq!(entries[13]["code"], 13);
        assert_eq!(entries[13]["name"], "HTTP_1_1_REQUIRED");
    }
}
