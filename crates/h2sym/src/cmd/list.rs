use h2sym_registry::{Category, CodeTable};

use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_tables, OutputFormat};

pub fn run(args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let tables: Vec<&CodeTable> = match args.category {
        Some(category) => vec![category.table()],
        None => Category::ALL.iter().map(|category| category.table()).collect(),
    };

    print_tables(&tables, format);
    Ok(SUCCESS)
}
