use h2sym_registry::{describe, Symbol};
use tracing::{debug, warn};

use crate::cmd::{parse_code, LookupArgs};
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{print_symbols, OutputFormat};

pub fn run(args: LookupArgs, format: OutputFormat) -> CliResult<i32> {
    let codes = args
        .codes
        .iter()
        .map(|raw| parse_code(raw))
        .collect::<CliResult<Vec<u32>>>()?;

    let symbols: Vec<Symbol> = codes
        .iter()
        .map(|&code| describe(args.category, code))
        .collect();
    debug!(category = %args.category, count = symbols.len(), "resolved codes");

    print_symbols(&symbols, format);

    if let Some(err) = symbols.iter().find_map(|symbol| symbol.into_result().err()) {
        if args.strict {
            return Err(registry_error("lookup failed", err));
        }
        warn!(%err, "unrecognized code, showing raw value");
    }

    Ok(SUCCESS)
}
