use h2sym_registry::code_for;
use tracing::debug;

use crate::cmd::CodeArgs;
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{print_code, OutputFormat};

pub fn run(args: CodeArgs, format: OutputFormat) -> CliResult<i32> {
    let code = code_for(args.category, &args.name)
        .map_err(|err| registry_error("reverse lookup failed", err))?;
    debug!(category = %args.category, name = %args.name, code, "resolved name");

    print_code(args.category, &args.name, code, format);
    Ok(SUCCESS)
}
