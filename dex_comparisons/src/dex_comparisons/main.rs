//!
//! The DEX gas comparisons converter binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse() {
        Ok(arguments) => exit_code(main_inner(arguments)),
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => exit_code(Err(anyhow::anyhow!(error))),
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let quiet = arguments.quiet;
    let config = arguments.into_config()?;
    dex_comparisons::Converter::new(config, quiet).run()?;
    Ok(())
}

///
/// Reports the outcome and maps it to the process exit code.
///
fn exit_code(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => dex_comparisons::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            dex_comparisons::EXIT_CODE_FAILURE
        }
    }
}
