use anyhow::{Context, Result};
use clap::Parser;
use icon_strip::strip;
use std::{ffi::OsString, path::PathBuf, process};

#[derive(Debug, Parser)]
#[clap(
    name = "icon-strip",
    version,
    about = "Make the near-black background of an icon transparent"
)]
struct Args {
    /// Path to the source image (any format the image decoder supports).
    #[clap(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,

    /// Path of the PNG file to write.
    #[clap(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: PathBuf,

    /// Anything after the two paths is accepted and ignored.
    #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<OsString>,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version go to stdout and succeed; any usage error exits 1
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().context("Failed to print usage")?;
            process::exit(code);
        }
    };

    strip::remove_black_background(&args.input, &args.output)?;

    Ok(())
}
