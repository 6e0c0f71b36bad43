// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! bmp2dw: Converts a 16-bit bitmap into a table of `dw` directives

#[cfg(test)]
mod tests;

use bmp2dw::{
    convert,
    layout::{Dimensions, Layout, DIRECTIVE, OUTPUT},
    Order,
};
use gumdrop::Options;
use log::{error, Level};
use owo_colors::OwoColorize;
use std::{path::PathBuf, process::ExitCode};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
struct Arguments {
    #[options(help = "Convert this bitmap into a word table.", required, free)]
    pub file: PathBuf,
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(help = "Write the table here (default: jura.dat).", meta = "PATH")]
    pub output: Option<PathBuf>,
    #[options(help = "Set the image dimensions (default: 128x128).", meta = "WxH")]
    pub size: Option<Dimensions>,
    #[options(
        short = "H",
        help = "Skip this many header bytes (default: 72).",
        meta = "N"
    )]
    pub header: Option<usize>,
    #[options(help = "Begin each line with this directive (default: dw).", meta = "STR")]
    pub directive: Option<String>,
    #[options(help = "Write the rows top-down, in display order.")]
    pub flip: bool,
    #[options(no_short, help = "Treat a partial final row as an error.")]
    pub strict: bool,
    #[options(no_short, help = "Hexdump the skipped header to stdout.")]
    pub dump: bool,
    #[options(help = "Also rebuild a bitmap from the decoded words.", meta = "PATH")]
    pub rebuild: Option<PathBuf>,
    #[options(count, help = "Log more (repeat for more detail).")]
    pub verbose: u32,
}

impl Arguments {
    /// Where the table goes
    pub fn output(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(OUTPUT))
    }
}

impl From<&Arguments> for bmp2dw::Options {
    fn from(value: &Arguments) -> Self {
        let mut layout = Layout::default();
        if let Some(dims) = value.size {
            layout = layout.with_dimensions(dims);
        }
        if let Some(header) = value.header {
            layout = layout.with_header_len(header);
        }
        bmp2dw::Options {
            layout,
            directive: value
                .directive
                .clone()
                .unwrap_or_else(|| DIRECTIVE.to_string()),
            order: if value.flip { Order::Display } else { Order::File },
            strict: value.strict,
            dump: value.dump,
            rebuild: value.rebuild.clone(),
        }
    }
}

fn setup_logger(verbose: u32) {
    let level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("{}", e.yellow());
    }
}

fn main() -> ExitCode {
    let options = Arguments::parse_args_default_or_exit();
    setup_logger(options.verbose);

    match convert(&options.file, options.output(), &(&options).into()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Could not convert {}: {e}", options.file.display());
            eprintln!("{}", e.bold().red());
            ExitCode::FAILURE
        }
    }
}
