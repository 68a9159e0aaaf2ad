/**
 * ICU Message Printer CLI - print-icu-message
 *
 * Print a parsed ICU message (JSON AST) back as message syntax
 */
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use std::path::PathBuf;
use std::process;

use icu_message_printer_cli::config::PrinterConfig;
use icu_message_printer_cli::{read_input, run, version};

fn main() {
    let matches = Command::new("print-icu-message")
        .version(version())
        .about("Print a parsed ICU message as message syntax")
        .arg(
            Arg::new("input")
                .value_name("PATH")
                .help("JSON message tree to print (defaults to stdin)"),
        )
        .arg(
            Arg::new("pretty")
                .short('p')
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Put each plural/select option on its own line"),
        )
        .arg(
            Arg::new("bundle")
                .short('b')
                .long("bundle")
                .action(ArgAction::SetTrue)
                .help("Input is an object of message key to message tree"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to a JSON printer config"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = (|| -> anyhow::Result<String> {
        let config = match matches.get_one::<String>("config") {
            Some(path) => PrinterConfig::load(&PathBuf::from(path))?,
            None => PrinterConfig::default(),
        }
        .merge_flags(matches.get_flag("pretty"), matches.get_flag("bundle"));

        let input = matches.get_one::<String>("input").map(PathBuf::from);
        let source = read_input(input.as_deref())?;
        run(&source, &config)
    })();

    match result {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}
