use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use pastekit::utils::logger::Logger;
use pastekit::commands::{CommandFactory, PasteKitCommandFactory};

fn main() {
    let matches = ClapCommand::new("PasteKit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Inspect clipboard dumps: RTF pictures and pasted HTML")
        .arg(
            Arg::new("input")
                .help("Input RTF dump (HTML dump with --sanitize)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Write embedded PNG/JPEG images to the output directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sanitize")
                .short('s')
                .long("sanitize")
                .help("Filter an HTML dump the way the editor does on paste")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for images")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("rtf")
                .long("rtf")
                .help("RTF dump of the same paste, used to recover Word images")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .help("Plain-text dump of the same paste")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with a [paste] table")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("keep-style")
                .long("keep-style")
                .help("Keep style attributes (class attributes are always removed)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-img")
                .long("ignore-img")
                .help("Drop all images from the pasted HTML")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "pastekit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = Logger::init_global_logger("pastekit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = PasteKitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
