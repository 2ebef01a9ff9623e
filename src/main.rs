use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use coordkit::api::CoordKit;
use coordkit::config::CoordConfig;
use coordkit::utils::logger::Logger;
use coordkit::commands::{CommandFactory, CoordkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("coordkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Encode, decode and inspect coordinate message files")
        .arg(
            Arg::new("input")
                .help("Input file (text points for --encode, message file otherwise)")
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
            Arg::new("encode")
                .short('e')
                .long("encode")
                .help("Encode text points into a message file")
                .action(ArgAction::SetTrue)
                .conflicts_with("decode"),
        )
        .arg(
            Arg::new("decode")
                .short('d')
                .long("decode")
                .help("Decode a message file into text points")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .help("Message level to encode (point, set, sets)")
                .value_name("LEVEL")
                .default_value("sets")
                .required(false),
        )
        .arg(
            Arg::new("byte-order")
                .long("byte-order")
                .help("Byte order of the written message file (little, big)")
                .value_name("ORDER")
                .required(false),
        )
        .arg(
            Arg::new("frame-id")
                .long("frame-id")
                .help("Frame id written into encoded headers")
                .value_name("ID")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match CoordConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                process::exit(1);
            }
        },
        None => CoordConfig::default(),
    };

    if let Some(frame_id) = matches.get_one::<String>("frame-id") {
        config.frame_id = frame_id.clone();
    }

    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    } else if let Err(e) = Logger::init_global_logger(&config.global_log_file) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let kit = match CoordKit::new(config) {
        Ok(k) => k,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
