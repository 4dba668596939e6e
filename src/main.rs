use clap::{arg, command, ArgAction};
use colored::Colorize;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use optset::FlagSet;

fn main() {
    let args = command!()
        .arg(
            arg!(-u --unsorted "Visit flags in definition order instead of lexicographical order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-s --set <"NAME=VALUE"> "Set a flag before visiting (repeatable)")
                .action(ArgAction::Append),
        )
        .get_matches();

    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init failed");

    let mut flags = FlagSet::new();
    for (name, default, help) in [
        ("verbose", "false", "Print more info"),
        ("timeout", "30", "Seconds to wait before giving up"),
        ("output", "-", "Write results to this file"),
    ] {
        flags
            .define(name, default, help)
            .expect("demo flag names are distinct");
    }

    if args.get_flag("unsorted") {
        flags.sort_flags(false);
    }

    if let Some(pairs) = args.get_many::<String>("set") {
        for pair in pairs {
            let (name, value) = pair.split_once('=').unwrap_or((pair.as_str(), "true"));

            if let Err(e) = flags.set(name, value) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    println!("{}", "All flags:".bright_yellow());
    flags.visit_all(|flag| {
        println!(
            "  --{}={}  {}",
            flag.name().bright_green(),
            flag.value(),
            flag.help()
        );
    });

    println!("\n{}", "Set flags:".bright_yellow());
    flags.visit(|flag| {
        println!("  --{}={}", flag.name().bright_green(), flag.value());
    });
}
