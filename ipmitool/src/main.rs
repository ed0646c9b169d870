mod adapter;
mod client;
mod commands;
mod settings;

use crate::adapter::IpmiCloudAdapter;
use crate::client::CloudClient;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use env_logger::Env;
use log::debug;
use std::{io, process};
use structs::error::IpmiError;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let matches = build_cli().get_matches();

    match run(&matches) {
        Ok(status) => process::exit(status),
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<i32, IpmiError> {
    let settings = settings::load()?;
    debug!("using cloud API at {}", settings.api_server);
    let adapter = IpmiCloudAdapter::new(host_of(matches), CloudClient::new(settings)?)?;
    let (subcmd, arg) = subcommand_of(matches);
    Ok(commands::run_cmd(&adapter, subcmd, arg, &mut io::stdout()))
}

fn value_of<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn host_of(matches: &ArgMatches) -> &str {
    value_of(matches, "host")
}

fn subcommand_of(matches: &ArgMatches) -> (&str, &str) {
    (value_of(matches, "subcmd"), value_of(matches, "arg"))
}

fn build_cli() -> Command {
    Command::new("ipmitool")
        .version("0.1")
        .about(
            "IPMI tool for the cloud. Implements just enough of the ipmitool commands \
             to treat a cloud VM like a regular server: power it on or off and change \
             its boot device. The last octet of the host address selects the VApp node.",
        )
        .arg(
            Arg::new("host")
                .short('H')
                .value_name("HOST")
                .num_args(0..=1)
                .help("IP of the VM to effect"),
        )
        .arg(
            Arg::new("username")
                .short('U')
                .num_args(0..=1)
                .help("Cloud username (ignored)"),
        )
        .arg(
            Arg::new("password")
                .short('P')
                .num_args(0..=1)
                .help("Cloud password (ignored)"),
        )
        .arg(
            Arg::new("interface")
                .short('I')
                .num_args(0..=1)
                .help("IPMI interface (ignored)"),
        )
        .arg(
            Arg::new("command")
                .required(true)
                .help("The IPMI command"),
        )
        .arg(
            Arg::new("subcmd")
                .required(true)
                .help("The IPMI subcommand"),
        )
        .arg(
            Arg::new("arg")
                .required(true)
                .help("The subcommand argument"),
        )
        .arg(
            Arg::new("options")
                .num_args(0..)
                .allow_hyphen_values(true)
                .help("Any subcommand options (ignored)"),
        )
}
