use clap::{Command, arg};

pub(crate) fn build_cli() -> Command {
    Command::new("ippool")
        .version("0.1")
        .about("Track pools of IPv4 address ranges")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .subcommand(
            Command::new("show")
                .about("List the ranges of a pool")
                .arg(arg!(<POOL> "Pool file to read")),
        )
        .subcommand(
            Command::new("find")
                .about("Find the range containing an address")
                .arg(arg!(<POOL> "Pool file to read"))
                .arg(arg!(<ADDRESS> "Dotted-quad address to look up")),
        )
        .subcommand(
            Command::new("diff")
                .about("Show the ranges of OLD no longer covered by NEW")
                .arg(arg!(<OLD> "Old pool file"))
                .arg(arg!(<NEW> "New pool file")),
        )
}
