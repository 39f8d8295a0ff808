mod args;
mod pool_file;

use crate::pool_file::load_pool;
use anyhow::{Context, Result};
use clap::ArgMatches;
use ippool_lib::{format_address, removed_ranges, try_parse_address};
use itertools::Itertools;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();
    let matches = args::build_cli().get_matches();
    match matches.subcommand() {
        Some(("show", sub)) => show(sub),
        Some(("find", sub)) => find(sub),
        Some(("diff", sub)) => diff(sub),
        Some((other, _)) => panic!("Unknown subcommand {}", other),
        None => unreachable!("a subcommand is required"),
    }
}

fn path_arg<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path> {
    Ok(Path::new(
        args.get_one::<String>(id)
            .with_context(|| format!("missing {}", id))?,
    ))
}

fn show(args: &ArgMatches) -> Result<()> {
    let pool = load_pool(path_arg(args, "POOL")?)?;
    for range in pool.ranges() {
        println!("{}  ({} addresses)", range, range.count());
    }
    log::info!("{} ranges in total", pool.len());
    Ok(())
}

fn find(args: &ArgMatches) -> Result<()> {
    let pool = load_pool(path_arg(args, "POOL")?)?;
    let raw = args
        .get_one::<String>("ADDRESS")
        .context("missing ADDRESS")?;
    let addr = try_parse_address(raw)
        .with_context(|| format!("invalid address {:?}", raw))?;
    match pool.find_range(addr) {
        Some(range) => println!("{} is in {}", format_address(addr), range),
        None => println!("{} is not in the pool", format_address(addr)),
    }
    Ok(())
}

fn diff(args: &ArgMatches) -> Result<()> {
    let old = load_pool(path_arg(args, "OLD")?)?;
    let new = load_pool(path_arg(args, "NEW")?)?;
    let gone = removed_ranges(&old, &new);
    if gone.is_empty() {
        println!("no ranges removed");
    } else {
        println!("{}", gone.ranges().join("\n"));
    }
    Ok(())
}
