//! Console runner for region claims.
//!
//! This binary:
//! 1. Loads the region file (`REGIONS_FILE`, default `regions.json`)
//! 2. Builds the region index (`REGION_CELL_SHIFT`, `REGION_MAX_CELLS`)
//! 3. Reads commands from stdin until `quit`
//!
//! Commands:
//! - `query <x> <y> <z> [cached]` - Regions containing a point
//! - `overlaps <id>` - Regions overlapping a region
//! - `define <id> <x1> <y1> <z1> <x2> <y2> <z2> [parent]` - Add a cuboid region
//! - `remove <id>` - Remove a region (children are kept)
//! - `info <id>` - Show a region
//! - `list` - List region ids
//! - `addmember`, `addowner`, `removemember`, `removeowner` `<id> <names...>`
//! - `save` - Write the region file
//! - `q` or `quit` - Quit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use eyre::{WrapErr, bail, eyre};
use region_commands::{Actor, CommandConfig, MemberCommands};
use region_domain::{Region, RegionData, Regions};
use region_geom::{BlockPos, Cuboid, Point};
use region_index::IndexConfig;
use region_persist::{JsonFileSink, RegionSink};
use tracing::{error, info};

/// Console issuer: holds every permission.
struct Console {
    name: String,
    groups: Vec<String>,
}

impl Actor for Console {
    fn name(&self) -> &str {
        &self.name
    }

    fn groups(&self) -> &[String] {
        &self.groups
    }

    fn has_permission(&self, _key: &str) -> bool {
        true
    }
}

/// Commands handled by the runner itself; anything else goes to the member commands.
enum Command<'a> {
    Query(Point, bool),
    Overlaps(&'a str),
    Define(&'a str, BlockPos, BlockPos, Option<&'a str>),
    Remove(&'a str),
    Info(&'a str),
    List,
    Save,
    Help,
    Quit,
    Member(&'a str, Vec<&'a str>),
}

fn parse<T: std::str::FromStr>(word: Option<&&str>, what: &str) -> eyre::Result<T> {
    let word = word.ok_or_else(|| eyre!("missing {what}"))?;
    word.parse().map_err(|_| eyre!("invalid {what}: {word}"))
}

fn parse_command<'a>(words: &[&'a str]) -> eyre::Result<Command<'a>> {
    let Some((&head, rest)) = words.split_first() else {
        return Ok(Command::Help);
    };

    let cmd = match head {
        "query" => Command::Query(
            Point::new(
                parse(rest.first(), "x")?,
                parse(rest.get(1), "y")?,
                parse(rest.get(2), "z")?,
            ),
            rest.get(3) == Some(&"cached"),
        ),
        "overlaps" => Command::Overlaps(rest.first().copied().ok_or_else(|| eyre!("missing id"))?),
        "define" => {
            if rest.len() < 7 {
                bail!("usage: define <id> <x1> <y1> <z1> <x2> <y2> <z2> [parent]");
            }
            let a = BlockPos::new(
                parse(rest.get(1), "x1")?,
                parse(rest.get(2), "y1")?,
                parse(rest.get(3), "z1")?,
            );
            let b = BlockPos::new(
                parse(rest.get(4), "x2")?,
                parse(rest.get(5), "y2")?,
                parse(rest.get(6), "z2")?,
            );
            Command::Define(rest[0], a, b, rest.get(7).copied())
        }
        "remove" => Command::Remove(rest.first().copied().ok_or_else(|| eyre!("missing id"))?),
        "info" => Command::Info(rest.first().copied().ok_or_else(|| eyre!("missing id"))?),
        "list" => Command::List,
        "save" => Command::Save,
        "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        other => Command::Member(other, rest.to_vec()),
    };
    Ok(cmd)
}

#[allow(clippy::print_stdout)]
fn print_help() {
    println!("Commands:");
    println!("  query <x> <y> <z> [cached]");
    println!("  overlaps <id>");
    println!("  define <id> <x1> <y1> <z1> <x2> <y2> <z2> [parent]");
    println!("  remove <id>");
    println!("  info <id>");
    println!("  list");
    println!("  addmember | addowner | removemember | removeowner <id> <names...>");
    println!("  save");
    println!("  quit");
}

fn ids(regions: &[Arc<Region>]) -> String {
    let mut ids: Vec<_> = regions.iter().map(|r| r.name()).collect();
    ids.sort_unstable();
    ids.join(", ")
}

#[allow(clippy::print_stdout)]
fn show(region: &Region) {
    let data = region.payload();
    let bounds = region.geometry().bounds();
    println!("{}", region.name());
    println!("  parent:  {}", region.parent().unwrap_or("-"));
    println!("  cached:  {}", region.should_cache());
    println!("  bounds:  {:?} .. {:?}", bounds.min, bounds.max);
    println!("  volume:  {}", region.geometry().volume());
    println!("  owners:  {:?}", data.owners.read().players().collect::<Vec<_>>());
    println!("  members: {:?}", data.members.read().players().collect::<Vec<_>>());
    for (name, value) in data.flags.read().iter() {
        println!("  flag {name}: {value:?}");
    }
}

#[allow(clippy::print_stdout)]
fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("region_runner=info".parse()?)
                .add_directive("region_persist=info".parse()?),
        )
        .init();

    let path = std::env::var("REGIONS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("regions.json"));
    let sink = JsonFileSink::new(path);

    let regions = Regions::with_config(IndexConfig::from_env());
    regions.add(
        sink.load()
            .wrap_err_with(|| format!("loading {}", sink.path().display()))?,
    );
    info!("Region index ready with {} regions", regions.len());

    let console = Console {
        name: std::env::var("RUNNER_ACTOR").unwrap_or_else(|_| "console".to_owned()),
        groups: Vec::new(),
    };
    let commands = MemberCommands::new(&regions, &sink, CommandConfig::from_env());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        let cmd = match parse_command(&words) {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match cmd {
            Command::Query(point, cached) => {
                println!("{}", ids(&regions.query_contains_with(point, cached)));
            }
            Command::Overlaps(id) => match regions.get(id) {
                Some(region) => println!("{}", ids(&regions.query_overlapping(&region))),
                None => println!("Could not find a region by that ID."),
            },
            Command::Define(id, a, b, parent) => {
                if regions.contains(id) {
                    println!("A region with that name already exists.");
                    continue;
                }
                let mut region = match Region::new(id, Cuboid::new(a, b), RegionData::default()) {
                    Ok(region) => region,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                if let Some(parent) = parent {
                    region = region.with_parent(parent);
                }
                regions.add([region]);
                println!("Region '{id}' defined.");
            }
            Command::Remove(id) => {
                if regions.contains(id) {
                    regions.remove([id]);
                    println!("Region '{id}' removed.");
                } else {
                    println!("Could not find a region by that ID.");
                }
            }
            Command::Info(id) => match regions.get(id) {
                Some(region) => show(&region),
                None => println!("Could not find a region by that ID."),
            },
            Command::List => println!("{}", ids(&regions.enumerate())),
            Command::Save => {
                if let Err(e) = sink.save(&regions.enumerate()) {
                    error!("Failed to write regions: {}", e);
                }
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Member(name, args) => match commands.run(&console, name, &args) {
                Ok(reply) => println!("{reply}"),
                Err(e) => println!("{e}"),
            },
        }
    }

    info!("Shutting down");
    Ok(())
}
