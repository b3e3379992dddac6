//! Monster placement driver
//!
//! Builds a small test level, fills it through the placement engine and
//! prints the result. Optionally asks the pathfinder for a route.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use log::{debug, info, warn};
use strum::IntoEnumIterator;

use dc_core::dungeon::{Branch, Coord, DungeonFeature, MapGrid, Place};
use dc_core::monster::{LiveMonster, MonsterRegistry, MonsterType};
use dc_core::pathfind::{MonsterPathfind, PathfindSubject};
use dc_core::place::{PlacementRequest, Proximity, mons_place};
use dc_core::{PlacementConfig, PlacementEvent, WorldContext};
use dc_data::Outfitter;

/// Place monsters on a generated level
#[derive(Parser, Debug)]
#[command(name = "dc-spawn")]
#[command(author, version, about = "Populate a test level with monsters", long_about = None)]
struct Args {
    /// Random seed
    #[arg(short = 's', long = "seed", default_value_t = 1)]
    seed: u64,

    /// Level width
    #[arg(long = "width", default_value_t = 60)]
    width: usize,

    /// Level height
    #[arg(long = "height", default_value_t = 24)]
    height: usize,

    /// Depth inside the branch
    #[arg(short = 'd', long = "depth", default_value_t = 1)]
    depth: i32,

    /// Branch (e.g. Dungeon, OrcishMines, Lair)
    #[arg(short = 'b', long = "branch", default_value = "Dungeon")]
    branch: Branch,

    /// Generate an Abyss level instead of a branch level
    #[arg(long = "abyss")]
    abyss: bool,

    /// Number of placement requests
    #[arg(short = 'n', long = "count", default_value_t = 10)]
    count: u32,

    /// Place this monster instead of random ones
    #[arg(short = 'm', long = "monster")]
    monster: Option<MonsterType>,

    /// Where arrivals go (Anywhere, NearStairs, CloseToPlayer, AwayFromPlayer)
    #[arg(short = 'p', long = "proximity", default_value = "Anywhere")]
    proximity: Proximity,

    /// Allow leaders to bring their bands
    #[arg(long = "bands")]
    bands: bool,

    /// Placement configuration file (JSON)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the placed monsters as JSON
    #[arg(long = "json")]
    json: bool,

    /// Find a path, written as `x,y:x,y`
    #[arg(long = "path")]
    path: Option<String>,

    /// List the monsters native to the chosen branch and exit
    #[arg(long = "list")]
    list: bool,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dc-spawn: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => PlacementConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlacementConfig::default(),
    };
    let registry = dc_data::registry()?;

    let place = if args.abyss {
        Place::abyss()
    } else {
        Place::new(args.branch, args.depth)
    };
    if args.list {
        list_natives(&registry, &place);
        return Ok(());
    }

    let map = build_level(args.width, args.height)?;
    let player = Coord::new(map.width() / 2, map.height() / 2);
    info!(
        "{}:{} (power {}), {}x{}, seed {}",
        place.branch,
        place.depth,
        place.absdepth(),
        map.width(),
        map.height(),
        args.seed
    );

    let mut world = WorldContext::with_config(map, place, player, args.seed, config);
    populate(&mut world, &registry, args)?;

    if args.json {
        let monsters: Vec<&LiveMonster> = world.monsters.iter().collect();
        println!("{}", serde_json::to_string_pretty(&monsters)?);
    } else {
        print_level(&world, &registry);
    }

    if let Some(spec) = &args.path {
        let (from, to) = parse_path(spec)?;
        print_path(&world, &registry, args.monster.unwrap_or(MonsterType::Rat), from, to)?;
    }
    Ok(())
}

fn list_natives(registry: &Outfitter, place: &Place) {
    for kind in MonsterType::iter() {
        let rarity = registry.rarity(kind, place);
        if rarity == 0 {
            continue;
        }
        let level = registry.level(kind, place);
        let name = registry.class(kind).map_or("?", |c| c.name);
        println!("{name:<28} level {level:>3} rarity {rarity:>3}");
    }
}

/// Open level with a few pools, a lava strip and a staircase in each corner
fn build_level(width: usize, height: usize) -> Result<MapGrid> {
    if width < 12 || height < 8 {
        bail!("level must be at least 12x8, got {width}x{height}");
    }
    let mut map = MapGrid::new(width, height);
    let (w, h) = (map.width(), map.height());
    map.fill_rect(Coord::new(1, 1), Coord::new(w - 2, h - 2), DungeonFeature::Floor);

    map.fill_rect(Coord::new(3, 3), Coord::new(6, 5), DungeonFeature::DeepWater);
    map.fill_rect(Coord::new(2, 2), Coord::new(7, 2), DungeonFeature::ShallowWater);
    map.fill_rect(Coord::new(w - 8, h - 4), Coord::new(w - 5, h - 4), DungeonFeature::Lava);

    // A short wall with a door through it
    let wall_x = w * 2 / 3;
    map.fill_rect(Coord::new(wall_x, 1), Coord::new(wall_x, h / 2), DungeonFeature::RockWall);
    map.set_feature(Coord::new(wall_x, h / 4), DungeonFeature::ClosedDoor);

    map.set_feature(Coord::new(1, 1), DungeonFeature::StairsUp);
    map.set_feature(Coord::new(w - 2, h - 2), DungeonFeature::StairsDown);
    map.set_feature(Coord::new(1, h - 2), DungeonFeature::StairsUp);
    map.set_feature(Coord::new(w - 2, 1), DungeonFeature::StairsDown);
    Ok(map)
}

fn populate(world: &mut WorldContext, registry: &Outfitter, args: &Args) -> Result<()> {
    for _ in 0..args.count {
        let mut request = match args.monster {
            Some(kind) => PlacementRequest::fixed(kind),
            None => PlacementRequest::random(),
        }
        .with_proximity(args.proximity);
        if args.bands {
            request = request.permit_bands();
        }

        match mons_place(world, registry, &request) {
            Ok(id) => debug!("placed {id}"),
            Err(err) if err.is_recoverable() => warn!("placement failed: {err}"),
            Err(err) => return Err(err).context("placement aborted"),
        }
    }

    for event in world.drain_events() {
        match event {
            PlacementEvent::ArrivedViaStairs { id, stair } => {
                info!("{id} arrived by the {stair} staircase")
            }
            PlacementEvent::PlayerShoved { id, from, to, .. } => {
                info!("{id} pushed the player from {from} to {to}")
            }
        }
    }
    Ok(())
}

fn print_level(world: &WorldContext, registry: &Outfitter) {
    let map = world.map.render(|pos| {
        if pos == world.player.pos {
            return Some('@');
        }
        let monster = world.monster_at(pos)?;
        registry
            .class(monster.kind)
            .and_then(|c| c.name.chars().next())
    });
    print!("{map}");

    for monster in world.monsters.iter() {
        let name = registry.class(monster.kind).map_or("?", |c| c.name);
        let mut line = format!(
            "{:>4} {:<24} {:<9} hp {:>3} {}",
            monster.id.to_string(),
            name,
            monster.pos.to_string(),
            monster.hp,
            monster.behaviour
        );
        if let Some(base) = monster.base_kind {
            line.push_str(&format!(" from {base}"));
        }
        if let Some(weapon) = monster.wielded.and_then(|i| monster.inventory.get(i)) {
            line.push_str(&format!(" wielding {}", weapon.name));
        }
        if let Some(leader) = monster.band_leader {
            line.push_str(&format!(" follows {leader}"));
        }
        println!("{line}");
    }
    println!("{} monsters", world.monsters.count());
}

fn parse_coord(text: &str) -> Result<Coord> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("expected x,y but got {text:?}"))?;
    let x = x.trim().parse().with_context(|| format!("bad x in {text:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in {text:?}"))?;
    Ok(Coord::new(x, y))
}

fn parse_path(spec: &str) -> Result<(Coord, Coord)> {
    let (from, to) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("expected x,y:x,y but got {spec:?}"))?;
    Ok((parse_coord(from)?, parse_coord(to)?))
}

fn print_path(
    world: &WorldContext,
    registry: &Outfitter,
    kind: MonsterType,
    from: Coord,
    to: Coord,
) -> Result<()> {
    let class = registry.require(kind)?;
    let subject = PathfindSubject {
        class,
        pos: from,
        friendly: false,
        native: class.spawn_in(world.place.branch).is_some(),
    };

    let mut pathfind = MonsterPathfind::new(&world.map, world.config.los_radius_sq);
    if !pathfind.init_pathfind(subject, to, true) {
        println!("no path for {} from {from} to {to}", class.name);
        return Ok(());
    }

    let path = pathfind.backtrack();
    let steps: Vec<String> = path.iter().map(Coord::to_string).collect();
    println!("path ({} cells): {}", path.len(), steps.join(" "));
    let waypoints: Vec<String> = pathfind.calc_waypoints().iter().map(Coord::to_string).collect();
    println!("waypoints: {}", waypoints.join(" "));
    Ok(())
}
