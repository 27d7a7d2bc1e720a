//! Tile World headless runner
//!
//! Generates a world, drives the player with a scripted walk, and prints a
//! summary. Rendering is left to a presentation layer; this binary exercises
//! the simulation core on its own.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tile_world::Settings;
use tile_world::consts::SIM_DT;
use tile_world::platform::TickDriver;
use tile_world::sim::{Block, PointerEvent, WorldState, is_grounded};

#[derive(Debug, Parser)]
#[command(author, version, about = "Tile World headless simulation runner")]
struct Cli {
    /// World seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 1200)]
    ticks: u32,

    /// JSON settings file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the default settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if cli.print_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    log::info!("Tile World (headless) starting...");
    let mut state = WorldState::new(settings, cli.seed).context("building world")?;
    log::info!("World initialized with seed: {}", cli.seed);

    run_script(&mut state, cli.ticks);
    print_summary(&state);
    Ok(())
}

/// Walk right, hop every couple of seconds, and till a patch of farmland early on
fn run_script(state: &mut WorldState, ticks: u32) {
    let mut driver = TickDriver::new();
    let tile = state.tile_size();

    // Farmland a few tiles ahead of the spawn point, one row above the surface
    let start_col = (state.player.body.center_x() / tile) as usize;
    for col in start_col + 4..start_col + 7 {
        if let Some(&surface) = state.heights.get(col) {
            let event = PointerEvent::place_at(
                col as f32 * tile + 1.0,
                (surface - 1) as f32 * tile + 1.0,
                tile_world::sim::HOTBAR
                    .iter()
                    .position(|b| *b == Block::Farmland)
                    .unwrap_or(0),
            );
            state.push_pointer(event);
        }
    }

    driver.keys.apply("ArrowRight", true);
    for t in 0..ticks {
        let jumping = t % 120 < 10;
        driver.keys.apply("ArrowUp", jumping);
        driver.update(state, SIM_DT);

        if t == 0 {
            let placed = state.last_edits.iter().filter(|e| e.applied()).count();
            log::info!("Placed {} farmland tiles", placed);
        }
    }
}

fn print_summary(state: &WorldState) {
    let body = &state.player.body;
    let surface: String = state
        .heights
        .iter()
        .map(|h| char::from(b'0' + (*h % 10) as u8))
        .collect();

    let mut stages = Vec::new();
    for (x, &surface) in state.heights.iter().enumerate() {
        if let Some(stage) = state.crop_stage(x as i32, surface - 1) {
            stages.push((x, stage));
        }
    }

    println!("seed:            {}", state.seed);
    println!("ticks:           {}", state.time_ticks);
    println!("surface (mod10): {}", surface);
    println!(
        "player:          ({:.1}, {:.1}) grounded={}",
        body.pos.x,
        body.pos.y,
        is_grounded(body, &state.grid, state.tile_size())
    );
    println!("camera offset:   {:.1}", state.camera.offset_x);
    println!(
        "day fraction:    {:.3} (darkness {:.2})",
        state.clock.fraction(),
        state.darkness()
    );
    println!("farmland stages: {:?}", stages);
    for (i, animal) in state.animals.iter().enumerate() {
        println!(
            "animal {}:        ({:.1}, {:.1}) color #{:06X}",
            i, animal.body.pos.x, animal.body.pos.y, animal.color
        );
    }
    println!(
        "blocks:          water={} wood={} leaves={} stone={}",
        state.grid.count(Block::Water),
        state.grid.count(Block::Wood),
        state.grid.count(Block::Leaves),
        state.grid.count(Block::Stone)
    );
}
