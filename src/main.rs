//! Darts Arcade entry point
//!
//! Headless front end: plays scripted games and exports board geometry for an
//! external renderer.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use darts_arcade::board::{BullDisc, LabelAnchor, WedgePolygon};
use darts_arcade::board::{boundary_radii, bull_geometry, generate_wedge_geometry, label_anchors};
use darts_arcade::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use darts_arcade::renderer::{board_mesh, vertex};
use darts_arcade::{BoardSpec, Settings, bearing_to_offset};
use glam::Vec2;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a full game from scripted aim points
    Play(#[clap(flatten)] PlayArg),
    /// Export wedge, bull and label geometry as JSON
    Geometry(#[clap(flatten)] GeometryArg),
    /// Export the colored board mesh as a raw vertex buffer
    Mesh(#[clap(flatten)] MeshArg),
}

#[derive(Default, Debug, Clone, clap::Args)]
struct PlayArg {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed, overriding the settings file
    #[arg(long)]
    seed: Option<u64>,
    /// Darts per game, overriding the settings file
    #[arg(long)]
    throws: Option<u32>,
    /// Maximum per-axis inaccuracy in pixels, overriding the settings file
    #[arg(long)]
    deviation: Option<u32>,
    /// Aim point as `X,Y` in surface pixels; repeated aims are cycled
    #[arg(long = "aim", value_parser = parse_aim)]
    aims: Vec<Vec2>,
    /// Print the hit history as JSON when the game ends
    #[arg(long)]
    json: bool,
}

#[derive(Default, Debug, Clone, clap::Args)]
struct GeometryArg {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
struct MeshArg {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: PathBuf,
    /// Convert positions to normalized device coordinates
    #[arg(long)]
    ndc: bool,
}

/// Everything a renderer needs to draw an empty board
#[derive(Debug, Serialize)]
struct GeometryExport {
    board: BoardSpec,
    wedges: Vec<WedgePolygon>,
    bulls: Vec<BullDisc>,
    boundaries: Vec<f32>,
    labels: Vec<LabelAnchor>,
}

fn parse_aim(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y `{y}`: {e}"))?;
    Ok(Vec2::new(x, y))
}

/// Center of the treble 20, the default target
fn default_aim(board: &BoardSpec) -> Vec2 {
    let rings = board.rings();
    let radius = board.ring_radius((rings.triple_inner + rings.triple_outer) / 2.0);
    board.center() + bearing_to_offset(0.0, radius)
}

fn run_play(arg: &PlayArg) -> Result<(), Box<dyn Error>> {
    let mut settings = Settings::load_or_default(arg.config.as_deref())?;
    if let Some(seed) = arg.seed {
        settings.seed = Some(seed);
    }
    if let Some(throws) = arg.throws {
        settings.throws_per_game = throws;
    }
    if let Some(deviation) = arg.deviation {
        settings.deviation = deviation;
    }

    let mut session = settings.new_session(rand::rng().random())?;
    let aims = if arg.aims.is_empty() {
        vec![default_aim(session.board())]
    } else {
        arg.aims.clone()
    };

    println!("{}", session.last_shot());
    for aim in aims.iter().cycle() {
        if session.throw_dart(*aim).is_none() {
            break;
        }
        println!("{}", session.last_shot());
        println!("{}", session.status_line());
    }
    if let Some(line) = session.game_over_line() {
        println!("{line}");
    }

    if arg.json {
        println!("{}", serde_json::to_string_pretty(session.hits())?);
    }
    Ok(())
}

fn run_geometry(arg: &GeometryArg) -> Result<(), Box<dyn Error>> {
    let board = load_board(arg.config.as_deref())?;
    let export = GeometryExport {
        wedges: generate_wedge_geometry(&board),
        bulls: bull_geometry(&board),
        boundaries: boundary_radii(&board),
        labels: label_anchors(&board),
        board,
    };
    let json = serde_json::to_string_pretty(&export)?;

    match &arg.output {
        Some(path) => {
            std::fs::write(path, json)?;
            log::info!(
                "Wrote {} wedges to {}",
                export.wedges.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_mesh(arg: &MeshArg) -> Result<(), Box<dyn Error>> {
    let board = load_board(arg.config.as_deref())?;
    let mut vertices = board_mesh(&board);
    if arg.ndc {
        vertex::surface_to_ndc(&mut vertices, SURFACE_WIDTH, SURFACE_HEIGHT);
    }
    std::fs::write(&arg.output, vertex::as_bytes(&vertices))?;
    log::info!(
        "Wrote {} vertices to {}",
        vertices.len(),
        arg.output.display()
    );
    Ok(())
}

fn load_board(config: Option<&Path>) -> Result<BoardSpec, Box<dyn Error>> {
    Ok(Settings::load_or_default(config)?.validate()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Darts Arcade starting...");

    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => run_play(&arg)?,
        Mode::Geometry(arg) => run_geometry(&arg)?,
        Mode::Mesh(arg) => run_mesh(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use darts_arcade::resolve;

    #[test]
    fn test_parse_aim() {
        assert_eq!(parse_aim("400,300"), Ok(Vec2::new(400.0, 300.0)));
        assert_eq!(parse_aim(" 12.5 , -3 "), Ok(Vec2::new(12.5, -3.0)));
        assert!(parse_aim("400").is_err());
        assert!(parse_aim("a,b").is_err());
    }

    #[test]
    fn test_default_aim_is_treble_twenty() {
        let board = BoardSpec::default();
        let result = resolve(default_aim(&board), &board);
        assert_eq!(result.label, "Triple 20");
    }

    #[test]
    fn test_cli_parses() {
        let args = CommandArgs::parse_from([
            "darts-arcade",
            "play",
            "--seed",
            "5",
            "--aim",
            "400,300",
            "--aim",
            "400,170",
        ]);
        match args.mode {
            Some(Mode::Play(arg)) => {
                assert_eq!(arg.seed, Some(5));
                assert_eq!(arg.aims.len(), 2);
            }
            other => panic!("unexpected mode {other:?}"),
        }
    }
}
