//! Hex generator binary: prints generated tiles as JSON.
//!
//! Usage: cargo run --release --bin generate_hex -- [OPTIONS]
//!
//! Options:
//!   --seed <SEED>          Campaign seed (default: "seedscape")
//!   --id <ID>              Tile id (default: "q,r" of the coordinate)
//!   --q <Q> --r <R>        Axial coordinate; enables the terrain block
//!   --radius <N>           Dump every tile within N steps of (q, r)
//!   --biomes <A,B,..>      Comma-separated biome domain
//!   --features <A,B,..>    Comma-separated feature domain
//!   --encounters <A,B,..>  Comma-separated encounter domain

use std::process::ExitCode;

use seedscape::generation::axial_id;
use seedscape::{CategoryDomains, GenerationConfig, HexCoord, HexGenerator};

const DEFAULT_BIOMES: &str = "forest,desert,mountain,plains,swamp";
const DEFAULT_FEATURES: &str = "ruins,village,tower,river crossing";
const DEFAULT_ENCOUNTERS: &str = "none,bandits,wolves,travelers";

fn main() -> ExitCode {
    seedscape::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let seed = parse_str_arg(&args, "--seed").unwrap_or_else(|| "seedscape".to_string());
    let q = parse_i64_arg(&args, "--q");
    let r = parse_i64_arg(&args, "--r");
    let radius = parse_u32_arg(&args, "--radius");

    let domains = CategoryDomains::new(
        split_list(&parse_str_arg(&args, "--biomes").unwrap_or_else(|| DEFAULT_BIOMES.into())),
        split_list(&parse_str_arg(&args, "--features").unwrap_or_else(|| DEFAULT_FEATURES.into())),
        split_list(&parse_str_arg(&args, "--encounters").unwrap_or_else(|| DEFAULT_ENCOUNTERS.into())),
    );

    let generator = match HexGenerator::new(&GenerationConfig::new(seed, domains)) {
        Ok(g) => g,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let coord = match (q, r) {
        (Some(q), Some(r)) => Some(HexCoord::new(q, r)),
        _ => None,
    };

    let output = match radius {
        Some(radius) => {
            let center = coord.unwrap_or(HexCoord::ORIGIN);
            generator
                .generate_area(center, radius, chrono::Utc::now(), axial_id)
                .map(|area| {
                    let tiles: Vec<_> = area.into_iter().map(|(_, t)| t).collect();
                    serde_json::to_string_pretty(&tiles)
                })
        }
        None => {
            let id = parse_str_arg(&args, "--id")
                .or_else(|| coord.map(axial_id))
                .unwrap_or_else(|| "0,0".to_string());
            let tile = match coord {
                Some(c) => generator.generate_at(&id, c),
                None => generator.generate(&id),
            };
            tile.map(|t| serde_json::to_string_pretty(&t))
        }
    };

    match output {
        Ok(Ok(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            log::error!("Failed to serialize tiles: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn parse_i64_arg(args: &[String], flag: &str) -> Option<i64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
