use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use splashwalls::catalog::parse_catalog;
use splashwalls::config::Config;
use splashwalls::gallery::Gallery;
use splashwalls::{args, json_runner};

fn main() -> Result<()> {
    let args = args::parser().run();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = Config::load(args.config.as_deref())?;

    let mut rng = match args.seed {
        Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
        None => Xoshiro256StarStar::from_entropy(),
    };

    let mut gallery = Gallery::new(config);

    if let Some(path) = &args.catalog {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog from {}", path.display()))?;
        let catalog = parse_catalog(&json)?;
        info!("loaded {} catalog entries from {}", catalog.len(), path.display());

        gallery.load(&mut rng, &catalog)?;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    json_runner::run(&mut gallery, &mut rng, stdin.lock(), stdout.lock())
}
