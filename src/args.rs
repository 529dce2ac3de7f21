use bpaf::{construct, long, short, OptionParser, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub seed: Option<u64>,
    pub verbose: bool,
}

pub fn parser() -> OptionParser<Args> {
    let config = long("config")
        .help("JSON file overriding the tap thresholds and wallpaper count")
        .argument::<PathBuf>("PATH")
        .optional();
    let catalog = long("catalog")
        .help("Catalog listing to load before reading commands")
        .argument::<PathBuf>("PATH")
        .optional();
    let seed = long("seed")
        .help("Seed for the wallpaper picker")
        .argument::<u64>("SEED")
        .optional();
    let verbose = short('v').long("verbose").help("Log debug output").switch();

    construct!(Args {
        config,
        catalog,
        seed,
        verbose
    })
    .to_options()
    .descr("Picks random wallpapers and turns double taps into save requests")
}
