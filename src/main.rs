mod categorize;
mod import;
mod models;
mod report;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run::interactive(),
        _ => run::from_path(&args[1]),
    }
}
