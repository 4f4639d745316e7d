mod cli;
mod config;
mod logging;
mod runner;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    runner::run(app)
}
