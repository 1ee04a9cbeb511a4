use anyhow::Result;
use clap::Parser;

use gridsnake::app::App;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Terminal snake on a numbered grid")]
struct Cli {
    /// Board size, in cells per side
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(5..=50))]
    size: u16,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value_t = 150)]
    tick_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut app = App::new(cli.size as usize, cli.tick_ms);
    app.run()
}
