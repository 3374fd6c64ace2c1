use std::path::PathBuf;

use clap::Parser;
use employee_db::start_repl;
use env_logger::Env;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional session name, used in logs
    name: Option<String>,

    /// Optionally, sets the employee data file to use
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let name = cli.name.unwrap_or("employees".into());
    let path = cli.file.unwrap_or("employees.json".into());

    start_repl(name, path)
}
