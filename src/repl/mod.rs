pub mod commands;
pub mod console;
pub mod input;

pub use commands::{Flow, MenuChoice};
pub use console::Console;
use log::{error, info, warn};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::storage::{EmployeeStore, JsonFile, Persistence, StoreError};

/// Starts an interactive session on stdin/stdout backed by the file at `path`
pub fn start_repl(name: String, path: PathBuf) {
    let persistence = JsonFile::new(path);
    info!(
        "Starting session `{name}` with data file `{}`",
        persistence.path().display()
    );
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_session(&persistence, stdin.lock(), stdout.lock()) {
        Ok(store) => info!("Session `{name}` closed with {} employees", store.len()),
        Err(e) => error!("Session `{name}` aborted; console failure: {e}"),
    }
}

/// Runs the menu loop until the user saves and exits or input ends.
///
/// The store is loaded from `persistence` first and saved back on the way
/// out. Returns the final state of the store.
pub fn run_session<P, R, W>(persistence: &P, input: R, output: W) -> io::Result<EmployeeStore>
where
    P: Persistence,
    R: BufRead,
    W: Write,
{
    let mut console = Console::new(input, output);
    let mut store = load_store(persistence, &mut console)?;

    loop {
        console.say(commands::MENU)?;

        let Some(choice) = console.prompt_parsed("Enter choice: ", input::parse_choice)? else {
            info!("Input closed; saving before exit");
            console.say("")?;
            MenuChoice::SaveAndExit.execute(&mut console, &mut store, persistence)?;
            break;
        };

        let command = match MenuChoice::try_from(choice) {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                console.say("Invalid choice!")?;
                continue;
            }
        };

        if command.execute(&mut console, &mut store, persistence)? == Flow::Exit {
            break;
        }
    }

    Ok(store)
}

fn load_store<P, R, W>(persistence: &P, console: &mut Console<R, W>) -> io::Result<EmployeeStore>
where
    P: Persistence,
    R: BufRead,
    W: Write,
{
    match persistence.load().and_then(EmployeeStore::from_records) {
        Ok(store) => Ok(store),
        Err(e) => {
            match &e {
                StoreError::MissingFile(_) => info!("Starting empty; {e}"),
                _ => warn!("Discarding unreadable data; {e}"),
            }
            console.say("No previous data found.")?;
            Ok(EmployeeStore::new())
        }
    }
}
