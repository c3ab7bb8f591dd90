use crate::{
    common::{command::Command, error::AppError},
    io::{
        console::{Console, Terminal, Tone},
        store::Store,
    },
    worker::engine::Engine,
};

const DEFAULT_DATA_FILE: &str = "data.json";

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let data_path = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    let store = Store::new(&data_path);
    // an unparseable ledger file is fatal: never run on unknown state
    let mut ledger = store.load()?;
    let mut engine = Engine::new(store);
    let mut console = Terminal::new();

    console.line(Tone::Info, "=== Teller ===");
    console.line(
        Tone::Plain,
        "commands: login <name>, deposit <amount>, withdraw <amount>, \
         transfer <target> <amount>, saldo, history, logout",
    );

    loop {
        let Some(line) = console.read_line(">>> ")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                console.line(Tone::Error, &message);
                continue;
            }
        };

        match engine.process(&mut ledger, &mut console, command) {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            Err(AppError::Persistence(reason)) => {
                // the operation already applied in memory; warn and keep going
                console.line(
                    Tone::Notice,
                    &format!(
                        "warning: could not persist the ledger ({reason}); \
                         in-memory state now differs from {data_path}"
                    ),
                );
            }
            Err(err) => console.line(Tone::Error, &err.to_string()),
        }
    }

    Ok(())
}
