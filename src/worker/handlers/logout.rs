use crate::{
    common::error::AppError,
    io::console::{Console, Tone},
    worker::{handlers::Outcome, session::Session},
};

pub fn handle<C: Console>(session: &mut Session, console: &mut C) -> Result<Outcome, AppError> {
    match session.sign_out() {
        Some(name) => console.line(Tone::Info, &format!("Goodbye, {name}!")),
        None => console.line(Tone::Notice, "No active session."),
    }
    // logout persists unconditionally, even when the session changed nothing
    Ok(Outcome::Mutated)
}
