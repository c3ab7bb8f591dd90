use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
    io::console::{Console, Tone},
    worker::{
        handlers::{Outcome, balance},
        session::Session,
    },
};

const MAX_PIN_ATTEMPTS: usize = 3;

pub fn handle<C: Console>(
    ledger: &mut Ledger,
    session: &mut Session,
    console: &mut C,
    name: &str,
) -> Result<Outcome, AppError> {
    // single session slot: switching accounts goes through logout
    if session.is_active() {
        return Err(AppError::SessionActive);
    }

    let mut mutated = false;
    if ledger.contains(name) {
        authenticate(ledger, console, name)?;
    } else {
        let pin = console.prompt("Create a new PIN for this account: ")?;
        let account = ledger.create_account(name, pin)?;
        let number = account.account_number.as_deref().unwrap_or("-").to_string();
        console.line(
            Tone::Success,
            &format!("Account created, your account number is {number}"),
        );
        mutated = true;
    }

    session.sign_in(name.to_string());
    console.line(Tone::Info, &format!("Hello, {name}!"));

    if drain_notifications(ledger, console, name)? > 0 {
        mutated = true;
    }

    let account = ledger
        .get(name)
        .ok_or_else(|| AppError::Process(format!("no record for active session {name}")))?;
    balance::render(account, console);

    Ok(if mutated {
        Outcome::Mutated
    } else {
        Outcome::Clean
    })
}

fn authenticate<C: Console>(ledger: &Ledger, console: &mut C, name: &str) -> Result<(), AppError> {
    let expected = ledger
        .get(name)
        .map(|account| account.pin.clone())
        .ok_or_else(|| AppError::Process(format!("no record for login target {name}")))?;

    for _ in 0..MAX_PIN_ATTEMPTS {
        let pin = console.prompt("Enter PIN: ")?;
        if pin == expected {
            return Ok(());
        }
        console.line(Tone::Error, "Wrong PIN.");
    }
    // no lockout persists beyond this attempt sequence
    Err(AppError::Authentication)
}

/// Moves every pending notification out of the record and displays it.
/// Each one is consumed exactly once; a non-empty drain is a mutation the
/// engine must persist.
fn drain_notifications<C: Console>(
    ledger: &mut Ledger,
    console: &mut C,
    name: &str,
) -> Result<usize, AppError> {
    let account = ledger
        .get_mut(name)
        .ok_or_else(|| AppError::Process(format!("no record for active session {name}")))?;

    let pending = std::mem::take(&mut account.notifications);
    for note in &pending {
        console.line(
            Tone::Notice,
            &format!("You received {} from {}", note.amount, note.from),
        );
    }
    Ok(pending.len())
}
