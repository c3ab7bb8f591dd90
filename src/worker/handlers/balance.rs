use crate::{
    common::error::AppError,
    domain::{account::Account, ledger::Ledger},
    io::console::{Console, Tone},
    worker::{handlers::Outcome, session::Session},
};

pub fn handle<C: Console>(
    ledger: &Ledger,
    session: &Session,
    console: &mut C,
) -> Result<Outcome, AppError> {
    let user = session.require()?;
    let account = ledger
        .get(user)
        .ok_or_else(|| AppError::Process(format!("no record for active session {user}")))?;

    render(account, console);
    Ok(Outcome::Clean)
}

/// Prints the account summary: account number, balance, and every owed
/// entry as aligned label/amount rows. Shared with login and the mutating
/// handlers, which all end by showing the summary.
pub fn render<C: Console>(account: &Account, console: &mut C) {
    let number = account.account_number.as_deref().unwrap_or("-");
    let mut rows: Vec<(String, String)> = vec![
        ("Account number".to_string(), number.to_string()),
        ("Balance".to_string(), account.balance.to_string()),
    ];
    for (name, amount) in &account.owed_to {
        rows.push((format!("Owed to {name}"), amount.to_string()));
    }
    for (name, amount) in &account.owed_from {
        rows.push((format!("Owed from {name}"), amount.to_string()));
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    console.line(Tone::Info, "Account summary:");
    for (label, value) in rows {
        console.line(Tone::Detail, &format!("  {label:<width$}  {value}"));
    }
}
