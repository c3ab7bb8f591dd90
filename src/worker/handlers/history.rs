use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
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

    if account.history.is_empty() {
        console.line(Tone::Notice, "No transactions yet.");
        return Ok(Outcome::Clean);
    }

    console.line(Tone::Heading, "Transaction history:");
    for entry in &account.history {
        console.line(Tone::Plain, &format!("- {entry}"));
    }
    Ok(Outcome::Clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::{ScriptedConsole, Tone};

    #[test]
    fn reports_empty_history() {
        let mut ledger = Ledger::new();
        ledger.create_account("alice", "1234".into()).unwrap();
        let mut session = Session::new();
        session.sign_in("alice".into());
        let mut console = ScriptedConsole::new();

        let outcome = handle(&ledger, &session, &mut console).unwrap();
        assert_eq!(outcome, Outcome::Clean);
        assert!(console.printed("No transactions yet."));
    }

    #[test]
    fn renders_entries_in_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.create_account("alice", "1234".into()).unwrap();
        let alice = ledger.get_mut("alice").unwrap();
        alice.history.push("Deposit 1,000".into());
        alice.history.push("Withdraw 200".into());
        alice.history.push("Transfer to bob 300".into());

        let mut session = Session::new();
        session.sign_in("alice".into());
        let mut console = ScriptedConsole::new();

        handle(&ledger, &session, &mut console).unwrap();

        let entries: Vec<&str> = console
            .lines
            .iter()
            .filter(|(tone, _)| *tone == Tone::Plain)
            .map(|(_, text)| text.as_str())
            .collect();
        assert_eq!(
            entries,
            vec![
                "- Deposit 1,000",
                "- Withdraw 200",
                "- Transfer to bob 300"
            ]
        );
    }

    #[test]
    fn rejects_without_a_session() {
        let ledger = Ledger::new();
        let mut console = ScriptedConsole::new();

        let err = handle(&ledger, &Session::new(), &mut console);
        assert!(matches!(err, Err(AppError::SessionRequired)));
    }
}
