use crate::{
    common::{error::AppError, money::Money},
    domain::{account::Notification, ledger::Ledger, transaction::Activity},
    io::console::{Console, Tone},
    worker::{
        handlers::{Outcome, balance},
        session::Session,
    },
};

pub fn handle<C: Console>(
    ledger: &mut Ledger,
    session: &Session,
    console: &mut C,
    target: &str,
    amount: &str,
) -> Result<Outcome, AppError> {
    let user = session.require()?;
    // malformed amounts and self-transfers are both just "transfer failed"
    let amount = Money::parse_amount(amount).map_err(|_| AppError::InvalidTransfer)?;
    if target == user {
        return Err(AppError::InvalidTransfer);
    }

    let sender = ledger
        .get(user)
        .ok_or_else(|| AppError::Process(format!("no record for active session {user}")))?;
    if !sender.can_cover(amount) {
        return Err(AppError::InsufficientFunds);
    }

    // nothing below runs, and nothing mutates, without an explicit yes
    let reply = console.prompt(&format!("Transfer {amount} to {target}? (y/n): "))?;
    if !is_affirmative(&reply) {
        console.line(Tone::Notice, "Transfer cancelled.");
        return Ok(Outcome::Clean);
    }

    // recipient creation is folded into the transfer
    if !ledger.contains(target) {
        let pin = console.prompt(&format!("Create a new PIN for account {target}: "))?;
        let account = ledger.create_account(target, pin)?;
        let number = account.account_number.as_deref().unwrap_or("-").to_string();
        console.line(
            Tone::Success,
            &format!("Account {target} created, account number {number}"),
        );
    }

    apply_transfer(ledger, user, target, amount)?;

    console.line(Tone::Success, &format!("Transferred {amount} to {target}"));
    if let Some(account) = ledger.get(user) {
        balance::render(account, console);
    }
    Ok(Outcome::Mutated)
}

fn apply_transfer(
    ledger: &mut Ledger,
    user: &str,
    target: &str,
    amount: Money,
) -> Result<(), AppError> {
    let sender = ledger
        .get_mut(user)
        .ok_or_else(|| AppError::Process(format!("no record for active session {user}")))?;
    sender.balance -= amount;
    sender
        .history
        .push(Activity::TransferOut { to: target, amount }.to_string());

    let recipient = ledger
        .get_mut(target)
        .ok_or_else(|| AppError::Process(format!("transfer recipient {target} vanished")))?;
    recipient.balance += amount;
    recipient
        .history
        .push(Activity::TransferIn { from: user, amount }.to_string());
    recipient.notifications.push(Notification {
        from: user.to_string(),
        amount,
    });
    Ok(())
}

fn is_affirmative(reply: &str) -> bool {
    matches!(reply.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::ScriptedConsole;

    fn active_session(ledger: &mut Ledger, name: &str, balance: i64) -> Session {
        ledger.create_account(name, "1234".into()).unwrap();
        ledger.get_mut(name).unwrap().balance = Money::new(balance);
        let mut session = Session::new();
        session.sign_in(name.into());
        session
    }

    #[test]
    fn transfer_moves_funds_and_notifies_an_existing_recipient() {
        let mut ledger = Ledger::new();
        let session = active_session(&mut ledger, "alice", 1_000);
        ledger.create_account("bob", "5678".into()).unwrap();
        let mut console = ScriptedConsole::with_inputs(&["y"]);

        let outcome = handle(&mut ledger, &session, &mut console, "bob", "300").unwrap();
        assert_eq!(outcome, Outcome::Mutated);

        let alice = ledger.get("alice").unwrap();
        assert_eq!(alice.balance, Money::new(700));
        assert_eq!(alice.history, vec!["Transfer to bob 300".to_string()]);

        let bob = ledger.get("bob").unwrap();
        assert_eq!(bob.balance, Money::new(300));
        assert_eq!(bob.history, vec!["Received from alice 300".to_string()]);
        assert_eq!(
            bob.notifications,
            vec![Notification {
                from: "alice".into(),
                amount: Money::new(300),
            }]
        );
    }

    #[test]
    fn transfer_conserves_the_total_across_both_accounts() {
        let mut ledger = Ledger::new();
        let session = active_session(&mut ledger, "alice", 1_000);
        ledger.create_account("bob", "5678".into()).unwrap();
        ledger.get_mut("bob").unwrap().balance = Money::new(400);
        let mut console = ScriptedConsole::with_inputs(&["yes"]);

        handle(&mut ledger, &session, &mut console, "bob", "250").unwrap();

        let total = ledger.get("alice").unwrap().balance + ledger.get("bob").unwrap().balance;
        assert_eq!(total, Money::new(1_400));
    }

    #[test]
    fn transfer_creates_unknown_recipients_with_a_prompted_pin() {
        let mut ledger = Ledger::new();
        let session = active_session(&mut ledger, "alice", 1_000);
        // confirmation, then the new recipient's PIN
        let mut console = ScriptedConsole::with_inputs(&["y", "9999"]);

        handle(&mut ledger, &session, &mut console, "bob", "300").unwrap();

        let bob = ledger.get("bob").unwrap();
        assert_eq!(bob.pin, "9999");
        assert_eq!(bob.balance, Money::new(300));
        assert!(bob.account_number.is_some());
        assert_eq!(bob.notifications.len(), 1);
    }

    #[test]
    fn test_handle_rejects_self_transfer() {
        let mut ledger = Ledger::new();
        let session = active_session(&mut ledger, "alice", 1_000);
        let mut console = ScriptedConsole::new();

        let err = handle(&mut ledger, &session, &mut console, "alice", "100");
        assert!(matches!(err, Err(AppError::InvalidTransfer)));
        assert_eq!(ledger.get("alice").unwrap().balance, Money::new(1_000));
        assert!(console.prompts.is_empty(), "no confirmation for a rejected transfer");
    }

    #[test]
    fn test_handle_rejects_invalid_amount_as_generic_failure() {
        let mut ledger = Ledger::new();
        let session = active_session(&mut ledger, "alice", 1_000);
        let mut console = ScriptedConsole::new();

        for input in ["abc", "0", "-50"] {
            let err = handle(&mut ledger, &session, &mut console, "bob", input);
            assert!(matches!(err, Err(AppError::InvalidTransfer)), "input {input}");
        }
        assert!(!ledger.contains("bob"));
    }

    #[test]
    fn test_handle_reports_insufficient_funds_distinctly() {
        let mut ledger = Ledger::new();
        let session = active_session(&mut ledger, "alice", 100);
        let mut console = ScriptedConsole::new();

        let err = handle(&mut ledger, &session, &mut console, "bob", "300");
        assert!(matches!(err, Err(AppError::InsufficientFunds)));
        assert_eq!(ledger.get("alice").unwrap().balance, Money::new(100));
        assert!(!ledger.contains("bob"), "recipient must not be created");
    }

    #[test]
    fn declined_confirmation_aborts_with_no_state_change() {
        let mut ledger = Ledger::new();
        let session = active_session(&mut ledger, "alice", 1_000);

        for reply in ["n", "no", "", "maybe"] {
            let mut console = ScriptedConsole::with_inputs(&[reply]);
            let outcome = handle(&mut ledger, &session, &mut console, "bob", "300").unwrap();
            assert_eq!(outcome, Outcome::Clean, "reply {reply:?}");
            assert!(console.printed("Transfer cancelled."));
        }

        assert_eq!(ledger.get("alice").unwrap().balance, Money::new(1_000));
        assert!(!ledger.contains("bob"));
    }

    #[test]
    fn rejects_without_a_session() {
        let mut ledger = Ledger::new();
        let mut console = ScriptedConsole::new();

        let err = handle(&mut ledger, &Session::new(), &mut console, "bob", "100");
        assert!(matches!(err, Err(AppError::SessionRequired)));
    }
}
