use crate::{
    common::{error::AppError, money::Money},
    domain::{account::Account, ledger::Ledger, transaction::Activity},
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
    amount: &str,
) -> Result<Outcome, AppError> {
    let user = session.require()?;
    let amount = Money::parse_amount(amount)?;

    let account = ledger
        .get_mut(user)
        .ok_or_else(|| AppError::Process(format!("no record for active session {user}")))?;
    apply_deposit(account, amount);

    console.line(Tone::Success, &format!("Deposit successful: {amount}"));
    if let Some(account) = ledger.get(user) {
        balance::render(account, console);
    }
    Ok(Outcome::Mutated)
}

fn apply_deposit(account: &mut Account, amount: Money) {
    account.balance += amount;
    account.history.push(Activity::Deposit { amount }.to_string());
}
