use crate::{
    common::{command::Command, error::AppError},
    domain::ledger::Ledger,
    io::{console::Console, store::Store},
    worker::{
        handlers::{Outcome, balance, deposit, history, login, logout, transfer, withdraw},
        session::Session,
    },
};

/// Dispatches parsed commands to their handlers and persists the ledger
/// after every mutating one.
#[derive(Debug)]
pub struct Engine {
    store: Store,
    session: Session,
}

impl Engine {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn process<C: Console>(
        &mut self,
        ledger: &mut Ledger,
        console: &mut C,
        command: Command,
    ) -> Result<(), AppError> {
        tracing::debug!(?command, "dispatching");
        let outcome = match command {
            Command::Login { name } => {
                login::handle(ledger, &mut self.session, console, &name)?
            }
            Command::Logout => logout::handle(&mut self.session, console)?,
            Command::Deposit { amount } => {
                deposit::handle(ledger, &self.session, console, &amount)?
            }
            Command::Withdraw { amount } => {
                withdraw::handle(ledger, &self.session, console, &amount)?
            }
            Command::Transfer { target, amount } => {
                transfer::handle(ledger, &self.session, console, &target, &amount)?
            }
            Command::History => history::handle(ledger, &self.session, console)?,
            Command::Balance => balance::handle(ledger, &self.session, console)?,
        };

        if outcome == Outcome::Mutated {
            self.store.save(ledger)?;
        }
        Ok(())
    }
}
