/// Represents one parsed input line, dispatched by the engine to its handler.
///
/// Amounts stay as raw strings here so the shared amount validation can
/// report `invalid amount` instead of the parser rejecting the whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { name: String },
    Logout,
    Deposit { amount: String },
    Withdraw { amount: String },
    Transfer { target: String, amount: String },
    History,
    Balance,
}

impl Command {
    /// Parses a single input line into a `Command`.
    ///
    /// Verbs are matched case-sensitively, one command per line; wrong
    /// argument counts and unknown verbs both produce a generic error
    /// message for the caller to display.
    ///
    /// # Examples
    ///
    /// ```
    /// use teller::common::command::Command;
    ///
    /// let cmd = Command::parse("deposit 500").unwrap();
    /// assert_eq!(cmd, Command::Deposit { amount: "500".into() });
    ///
    /// assert!(Command::parse("deposit").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Command, String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["login", name] => Ok(Command::Login {
                name: (*name).to_string(),
            }),
            ["logout"] => Ok(Command::Logout),
            ["deposit", amount] => Ok(Command::Deposit {
                amount: (*amount).to_string(),
            }),
            ["withdraw", amount] => Ok(Command::Withdraw {
                amount: (*amount).to_string(),
            }),
            ["transfer", target, amount] => Ok(Command::Transfer {
                target: (*target).to_string(),
                amount: (*amount).to_string(),
            }),
            ["history"] => Ok(Command::History),
            // `saldo` is the published verb; `balance` kept as an alias.
            ["saldo"] | ["balance"] => Ok(Command::Balance),
            _ => Err(format!("unrecognized command: {}", line.trim())),
        }
    }
}
