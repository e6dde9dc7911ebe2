//! Parsing of REPL lines into player inputs.
use anyhow::{Context, Result, bail};
use nation_core::{Command, Sector, TradeKind};

/// One line typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Status,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  status              show the nation
  next                advance to the next day
  invest <sector>     agriculture | infrastructure | education | healthcare | diplomacy
  food                distribute food to every group
  trade <kind>        food_for_wealth | wealth_for_food | materials_for_technology | wealth_for_materials
  choose <n>          pick option n of the current event
  reset               start a new game
  help                show this list
  quit                leave";

/// Parses a trimmed, non-empty line.
pub fn parse(line: &str) -> Result<Input> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        bail!("Type a command, or `help` for the list.");
    };
    let argument = words.next();
    if words.next().is_some() {
        bail!("Too many arguments for `{verb}`.");
    }

    let verb = verb.to_ascii_lowercase();
    let input = match (verb.as_str(), argument) {
        ("status", None) => Input::Status,
        ("next" | "n", None) => Input::Command(Command::advance_day()),
        ("food", None) => Input::Command(Command::distribute_food()),
        ("reset", None) => Input::Reset,
        ("help" | "?", None) => Input::Help,
        ("quit" | "exit" | "q", None) => Input::Quit,
        ("invest", Some(sector)) => {
            let sector = sector
                .parse::<Sector>()
                .with_context(|| format!("Unknown sector `{sector}`."))?;
            Input::Command(Command::invest(sector))
        }
        ("trade", Some(kind)) => {
            let kind = kind
                .parse::<TradeKind>()
                .with_context(|| format!("Unknown trade `{kind}`."))?;
            Input::Command(Command::trade(kind))
        }
        ("choose", Some(number)) => {
            let number = number
                .parse::<usize>()
                .ok()
                .filter(|number| *number > 0)
                .with_context(|| format!("`{number}` is not an option number."))?;
            Input::Command(Command::resolve_choice(number - 1))
        }
        ("invest" | "trade" | "choose", None) => bail!("`{verb}` needs an argument."),
        ("status" | "next" | "food" | "reset" | "help" | "quit", Some(_)) => {
            bail!("`{verb}` takes no argument.")
        }
        _ => bail!("Unknown command `{verb}`. Type `help` for the list."),
    };

    Ok(input)
}

/// The prompt text that issues `command`.
pub fn describe(command: &Command) -> String {
    match command {
        Command::AdvanceDay(_) => "next".to_owned(),
        Command::Invest(action) => format!("invest {}", action.sector),
        Command::DistributeFood(_) => "food".to_owned(),
        Command::Trade(action) => format!("trade {}", action.kind),
        Command::ResolveChoice(action) => format!("choose {}", action.index + 1),
    }
}
