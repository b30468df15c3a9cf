#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    About,
    Projects,
    Contact,
    Clear,
    Whoami,
    Date,
    Echo,
    Ls,
    History,
    Neofetch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandDef {
    pub name: &'static str,
    pub help: &'static str,
}

impl Command {
    /// Help-table order.
    pub const ALL: [Command; 11] = [
        Command::Help,
        Command::About,
        Command::Projects,
        Command::Contact,
        Command::Clear,
        Command::Whoami,
        Command::Date,
        Command::Echo,
        Command::Ls,
        Command::History,
        Command::Neofetch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Projects => "projects",
            Command::Contact => "contact",
            Command::Clear => "clear",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Echo => "echo",
            Command::Ls => "ls",
            Command::History => "history",
            Command::Neofetch => "neofetch",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Show available commands",
            Command::About => "Learn about Terry Djony",
            Command::Projects => "Show my real projects",
            Command::Contact => "Get contact information",
            Command::Clear => "Clear the terminal",
            Command::Whoami => "Display current user",
            Command::Date => "Show current date and time",
            Command::Echo => "Echo back the input",
            Command::Ls => "List available sections",
            Command::History => "Show command history",
            Command::Neofetch => "Show system information",
        }
    }

    /// Case-insensitive; arguments are never passed through here.
    pub fn parse(token: &str) -> Option<Command> {
        let token = token.to_lowercase();
        Command::ALL.into_iter().find(|c| c.name() == token)
    }

    pub fn def(self) -> CommandDef {
        CommandDef {
            name: self.name(),
            help: self.description(),
        }
    }
}

pub fn command_defs() -> Vec<CommandDef> {
    Command::ALL.into_iter().map(Command::def).collect()
}

/// Command names starting with `text`, compared case-insensitively.
pub fn complete_prefix(text: &str) -> Vec<&'static str> {
    let q = text.to_lowercase();
    Command::ALL
        .into_iter()
        .map(Command::name)
        .filter(|name| name.starts_with(&q))
        .collect()
}

#[cfg(test)]
#[path = "../tests/session/commands_tests.rs"]
mod tests;
