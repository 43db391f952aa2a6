//! Commands a session accepts.

use core::str::FromStr;

/// An action the player can ask the pet to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Feed the pet.
    Eat,
    /// Put the pet to sleep.
    Sleep,
    /// Play with the pet.
    Play,
    /// Exercise the pet.
    Exercise,
    /// Clean up after the pet.
    Clean,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Eat,
        Self::Sleep,
        Self::Play,
        Self::Exercise,
        Self::Clean,
    ];

    /// The command's word, as typed by the player.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eat => "eat",
            Self::Sleep => "sleep",
            Self::Play => "play",
            Self::Exercise => "exercise",
            Self::Clean => "clean",
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The input named no known command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(word))
            .ok_or_else(|| UnknownCommand(word.to_owned()))
    }
}
