//! The numbered action menu.

use tamagotchi_core::{Command, Input};

/// Menu shown before every choice.
pub const MENU: &str = "\
Choose an action for your pet:
1. Eat
2. Sleep
3. Play
4. Exercise
5. Make sound
6. Clean
7. Quit";

/// Prompt printed after the menu.
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Map a line typed by the player to an [`Input`].
///
/// Accepts the menu numbers and the command words (`eat`, `clean`, ...),
/// plus `sound` and `quit`. Anything else is [`Input::Unrecognized`].
pub fn parse_choice(raw: &str) -> Input {
    let choice = raw.trim();
    match choice {
        "1" => Input::Command(Command::Eat),
        "2" => Input::Command(Command::Sleep),
        "3" => Input::Command(Command::Play),
        "4" => Input::Command(Command::Exercise),
        "5" => Input::MakeSound,
        "6" => Input::Command(Command::Clean),
        "7" => Input::Quit,
        _ if choice.eq_ignore_ascii_case("sound") => Input::MakeSound,
        _ if choice.eq_ignore_ascii_case("quit") => Input::Quit,
        _ => choice
            .parse::<Command>()
            .map_or_else(|_| Input::Unrecognized(choice.to_owned()), Input::Command),
    }
}
