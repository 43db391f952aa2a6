//! Text rendering of the status panel.

use tamagotchi_types::PetStatus;

/// Width of the horizontal rules around the panel.
const RULE_WIDTH: usize = 30;

/// One bar block per this many stat points.
const POINTS_PER_BLOCK: u8 = 10;

/// Render `status` as the boxed status panel, or the farewell line if the
/// pet has died.
pub fn render_status(status: &PetStatus) -> String {
    if !status.alive {
        return format!("{} has passed away.", status.name);
    }

    let rule = "=".repeat(RULE_WIDTH);
    [
        String::new(),
        rule.clone(),
        format!(" Pet Status: {} ", status.name),
        rule.clone(),
        format!("Stage       : {}", status.stage),
        format!("Age         : {}", status.age),
        format!("Weight      : {}", status.weight),
        stat_line("Hunger", status.hunger),
        stat_line("Happiness", status.happiness),
        stat_line("Training", status.training),
        stat_line("Sickness", status.sickness),
        rule,
        String::new(),
    ]
    .join("\n")
}

/// A filled bar with one block per ten points.
pub fn bar(value: u8) -> String {
    "█".repeat(usize::from(value.checked_div(POINTS_PER_BLOCK).unwrap_or(0)))
}

fn stat_line(label: &str, value: u8) -> String {
    format!("{label:<12}: {} ({value}/100)", bar(value))
}

#[cfg(test)]
mod tests {
    use tamagotchi_types::{DeathCause, LifeStage, PetId};

    use super::*;

    fn status() -> PetStatus {
        PetStatus {
            id: PetId::new(),
            name: String::from("Rex"),
            species: String::from("Dog"),
            stage: LifeStage::Baby,
            age: 0,
            weight: 1,
            hunger: 50,
            happiness: 55,
            training: 0,
            sickness: 9,
            alive: true,
            cause_of_death: None,
        }
    }

    #[test]
    fn bars_scale_by_ten() {
        assert_eq!(bar(0), "");
        assert_eq!(bar(9), "");
        assert_eq!(bar(55), "█████");
        assert_eq!(bar(100), "██████████");
    }

    #[test]
    fn renders_panel() {
        let text = render_status(&status());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.get(1), Some(&"=".repeat(30).as_str()));
        assert_eq!(lines.get(2), Some(&" Pet Status: Rex "));
        assert!(text.contains("Stage       : Baby"));
        assert!(text.contains("Weight      : 1"));
        assert!(text.contains("Hunger      : █████ (50/100)"));
        assert!(text.contains("Happiness   : █████ (55/100)"));
        assert!(text.contains("Training    :  (0/100)"));
        assert!(text.contains("Sickness    :  (9/100)"));
    }

    #[test]
    fn dead_pet_has_passed_away() {
        let dead = PetStatus {
            alive: false,
            cause_of_death: Some(DeathCause::Sickness),
            ..status()
        };
        assert_eq!(render_status(&dead), "Rex has passed away.");
    }
}
