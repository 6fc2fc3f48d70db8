//! Text session driver.
//!
//! Reads menu answers from any `BufRead`, writes the transcript to any
//! `Write`, and delegates every rule to the engine modules. The binary runs
//! it over stdin/stdout; tests run it over in-memory buffers.

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::{debug, warn};

use crate::character::Player;
use crate::combat::{spawn_enemy, CombatAction, CombatEvent, Encounter, EnemyTemplate};
use crate::core::constants::{DISPLAY_MAX_HEALTH, RECOVERY_HEALTH, RECOVERY_ITEM};
use crate::input::{is_yes, prompt_line, MenuChoice};
use crate::town::Town;
use crate::world::WorldConfig;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Defeated,
    InputClosed,
}

/// How a single exploration ended.
enum ExploreResult {
    Survived,
    Defeated,
    InputClosed,
}

pub struct Session<R: Rng> {
    player: Player,
    enemies: Vec<EnemyTemplate>,
    town: Town,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: &WorldConfig, rng: R) -> Self {
        Self {
            player: config.new_player(),
            enemies: config.enemies.clone(),
            town: config.town.clone(),
            rng,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Runs the main menu until the player quits, is defeated, or input ends.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<SessionEnd> {
        while self.player.is_alive() {
            let Some(line) = prompt_line(
                input,
                out,
                "Do you want to (1) explore, (2) enter shop, or (3) quit? ",
            )?
            else {
                return Ok(SessionEnd::InputClosed);
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Explore) => match self.explore(input, out)? {
                    ExploreResult::Survived => {}
                    ExploreResult::Defeated => {
                        writeln!(out, "Thank you for playing!")?;
                        return Ok(SessionEnd::Defeated);
                    }
                    ExploreResult::InputClosed => return Ok(SessionEnd::InputClosed),
                },
                Ok(MenuChoice::Shop) => {
                    if !self.shop(input, out)? {
                        return Ok(SessionEnd::InputClosed);
                    }
                }
                Ok(MenuChoice::Quit) => {
                    writeln!(out, "Thank you for playing!")?;
                    return Ok(SessionEnd::Quit);
                }
                Err(err) => {
                    warn!(%err, "rejected menu choice");
                    writeln!(out, "Invalid choice. Please choose again.")?;
                }
            }
        }

        Ok(SessionEnd::Defeated)
    }

    fn explore<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<ExploreResult> {
        let Some(enemy) = spawn_enemy(&self.enemies, &mut self.rng) else {
            warn!("enemy roster is empty");
            writeln!(out, "The wilds are quiet. Nothing to fight here.")?;
            return Ok(ExploreResult::Survived);
        };
        debug!(enemy = %enemy.name, "encounter started");
        writeln!(out, "A wild {} appears!", enemy.name)?;

        let mut encounter = Encounter::new(enemy);
        loop {
            writeln!(
                out,
                "Enemy health: {}/{max}, Your health: {}/{max}",
                encounter.enemy().health,
                self.player.health,
                max = DISPLAY_MAX_HEALTH,
            )?;

            let Some(line) = prompt_line(
                input,
                out,
                "Choose an action: (1) Attack (2) Do not attack: ",
            )?
            else {
                return Ok(ExploreResult::InputClosed);
            };

            let action = match line.parse::<CombatAction>() {
                Ok(action) => action,
                Err(err) => {
                    warn!(%err, "rejected combat action");
                    writeln!(out, "Invalid action. Choose 1 or 2.")?;
                    continue;
                }
            };

            // The recovery prompt runs mid-turn, so its I/O result is carried out here
            let mut prompt_result: io::Result<Option<String>> = Ok(Some(String::new()));
            let outcome = encounter
                .turn(&mut self.player, action, &mut self.rng, |player| {
                    let prompt = format!(
                        "{} is down! Use a {} to restore your health to {} and continue? (yes/no): ",
                        player.name, RECOVERY_ITEM, RECOVERY_HEALTH
                    );
                    prompt_result = prompt_line(&mut *input, &mut *out, &prompt);
                    matches!(&prompt_result, Ok(Some(answer)) if is_yes(answer))
                })
                .map_err(io::Error::other)?;
            if prompt_result?.is_none() {
                return Ok(ExploreResult::InputClosed);
            }

            let enemy_name = encounter.enemy().name.as_str();
            for event in &outcome.events {
                writeln!(out, "{}", describe_event(&self.player, enemy_name, event))?;
            }

            match outcome.survived {
                None => writeln!(
                    out,
                    "After the exchange, {}'s health is {}/{}.",
                    self.player.name, self.player.health, DISPLAY_MAX_HEALTH
                )?,
                Some(true) => return Ok(ExploreResult::Survived),
                Some(false) => return Ok(ExploreResult::Defeated),
            }
        }
    }

    /// Returns false if input ended while shopping.
    fn shop<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<bool> {
        writeln!(out, "{} entered a shop in {}.", self.player.name, self.town.name)?;
        for item in self.town.list_catalog() {
            writeln!(out, "{}: {} munnies", item.name, item.price)?;
        }
        writeln!(out, "You have {} munnies.", self.player.munnies)?;

        let Some(answer) = prompt_line(input, out, "Continue shopping? (yes/no) ")? else {
            return Ok(false);
        };
        if !is_yes(&answer) {
            return Ok(true);
        }

        let Some(item) = prompt_line(input, out, "Enter the item name you want to buy: ")? else {
            return Ok(false);
        };
        match self.town.sell(&mut self.player, item.trim()) {
            Ok(receipt) => writeln!(
                out,
                "{} bought {}. Remaining munnies: {}",
                self.player.name, receipt.item, receipt.remaining_munnies
            )?,
            Err(err) => writeln!(out, "{}", err)?,
        }
        Ok(true)
    }
}

fn describe_event(player: &Player, enemy: &str, event: &CombatEvent) -> String {
    let name = &player.name;
    match event {
        CombatEvent::PlayerAttack { damage } => {
            format!("{} hits the {} for {} damage.", name, enemy, damage)
        }
        CombatEvent::EnemyAttack { damage } => {
            format!("The {} strikes back for {} damage.", enemy, damage)
        }
        CombatEvent::PlayerHeld { penalty } => {
            format!("{} did not attack and lost {} health.", name, penalty)
        }
        CombatEvent::EnemyDefeated { enemy } => format!("{} defeated {}!", name, enemy),
        CombatEvent::PlayerDefeated { enemy } => {
            format!("{} has been defeated by the {}.", name, enemy)
        }
        CombatEvent::RecoveryItemUsed { item, health } => {
            format!("{} used a {}. Health restored to {}!", name, item, health)
        }
        CombatEvent::LootFound { munnies } => format!("{} found {} munnies.", name, munnies),
        CombatEvent::ExperienceGained { amount } => {
            format!("{} gained {} experience.", name, amount)
        }
        CombatEvent::LevelUp(level_up) => {
            format!("{} has reached level {}!", level_up.name, level_up.new_level)
        }
    }
}
