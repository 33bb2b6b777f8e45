// Applying input actions to the game

use super::{Game, LoopControl};
use crate::gui::GameOverOption;
use crate::input_system::GameAction;
use crate::session::{GuessResult, Outcome};
use tracing::{debug, info};

impl Game {
    /// Apply one action; returns `Exit` when the loop should stop
    pub fn handle_action(&mut self, action: &GameAction) -> LoopControl {
        match *action {
            GameAction::Quit => {
                info!("Quit requested");
                return LoopControl::Exit;
            }
            GameAction::Guess(letter) => self.apply_guess(letter),
            GameAction::PlayAgain => {
                if self.session.is_over() {
                    self.restart();
                }
            }
            GameAction::Click(x, y) => {
                // Buttons only exist once the session is over
                if !self.session.is_over() {
                    return LoopControl::Continue;
                }
                match self.game_over_screen.hit_test(x, y) {
                    Some(GameOverOption::PlayAgain) => self.restart(),
                    Some(GameOverOption::Exit) => {
                        info!("Exit selected");
                        return LoopControl::Exit;
                    }
                    None => {}
                }
            }
            GameAction::MouseMove(x, y) => self.game_over_screen.set_hover(x, y),
        }

        LoopControl::Continue
    }

    fn apply_guess(&mut self, letter: char) {
        let result = self.session.guess(letter);
        debug!(
            "Guess {:?}: {:?} ({} attempts left)",
            letter,
            result,
            self.session.attempts_remaining()
        );

        if matches!(result, GuessResult::Correct | GuessResult::Wrong) {
            match self.session.outcome() {
                Outcome::Won => info!("Won with {} attempts left", self.session.attempts_remaining()),
                Outcome::Lost => info!("Lost, the word was {:?}", self.session.word()),
                Outcome::InProgress => {}
            }
        }
    }
}
