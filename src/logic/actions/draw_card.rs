// src/logic/actions/draw_card.rs

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::CardId;
use crate::components::stack::StackType;
use crate::error::{GameError, Result};
use crate::logic::rules;
use crate::world::World;

/// 実行したときに何が起きたか。Undo はこれを見て元に戻す。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// 山札の先頭を1枚めくって捨て札に乗せた。`was_revealed` はめくる前の向き。
    Drew { card: CardId, was_revealed: bool },
    /// 山札が空だったので、捨て札を全部山札に戻した。
    /// 戻す前の捨て札の並びと向きを全部覚えておく。
    Recycled { waste_before: Vec<(CardId, bool)> },
    /// 山札も捨て札も空っぽで、何も起きなかった。
    Nothing,
}

/// 山札をめくるアクション。🃏➡️
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawCardAction {
    reshuffle_on_empty: bool,
    outcome: Option<DrawOutcome>,
}

impl DrawCardAction {
    /// `reshuffle_on_empty` が true だと、捨て札を山札に戻すときにシャッフルする。
    pub fn new(reshuffle_on_empty: bool) -> Self {
        Self { reshuffle_on_empty, outcome: None }
    }

    pub fn outcome(&self) -> Option<&DrawOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_executed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn execute<R: Rng + ?Sized>(&mut self, world: &mut World, rng: &mut R) -> Result<()> {
        if self.outcome.is_some() {
            return Err(GameError::AlreadyExecuted);
        }

        let stock_is_empty = world.stock().is_empty();
        let waste_is_empty = world.waste().is_empty();

        let outcome = if rules::can_deal_from_stock(stock_is_empty) {
            let card = world.stock_mut().remove(0);
            let was_revealed = world.set_revealed(card, true);
            world.waste_mut().push(card);
            debug!("[Action] Drew {} from stock", world.card(card));
            DrawOutcome::Drew { card, was_revealed }
        } else if rules::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
            let waste_before: Vec<(CardId, bool)> =
                world.waste().iter().map(|&id| (id, world.card(id).revealed)).collect();

            let mut new_stock = std::mem::take(world.waste_mut());
            for &id in &new_stock {
                world.set_revealed(id, false);
            }
            if self.reshuffle_on_empty {
                new_stock.shuffle(rng);
            }
            debug!(
                "[Action] Recycled {} waste cards into the stock (shuffled: {})",
                new_stock.len(),
                self.reshuffle_on_empty
            );
            *world.stock_mut() = new_stock;
            DrawOutcome::Recycled { waste_before }
        } else {
            debug!("[Action] Stock and waste are both empty, nothing to draw");
            DrawOutcome::Nothing
        };

        self.outcome = Some(outcome);
        Ok(())
    }

    pub fn undo(&mut self, world: &mut World) -> Result<()> {
        match self.outcome.as_ref().ok_or(GameError::NotExecuted)? {
            DrawOutcome::Drew { card, was_revealed } => {
                if world.top_waste() != Some(*card) {
                    return Err(GameError::SelectionMismatch(StackType::Waste));
                }
                world.waste_mut().pop();
                world.set_revealed(*card, *was_revealed);
                world.stock_mut().insert(0, *card);
            }
            DrawOutcome::Recycled { waste_before } => {
                if !world.waste().is_empty() || world.stock().len() != waste_before.len() {
                    return Err(GameError::SelectionMismatch(StackType::Stock));
                }
                world.stock_mut().clear();
                for &(id, revealed) in waste_before {
                    world.set_revealed(id, revealed);
                    world.waste_mut().push(id);
                }
            }
            DrawOutcome::Nothing => {}
        }
        self.outcome = None;
        Ok(())
    }
}
