// src/logic/actions/move_cards.rs

use log::debug;

use crate::components::card::CardId;
use crate::components::stack::StackType;
use crate::error::{GameError, Result};
use crate::world::World;

/// 実行時に書き換えた表裏フラグの記録。
#[derive(Clone, Debug, PartialEq, Eq)]
struct MoveRecord {
    /// 動かしたカードそれぞれの、移動前の向き
    moved_flags: Vec<bool>,
    /// 場札から動かしたときに一番上に出てきたカードと、その前の向き
    exposed: Option<(CardId, bool)>,
}

/// カードを1枚、または場札の一続きをまとめて動かすアクション。🃏💨
///
/// - 場札から: `cards` が移動元の列の一番上の部分と一致してないとダメ
/// - 捨て札・組札から: 一番上の1枚だけ
/// - 組札へは1枚ずつ。山札・捨て札には置けない
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveCardsAction {
    source: StackType,
    dest: StackType,
    cards: Vec<CardId>,
    record: Option<MoveRecord>,
}

impl MoveCardsAction {
    pub fn new(source: StackType, dest: StackType, cards: Vec<CardId>) -> Self {
        Self { source, dest, cards, record: None }
    }

    pub fn source(&self) -> StackType {
        self.source
    }

    pub fn dest(&self) -> StackType {
        self.dest
    }

    /// 動かすカード。先頭が移動先に最初に乗るカード。
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn is_executed(&self) -> bool {
        self.record.is_some()
    }

    /// 実行できる形になってるかチェックする。盤面は書き換えない。
    fn check_structure(&self, world: &World) -> Result<()> {
        match self.dest {
            StackType::Stock | StackType::Waste => return Err(GameError::IllegalDestination(self.dest)),
            StackType::Foundation(_) if self.cards.len() != 1 => {
                return Err(GameError::IllegalDestination(self.dest))
            }
            _ => {}
        }
        // 移動先のインデックスが正しいか
        world.pile(self.dest)?;
        if self.dest == self.source {
            return Err(GameError::IllegalDestination(self.dest));
        }

        let source_pile = world.pile(self.source)?;
        let on_top = match self.source {
            StackType::Tableau(_) => !self.cards.is_empty() && source_pile.ends_with(&self.cards),
            StackType::Waste | StackType::Foundation(_) => {
                self.cards.len() == 1 && source_pile.last() == self.cards.first()
            }
            StackType::Stock => false,
        };
        if !on_top {
            return Err(GameError::SelectionMismatch(self.source));
        }
        Ok(())
    }

    pub fn execute(&mut self, world: &mut World) -> Result<()> {
        if self.record.is_some() {
            return Err(GameError::AlreadyExecuted);
        }
        self.check_structure(world)?;

        // 移動元から取り除く
        let source_pile = world.pile_mut(self.source)?;
        let remaining = source_pile.len() - self.cards.len();
        source_pile.truncate(remaining);
        let new_top = source_pile.last().copied();

        // 場札の下から出てきたカードは表にする
        let exposed = match (self.source, new_top) {
            (StackType::Tableau(_), Some(top)) => Some((top, world.set_revealed(top, true))),
            _ => None,
        };

        let moved_flags = self.cards.iter().map(|&id| world.set_revealed(id, true)).collect();
        world.pile_mut(self.dest)?.extend_from_slice(&self.cards);

        debug!(
            "[Action] Moved {} card(s) {:?} -> {:?}{}",
            self.cards.len(),
            self.source,
            self.dest,
            if exposed.map_or(false, |(_, was)| !was) { " (revealed a card)" } else { "" }
        );
        self.record = Some(MoveRecord { moved_flags, exposed });
        Ok(())
    }

    pub fn undo(&mut self, world: &mut World) -> Result<()> {
        let record = self.record.as_ref().ok_or(GameError::NotExecuted)?;
        if !world.pile(self.dest)?.ends_with(&self.cards) {
            return Err(GameError::SelectionMismatch(self.dest));
        }

        let dest_pile = world.pile_mut(self.dest)?;
        let remaining = dest_pile.len() - self.cards.len();
        dest_pile.truncate(remaining);

        for (&id, &was_revealed) in self.cards.iter().zip(&record.moved_flags) {
            world.set_revealed(id, was_revealed);
        }
        if let Some((id, was_revealed)) = record.exposed {
            world.set_revealed(id, was_revealed);
        }
        world.pile_mut(self.source)?.extend_from_slice(&self.cards);

        debug!("[Action] Undid move {:?} -> {:?}", self.source, self.dest);
        self.record = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    /// 場札0: [9♣(裏), 7♥, 6♠]、場札1: [8♠]、捨て札: [A♦]
    fn board() -> World {
        let mut tableau = vec![Vec::new(); 7];
        tableau[0] = vec![
            Card::new(Suit::Club, Rank::Nine),
            Card::face_up(Suit::Heart, Rank::Seven),
            Card::face_up(Suit::Spade, Rank::Six),
        ];
        tableau[1] = vec![Card::face_up(Suit::Spade, Rank::Eight)];
        World::from_piles(
            Vec::new(),
            vec![Card::face_up(Suit::Diamond, Rank::Ace)],
            vec![Vec::new(); 4],
            tableau,
        )
        .unwrap()
    }

    #[test]
    fn moving_a_run_reveals_the_card_below_and_undo_hides_it() {
        let mut world = board();
        let run = world.tableau_pile(0).unwrap()[1..].to_vec();
        let mut action = MoveCardsAction::new(StackType::Tableau(0), StackType::Tableau(1), run.clone());

        action.execute(&mut world).unwrap();
        assert_eq!(world.tableau_pile(0).unwrap().len(), 1);
        assert!(world.tableau_card(0, 0).unwrap().revealed, "下のカードがめくれるはず");
        assert_eq!(&world.tableau_pile(1).unwrap()[1..], run.as_slice());

        action.undo(&mut world).unwrap();
        assert_eq!(world, board(), "Undo で完全に元通りのはず");
    }

    #[test]
    fn waste_card_goes_to_foundation() {
        let mut world = board();
        let ace = world.top_waste().unwrap();
        let mut action = MoveCardsAction::new(StackType::Waste, StackType::Foundation(1), vec![ace]);

        action.execute(&mut world).unwrap();
        assert!(world.waste().is_empty());
        assert_eq!(world.foundation_pile(1).unwrap(), &[ace]);

        action.undo(&mut world).unwrap();
        assert_eq!(world, board());
    }

    #[test]
    fn structural_misuse_is_an_error() {
        let mut world = board();
        let pile0 = world.tableau_pile(0).unwrap().to_vec();

        // 一番上じゃないカードだけを動かそうとした
        let mut action = MoveCardsAction::new(StackType::Tableau(0), StackType::Tableau(1), vec![pile0[1]]);
        assert_eq!(action.execute(&mut world), Err(GameError::SelectionMismatch(StackType::Tableau(0))));

        // 組札に2枚まとめて
        let mut action =
            MoveCardsAction::new(StackType::Tableau(0), StackType::Foundation(0), pile0[1..].to_vec());
        assert_eq!(action.execute(&mut world), Err(GameError::IllegalDestination(StackType::Foundation(0))));

        // 捨て札には置けない
        let mut action = MoveCardsAction::new(StackType::Tableau(0), StackType::Waste, vec![pile0[2]]);
        assert_eq!(action.execute(&mut world), Err(GameError::IllegalDestination(StackType::Waste)));

        // 存在しない列
        let mut action = MoveCardsAction::new(StackType::Tableau(0), StackType::Tableau(9), vec![pile0[2]]);
        assert!(matches!(action.execute(&mut world), Err(GameError::InvalidPileIndex { .. })));

        assert_eq!(world, board(), "失敗したら盤面はそのままのはず");
    }

    #[test]
    fn execute_twice_and_undo_before_execute() {
        let mut world = board();
        let six = world.tableau_pile(0).unwrap()[2];
        let mut action = MoveCardsAction::new(StackType::Tableau(0), StackType::Tableau(2), vec![six]);

        assert_eq!(action.undo(&mut world), Err(GameError::NotExecuted));
        action.execute(&mut world).unwrap();
        assert_eq!(action.execute(&mut world), Err(GameError::AlreadyExecuted));
    }
}
