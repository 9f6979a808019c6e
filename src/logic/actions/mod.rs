// src/logic/actions/mod.rs
//! 盤面を書き換える操作 (アクション) と、その履歴を管理するマネージャーだよ！⏪
//!
//! アクションは「どのパイルのどのカードか」と、Undo のための記録だけを持つ。
//! 盤面 (`World`) は実行・Undo のたびに引数で受け取るよ。
//! ルール判定はしないので、呼び出す前に `rules::is_move_valid` で確認してね！

use std::fmt;

use itertools::Itertools;
use rand::Rng;

use crate::error::Result;
use crate::world::World;

pub mod draw_card;
pub mod manager;
pub mod move_cards;

pub use draw_card::{DrawCardAction, DrawOutcome};
pub use manager::ActionsManager;
pub use move_cards::MoveCardsAction;

/// 実行して、Undo できる操作。種類はこの2つだけ！
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// 山札をめくる (山札が空なら捨て札を山札に戻す)
    Draw(DrawCardAction),
    /// カードを1枚か、場札の一続き (ラン) をまとめて動かす
    MoveCards(MoveCardsAction),
}

impl Action {
    pub fn execute<R: Rng + ?Sized>(&mut self, world: &mut World, rng: &mut R) -> Result<()> {
        match self {
            Action::Draw(draw) => draw.execute(world, rng),
            Action::MoveCards(mv) => mv.execute(world),
        }
    }

    pub fn undo(&mut self, world: &mut World) -> Result<()> {
        match self {
            Action::Draw(draw) => draw.undo(world),
            Action::MoveCards(mv) => mv.undo(world),
        }
    }

    pub fn is_executed(&self) -> bool {
        match self {
            Action::Draw(draw) => draw.is_executed(),
            Action::MoveCards(mv) => mv.is_executed(),
        }
    }

    /// ヒント表示やログ用に、カード名入りで説明する。例: `move 7♠ 6♥ from Tableau(2) to Tableau(5)`
    pub fn describe(&self, world: &World) -> String {
        match self {
            Action::Draw(_) => "draw from stock".to_string(),
            Action::MoveCards(mv) => format!(
                "move {} from {:?} to {:?}",
                mv.cards().iter().filter_map(|&id| world.get_card(id)).join(" "),
                mv.source(),
                mv.dest()
            ),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Draw(_) => write!(f, "Draw"),
            Action::MoveCards(mv) => write!(
                f,
                "MoveCards({} card(s) {:?} -> {:?})",
                mv.cards().len(),
                mv.source(),
                mv.dest()
            ),
        }
    }
}
