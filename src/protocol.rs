// src/protocol.rs

// このファイルは、ゲームの状態を外に書き出したり、読み込んで元に戻したりするときの
// データ形式を定義するよ！💾
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
// 選択中のカードと Undo の履歴は保存しない。

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::stats::Stats;
use crate::config::layout::{DECK_SIZE, FOUNDATION_PILE_COUNT, TABLEAU_PILE_COUNT};
use crate::error::{GameError, Result};
use crate::game::Game;
use crate::world::World;

/// 今のスナップショット形式のバージョン。
pub const SNAPSHOT_VERSION: u32 = 1;

/// ゲームの状態全体を表すデータ構造だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameStateData {
    pub version: u32,
    pub stats: StatsData,
    pub deck: DeckData,
    /// 組札 4 つ。0: Heart, 1: Diamond, 2: Club, 3: Spade
    pub foundation: Vec<Vec<CardData>>,
    /// 場札 7 列。
    pub tableau: Vec<Vec<CardData>>,
}

/// スコアとカウンター。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    /// ゲーム開始時刻 (Unix 秒)
    pub start_time: i64,
    pub score: i32,
    pub moves: u32,
    pub undos: u32,
    pub hints: u32,
}

/// 山札と捨て札。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeckData {
    /// 山札。先頭が次にめくられるカード。
    pub hidden_cards: Vec<CardData>,
    /// 捨て札。最後が一番上。
    pub waste: Vec<CardData>,
}

/// カード1枚の状態を表すデータ構造。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    /// カードのスート (マーク)。
    pub suit: Suit,
    /// カードのランク (1-13)。
    pub rank: u8,
    /// カードが表向きかどうか。
    pub revealed: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self { suit: card.suit, rank: card.value(), revealed: card.revealed }
    }
}

impl TryFrom<&CardData> for Card {
    type Error = GameError;

    fn try_from(data: &CardData) -> Result<Self> {
        let rank = Rank::from_value(data.rank)
            .ok_or_else(|| GameError::InvalidSnapshot(format!("invalid rank {}", data.rank)))?;
        Ok(Card { suit: data.suit, rank, revealed: data.revealed })
    }
}

fn pile_data(world: &World, ids: &[CardId]) -> Vec<CardData> {
    ids.iter().map(|&id| CardData::from(world.card(id))).collect()
}

fn pile_cards(data: &[CardData]) -> Result<Vec<Card>> {
    data.iter().map(Card::try_from).collect()
}

impl GameStateData {
    /// ゲームの今の状態をスナップショットにする。
    pub fn from_game(game: &Game) -> Self {
        let world = game.world();
        let stats = game.stats();

        let foundation = (0..FOUNDATION_PILE_COUNT)
            .map(|i| world.foundation_pile(i).map(|ids| pile_data(world, ids)).unwrap_or_default())
            .collect();
        let tableau = (0..TABLEAU_PILE_COUNT)
            .map(|i| world.tableau_pile(i).map(|ids| pile_data(world, ids)).unwrap_or_default())
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            stats: StatsData {
                start_time: stats.start_time(),
                score: stats.score(),
                moves: stats.moves_count(),
                undos: stats.undos_count(),
                hints: stats.hints_count(),
            },
            deck: DeckData {
                hidden_cards: pile_data(world, world.stock()),
                waste: pile_data(world, world.waste()),
            },
            foundation,
            tableau,
        }
    }

    /// スナップショットから盤面とスコアを組み立て直す。
    ///
    /// 組札は 4 つ、場札は 7 列、カードは 52 枚全部が 1 枚ずつ入ってないとダメ。
    pub fn restore(&self) -> Result<(World, Stats)> {
        if self.version > SNAPSHOT_VERSION {
            warn!("[Protocol] Snapshot version {} is newer than {}", self.version, SNAPSHOT_VERSION);
        }
        if self.foundation.len() != FOUNDATION_PILE_COUNT {
            return Err(GameError::InvalidSnapshot(format!(
                "expected {} foundation piles, found {}",
                FOUNDATION_PILE_COUNT,
                self.foundation.len()
            )));
        }
        if self.tableau.len() != TABLEAU_PILE_COUNT {
            return Err(GameError::InvalidSnapshot(format!(
                "expected {} tableau piles, found {}",
                TABLEAU_PILE_COUNT,
                self.tableau.len()
            )));
        }

        let all_cards = self
            .deck
            .hidden_cards
            .iter()
            .chain(&self.deck.waste)
            .chain(self.foundation.iter().flatten())
            .chain(self.tableau.iter().flatten());
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut total = 0;
        for card in all_cards {
            total += 1;
            if !seen.insert((card.suit, card.rank)) {
                return Err(GameError::InvalidSnapshot(format!(
                    "duplicate card {:?} {}",
                    card.suit, card.rank
                )));
            }
        }
        if total != DECK_SIZE {
            return Err(GameError::InvalidSnapshot(format!("expected {} cards, found {}", DECK_SIZE, total)));
        }

        let world = World::from_piles(
            pile_cards(&self.deck.hidden_cards)?,
            pile_cards(&self.deck.waste)?,
            self.foundation.iter().map(|pile| pile_cards(pile)).collect::<Result<_>>()?,
            self.tableau.iter().map(|pile| pile_cards(pile)).collect::<Result<_>>()?,
        )?;
        let stats = Stats::from_parts(
            self.stats.score,
            self.stats.moves,
            self.stats.undos,
            self.stats.hints,
            self.stats.start_time,
        );
        debug!("[Protocol] Restored snapshot with {} cards", world.card_count());
        Ok((world, stats))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn snapshot_json_round_trip() {
        let mut game = Game::with_seed(GameConfig::default(), 11);
        game.draw_card().unwrap();
        game.draw_card().unwrap();

        let snapshot = GameStateData::from_game(&game);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"hiddenCards\""));
        assert!(json.contains("\"startTime\""));

        let parsed = GameStateData::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);

        let restored = Game::from_snapshot(&parsed, GameConfig::default()).unwrap();
        // アリーナの並びは変わるので、中身はスナップショット同士で比べる
        assert_eq!(GameStateData::from_game(&restored), snapshot);
        assert_eq!(restored.world().to_string(), game.world().to_string());
        assert_eq!(restored.stats().moves_count(), 2);
        assert_eq!(restored.stats().start_time(), game.stats().start_time());
        assert!(restored.selection().is_none());
        assert!(!restored.can_undo(), "Undo 履歴は保存されない");
    }

    #[test]
    fn broken_snapshots_are_rejected() {
        let game = Game::with_seed(GameConfig::default(), 3);
        let good = GameStateData::from_game(&game);

        let mut missing_pile = good.clone();
        missing_pile.tableau.pop();
        assert!(matches!(missing_pile.restore(), Err(GameError::InvalidSnapshot(_))));

        let mut duplicate = good.clone();
        let first = duplicate.deck.hidden_cards[0].clone();
        duplicate.deck.hidden_cards[1] = first;
        assert!(matches!(duplicate.restore(), Err(GameError::InvalidSnapshot(_))));

        let mut missing_card = good.clone();
        missing_card.deck.hidden_cards.pop();
        assert!(matches!(missing_card.restore(), Err(GameError::InvalidSnapshot(_))));

        let mut bad_rank = good;
        bad_rank.deck.hidden_cards[0].rank = 14;
        assert!(bad_rank.restore().is_err());

        assert!(GameStateData::from_json("{not json").is_err());
    }
}
