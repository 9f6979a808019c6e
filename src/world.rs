// src/world.rs
//! カードのアリーナと、全部のパイル (山札・捨て札・組札・場札) を持つ World だよ！🌍
//!
//! カードの実体は `cards` に一回だけ作られて、パイルにはその `CardId` が並ぶ。
//! あるカードの ID は、いつでもちょうど一つのパイルにだけ入ってる。
//! 移動はパイル間で ID を付け替えるだけなので、元の場所を覚えておくのも簡単！

use std::fmt;

use itertools::Itertools;

use crate::components::card::{Card, CardId};
use crate::components::stack::StackType;
use crate::config::layout::{FOUNDATION_PILE_COUNT, TABLEAU_PILE_COUNT};
use crate::error::{GameError, Result};

/// ゲーム盤面の全状態。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    /// カードのアリーナ。`CardId(i)` は `cards[i]` を指す。
    cards: Vec<Card>,
    /// 山札。先頭 (index 0) が次に引かれるカード。
    stock: Vec<CardId>,
    /// 捨て札。最後の要素が一番上。
    waste: Vec<CardId>,
    /// 組札。0: Heart, 1: Diamond, 2: Club, 3: Spade
    foundations: [Vec<CardId>; FOUNDATION_PILE_COUNT],
    /// 場札。各列の最後の要素が一番上。
    tableau: [Vec<CardId>; TABLEAU_PILE_COUNT],
}

impl World {
    /// デッキのカードを全部アリーナに入れて、その順番のまま山札に積んだ World を作る。
    pub fn from_deck(deck: Vec<Card>) -> Self {
        let stock = (0..deck.len()).map(CardId).collect();
        World {
            cards: deck,
            stock,
            waste: Vec::new(),
            foundations: Default::default(),
            tableau: Default::default(),
        }
    }

    /// パイルごとのカード列から World を組み立てる。
    /// スナップショットの復元やテスト用の盤面づくりで使うよ。
    ///
    /// 組札は 4 つ、場札は 7 列ちょうどじゃないとエラー。
    pub fn from_piles(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: Vec<Vec<Card>>,
        tableau: Vec<Vec<Card>>,
    ) -> Result<Self> {
        if foundations.len() != FOUNDATION_PILE_COUNT {
            return Err(GameError::InvalidSnapshot(format!(
                "expected {} foundation piles, found {}",
                FOUNDATION_PILE_COUNT,
                foundations.len()
            )));
        }
        if tableau.len() != TABLEAU_PILE_COUNT {
            return Err(GameError::InvalidSnapshot(format!(
                "expected {} tableau piles, found {}",
                TABLEAU_PILE_COUNT,
                tableau.len()
            )));
        }

        let mut world = World::from_deck(Vec::new());
        world.stock = world.push_cards(stock);
        world.waste = world.push_cards(waste);
        for (i, pile) in foundations.into_iter().enumerate() {
            world.foundations[i] = world.push_cards(pile);
        }
        for (i, pile) in tableau.into_iter().enumerate() {
            world.tableau[i] = world.push_cards(pile);
        }
        Ok(world)
    }

    fn push_cards(&mut self, cards: Vec<Card>) -> Vec<CardId> {
        cards
            .into_iter()
            .map(|card| {
                let id = CardId(self.cards.len());
                self.cards.push(card);
                id
            })
            .collect()
    }

    // --- カードへのアクセス ---

    /// ID からカードを取得する。ID はこの World が発行したものだけを渡すこと。
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.0]
    }

    /// ID が怪しいときはこっち。
    pub fn get_card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.0]
    }

    /// カードの表裏を設定して、変更前の値を返す。Undo 用に覚えておくのに便利！
    pub(crate) fn set_revealed(&mut self, id: CardId, revealed: bool) -> bool {
        std::mem::replace(&mut self.card_mut(id).revealed, revealed)
    }

    /// アリーナにあるカードの枚数 (普通は 52)。
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// ID の列をカードの列 (コピー) にする。ルール判定に渡すスナップショット用。
    pub fn cards_of(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter().map(|&id| self.card(id).clone()).collect()
    }

    // --- パイルへのアクセス ---

    pub fn stock(&self) -> &[CardId] {
        &self.stock
    }

    pub fn waste(&self) -> &[CardId] {
        &self.waste
    }

    /// 捨て札の一番上のカード。
    pub fn top_waste(&self) -> Option<CardId> {
        self.waste.last().copied()
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Vec<CardId> {
        &mut self.stock
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Vec<CardId> {
        &mut self.waste
    }

    /// 場札の `pile` 列目。
    pub fn tableau_pile(&self, pile: usize) -> Result<&[CardId]> {
        self.tableau
            .get(pile)
            .map(Vec::as_slice)
            .ok_or(GameError::InvalidPileIndex { area: "tableau", index: pile })
    }

    /// 場札の `pile` 列目の、下から `index` 番目のカード。
    pub fn tableau_card(&self, pile: usize, index: usize) -> Result<&Card> {
        let ids = self.tableau_pile(pile)?;
        ids.get(index)
            .map(|&id| self.card(id))
            .ok_or(GameError::InvalidCardIndex { index, len: ids.len() })
    }

    /// 組札の `pile` 番目。
    pub fn foundation_pile(&self, pile: usize) -> Result<&[CardId]> {
        self.foundations
            .get(pile)
            .map(Vec::as_slice)
            .ok_or(GameError::InvalidPileIndex { area: "foundation", index: pile })
    }

    /// `StackType` で指定されたパイル。
    pub fn pile(&self, stack: StackType) -> Result<&[CardId]> {
        match stack {
            StackType::Tableau(i) => self.tableau_pile(usize::from(i)),
            StackType::Foundation(i) => self.foundation_pile(usize::from(i)),
            StackType::Stock => Ok(&self.stock),
            StackType::Waste => Ok(&self.waste),
        }
    }

    pub(crate) fn pile_mut(&mut self, stack: StackType) -> Result<&mut Vec<CardId>> {
        match stack {
            StackType::Tableau(i) => self
                .tableau
                .get_mut(usize::from(i))
                .ok_or(GameError::InvalidPileIndex { area: "tableau", index: usize::from(i) }),
            StackType::Foundation(i) => self
                .foundations
                .get_mut(usize::from(i))
                .ok_or(GameError::InvalidPileIndex { area: "foundation", index: usize::from(i) }),
            StackType::Stock => Ok(&mut self.stock),
            StackType::Waste => Ok(&mut self.waste),
        }
    }

    /// 指定されたパイルの一番上のカード ID。空なら `None`。
    pub fn top_card(&self, stack: StackType) -> Result<Option<CardId>> {
        Ok(self.pile(stack)?.last().copied())
    }

    /// パイルの中身をカードのコピーで取得する。ルール判定用。
    pub fn pile_cards(&self, stack: StackType) -> Result<Vec<Card>> {
        Ok(self.cards_of(self.pile(stack)?))
    }

    /// 場札の `pile` 列目から、下から `from` 番目以降を全部取り出す。
    /// (取り出したカードはパイルから消えるよ！)
    pub fn take_tableau_range(&mut self, pile: usize, from: usize) -> Result<Vec<CardId>> {
        let ids = self
            .tableau
            .get_mut(pile)
            .ok_or(GameError::InvalidPileIndex { area: "tableau", index: pile })?;
        if from >= ids.len() {
            return Err(GameError::InvalidCardIndex { index: from, len: ids.len() });
        }
        Ok(ids.split_off(from))
    }

    /// 組札に乗ってるカードの合計枚数。
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// どこかのパイルに入っている全カード ID。山札 → 捨て札 → 組札 → 場札の順。
    pub fn all_pile_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
            .copied()
    }

    fn fmt_pile(&self, ids: &[CardId]) -> String {
        ids.iter()
            .map(|&id| {
                let card = self.card(id);
                if card.revealed {
                    card.to_string()
                } else {
                    format!("[{}]", card)
                }
            })
            .join(" ")
    }
}

// デバッグログ用の表示。裏向きのカードは [ ] で囲む。
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "stock: {}", self.fmt_pile(&self.stock))?;
        writeln!(f, "waste: {}", self.fmt_pile(&self.waste))?;
        for (i, pile) in self.foundations.iter().enumerate() {
            writeln!(f, "foundation {}: {}", i, self.fmt_pile(pile))?;
        }
        for (i, pile) in self.tableau.iter().enumerate() {
            writeln!(f, "tableau {}: {}", i, self.fmt_pile(pile))?;
        }
        Ok(())
    }
}
