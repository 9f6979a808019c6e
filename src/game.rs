// src/game.rs
//! ゲーム全体の進行役 (コントローラー) だよ！🎮
//!
//! 「拾う → 置く → ルール判定 → アクション実行 → スコア更新 → 勝利チェック」の流れを全部ここでつなぐ。
//! 画面表示やキー入力は外側の仕事。ここは状態を読む関数と、状態を変える関数を出すだけ！

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::card::CardId;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::selection::Selection;
use crate::components::stack::StackType;
use crate::components::stats::Stats;
use crate::config::GameConfig;
use crate::error::Result;
use crate::logic::actions::{Action, ActionsManager, DrawCardAction, MoveCardsAction};
use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::logic::{auto_move, hints, rules};
use crate::protocol::GameStateData;
use crate::systems::{DealInitialCardsSystem, WinConditionSystem};
use crate::world::World;

/// `request_hint` の結果。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    /// おすすめの手が見つかった。もう一回 `request_hint` するとこの手が実行される。
    Suggested(Action),
    /// 保留中だったヒントを実行した。
    Applied,
    /// 打てる手がない (詰み)。
    NoHint,
    /// 設定でヒントが無効になってる。
    Disabled,
}

/// 1回分のゲーム。盤面・スコア・Undo 履歴・選択状態を全部持つ。
pub struct Game {
    world: World,
    stats: Stats,
    actions: ActionsManager,
    selection: Option<Selection>,
    pending_hint: Option<Action>,
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// 毎回違う並びで配られる新しいゲーム。
    pub fn new(config: GameConfig) -> Self {
        Self::deal(config, StdRng::from_entropy())
    }

    /// シードを固定したゲーム。同じシードなら同じ配り方になるよ。
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::deal(config, StdRng::seed_from_u64(seed))
    }

    fn deal(config: GameConfig, mut rng: StdRng) -> Self {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, &mut rng);
        let world = DealInitialCardsSystem.execute(deck);
        info!("[Game] New game started");
        Self::from_parts(world, Stats::new(), config, rng)
    }

    /// 保存されたスナップショットからゲームを再開する。選択状態と Undo 履歴は空から。
    pub fn from_snapshot(snapshot: &GameStateData, config: GameConfig) -> Result<Self> {
        let (world, stats) = snapshot.restore()?;
        info!("[Game] Restored game (score {}, {} moves)", stats.score(), stats.moves_count());
        let mut game = Self::from_parts(world, stats, config, StdRng::from_entropy());
        if rules::check_win_condition(game.world.foundation_card_count()) {
            game.state.status = GameStatus::Won;
        }
        Ok(game)
    }

    pub(crate) fn from_parts(world: World, stats: Stats, config: GameConfig, rng: StdRng) -> Self {
        Self {
            world,
            stats,
            actions: ActionsManager::new(),
            selection: None,
            pending_hint: None,
            config,
            state: GameState::default(),
            rng,
        }
    }

    // --- 読み取り用 ---

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_won(&self) -> bool {
        self.state.status == GameStatus::Won
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn pending_hint(&self) -> Option<&Action> {
        self.pending_hint.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.actions.can_undo()
    }

    /// 最後に実行 (または Undo) したアクション。画面のどこが変わったかを知るのに使える。
    pub fn last_action(&self) -> Option<&Action> {
        self.actions.last_action()
    }

    // --- 操作 ---

    /// 山札をめくる。カードを持ってる間は何もしない。
    pub fn draw_card(&mut self) -> Result<bool> {
        if self.selection.is_some() {
            debug!("[Game] Draw ignored while cards are selected");
            return Ok(false);
        }
        if !self.state.is_playing() || !rules::can_draw(self.world.stock().is_empty(), self.world.waste().is_empty()) {
            return Ok(false);
        }
        self.perform(Action::Draw(DrawCardAction::new(self.config.reshuffle_on_empty)))?;
        Ok(true)
    }

    /// 捨て札の一番上を拾う。
    pub fn select_waste(&mut self) -> Result<bool> {
        let Some(top) = self.world.top_waste() else {
            return Ok(false);
        };
        self.select(StackType::Waste, vec![top]);
        Ok(true)
    }

    /// 場札の `pile` 列目の `card_index` 番目から上を全部拾う。裏向きのカードは拾えない。
    pub fn select_tableau(&mut self, pile: usize, card_index: usize) -> Result<bool> {
        if !self.world.tableau_card(pile, card_index)?.revealed {
            return Ok(false);
        }
        let cards = self.world.tableau_pile(pile)?[card_index..].to_vec();
        self.select(StackType::Tableau(pile as u8), cards);
        Ok(true)
    }

    /// 組札の一番上を拾う。
    pub fn select_foundation(&mut self, pile: usize) -> Result<bool> {
        let Some(&top) = self.world.foundation_pile(pile)?.last() else {
            return Ok(false);
        };
        self.select(StackType::Foundation(pile as u8), vec![top]);
        Ok(true)
    }

    fn select(&mut self, source: StackType, cards: Vec<CardId>) {
        debug!("[Game] Selected {} card(s) from {:?}", cards.len(), source);
        self.selection = Some(Selection::new(source, cards));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// 拾ってるカードを `target` に置く。
    ///
    /// ルール違反なら `Ok(false)` で、盤面も選択状態もそのまま。
    /// 拾った場所にそのまま戻すのは「キャンセル」扱いで、選択が外れる。
    pub fn place_selection(&mut self, target: StackType) -> Result<bool> {
        let Some(selection) = self.selection.as_ref() else {
            return Ok(false);
        };
        if selection.source == target {
            self.selection = None;
            return Ok(false);
        }
        if !self.state.is_playing() || (target.is_foundation() && selection.len() > 1) {
            return Ok(false);
        }
        let Some(lead) = selection.lead_card() else {
            return Ok(false);
        };

        let target_pile = self.world.pile_cards(target)?;
        if !rules::is_move_valid(self.world.card(lead), &target_pile, target) {
            debug!("[Game] Rejected move of {} onto {:?}", self.world.card(lead), target);
            return Ok(false);
        }

        let action = MoveCardsAction::new(selection.source, target, selection.cards.clone());
        self.perform(Action::MoveCards(action))?;
        self.selection = None;
        Ok(true)
    }

    /// 捨て札か場札の一番上のカードを、行ける組札があればそこに送る。
    pub fn send_to_foundation(&mut self, source: StackType) -> Result<bool> {
        if !matches!(source, StackType::Waste | StackType::Tableau(_)) || !self.state.is_playing() {
            return Ok(false);
        }
        let Some(top) = self.world.top_card(source)? else {
            return Ok(false);
        };
        if !self.world.card(top).revealed {
            return Ok(false);
        }
        let Some(target) = auto_move::find_automatic_foundation_move(&self.world, top) else {
            return Ok(false);
        };

        self.perform(Action::MoveCards(MoveCardsAction::new(source, target, vec![top])))?;
        self.selection = None;
        Ok(true)
    }

    /// 一手戻す。戻せる手がなければ `Ok(false)`。
    pub fn undo(&mut self) -> Result<bool> {
        if !self.actions.can_undo() || !self.state.is_playing() {
            return Ok(false);
        }

        let (action, applied) = self.actions.undo_scored(&mut self.world)?;
        // 実行時に実際に入った点数だけを戻して、それからペナルティ
        self.stats.remove_applied_score(applied);
        self.stats.apply_undo_penalty();
        self.stats.inc_undos_count();
        self.stats.dec_moves_count();

        self.selection = None;
        self.pending_hint = None;
        debug!("[Game] Undo: {} (score {})", action, self.stats.score());
        Ok(true)
    }

    /// ヒントをお願いする。💡
    ///
    /// 1回目はおすすめの手を返して (ヒント回数 +1、ペナルティ -3)、保留しておく。
    /// 保留中にもう一回呼ぶと、その手を普通の手として実行する。
    pub fn request_hint(&mut self) -> Result<HintOutcome> {
        if !self.config.hints_enabled {
            return Ok(HintOutcome::Disabled);
        }
        if !self.state.is_playing() {
            return Ok(HintOutcome::NoHint);
        }

        if let Some(hint) = self.pending_hint.take() {
            debug!("[Hint] Applying {}", hint.describe(&self.world));
            self.selection = None;
            self.perform(hint)?;
            return Ok(HintOutcome::Applied);
        }

        match hints::find_hint(&self.world, &self.config) {
            Some(action) => {
                self.stats.inc_hints_count();
                self.stats.apply_hint_penalty();
                info!("[Hint] Suggested: {}", action.describe(&self.world));
                self.pending_hint = Some(action.clone());
                Ok(HintOutcome::Suggested(action))
            }
            None => {
                info!("[Hint] No moves available");
                Ok(HintOutcome::NoHint)
            }
        }
    }

    /// 点数を付けて、アクションを実行して、手数を数えて、勝利チェック。
    fn perform(&mut self, action: Action) -> Result<()> {
        let stats_before = self.stats.clone();
        // 点数は実行前の盤面で計算する
        let applied = self.stats.apply_action_score(&action, &self.world);
        if let Err(err) = self.actions.execute_scored(action, applied, &mut self.world, &mut self.rng) {
            self.stats = stats_before;
            return Err(err);
        }
        self.stats.inc_moves_count();
        self.pending_hint = None;

        let elapsed = self.stats.elapsed_seconds();
        WinConditionSystem::new().run(&self.world, &mut self.state, &mut self.stats, elapsed);
        Ok(())
    }
}
