// src/components/stats.rs

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::logic::actions::Action;
use crate::logic::scoring::{self, ActionScores};
use crate::world::World;

/// 今の時刻 (Unix 秒)。時計が 1970 年より前を指してたら 0 にしておく。
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// スコアとカウンター類だよ！📊
///
/// スコアは絶対にマイナスにならない (下限 0)。
/// 書き換えはコントローラー (`Game`) からだけ行う想定で、外には読み取り用のメソッドを出す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    score: i32,
    moves: u32,
    undos: u32,
    hints: u32,
    /// ゲーム開始時刻 (Unix 秒)
    start_time: i64,
    /// 終了ボーナスを計算済みかどうか。二重に足さないためのフラグ。
    final_score_applied: bool,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    /// 今この瞬間に始まったゲームの Stats を作る。
    pub fn new() -> Self {
        Self::from_parts(0, 0, 0, 0, unix_now())
    }

    /// 保存されてた値から Stats を作り直す。
    pub fn from_parts(score: i32, moves: u32, undos: u32, hints: u32, start_time: i64) -> Self {
        Self {
            score: score.max(0),
            moves,
            undos,
            hints,
            start_time,
            final_score_applied: false,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn moves_count(&self) -> u32 {
        self.moves
    }

    pub fn undos_count(&self) -> u32 {
        self.undos
    }

    pub fn hints_count(&self) -> u32 {
        self.hints
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn final_score_applied(&self) -> bool {
        self.final_score_applied
    }

    /// ゲーム開始からの経過秒数。
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds_at(unix_now())
    }

    /// `now` (Unix 秒) 時点での経過秒数。時計が巻き戻ってたら 0。
    pub fn elapsed_seconds_at(&self, now: i64) -> u64 {
        u64::try_from(now - self.start_time).unwrap_or(0)
    }

    /// アクションの点数をスコアに足す。
    ///
    /// 点数がマイナスのアクションならスコアは減るよ。
    /// 点数は盤面から計算するので、必ずアクションを実行する「前」に呼ぶこと！
    ///
    /// 戻り値は「実際に」動いた点数。下限 0 で止まった分は含まないので、
    /// Undo のときはこの値を `remove_applied_score` に渡してね。
    pub fn apply_action_score(&mut self, action: &Action, world: &World) -> i32 {
        let delta = scoring::calculate_action_score(action, world);
        self.add_points(delta)
    }

    /// `apply_action_score` が返した点数をそのまま取り消す。
    pub fn remove_applied_score(&mut self, applied: i32) {
        self.add_points(-applied);
    }

    pub fn apply_undo_penalty(&mut self) {
        self.add_points(ActionScores::UNDO_PENALTY);
    }

    pub fn apply_hint_penalty(&mut self) {
        self.add_points(ActionScores::HINT_PENALTY);
    }

    pub fn inc_moves_count(&mut self) {
        self.moves += 1;
    }

    /// 手数を1減らす。0 より下にはならない。
    pub fn dec_moves_count(&mut self) {
        self.moves = self.moves.saturating_sub(1);
    }

    pub fn inc_undos_count(&mut self) {
        self.undos += 1;
    }

    pub fn inc_hints_count(&mut self) {
        self.hints += 1;
    }

    /// 勝利した瞬間の最終スコア計算。一回だけ効くよ！🏆
    ///
    /// - 30 秒より長くかかった場合は `700000 / 経過秒数` のタイムボーナス
    /// - 手数 × -0.4 (小数点以下切り捨て) の手数ペナルティ
    pub fn calculate_final_score(&mut self, elapsed_seconds: u64) -> i32 {
        if self.final_score_applied {
            return self.score;
        }
        self.final_score_applied = true;

        let bonus = scoring::time_bonus(elapsed_seconds);
        let penalty = scoring::moves_penalty(self.moves);
        debug!(
            "[Stats] Final score: {} + time bonus {} + moves penalty {} ({}s, {} moves)",
            self.score, bonus, penalty, elapsed_seconds, self.moves
        );
        self.add_points(bonus + penalty);
        self.score
    }

    /// スコアを動かして、実際に動いた量を返す。
    fn add_points(&mut self, delta: i32) -> i32 {
        let before = self.score;
        self.score = self.score.saturating_add(delta).max(0);
        self.score - before
    }
}
