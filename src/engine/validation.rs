//! Валидация действий игрока и расчёт множества легальных действий.
//!
//! Валидация — чистая функция над (игрок, действие, состояние ставок):
//! никакие мутации здесь не происходят, движок применяет уже
//! проверенный результат.

use crate::domain::{Chips, GameConfig, PlayerAtTable, PlayerStatus};
use crate::engine::actions::ActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Результат валидации: что именно применить.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedAction {
    pub kind: ActionKind,
    /// Сколько фишек списать со стека.
    pub debit: Chips,
    /// Суммарная ставка игрока на улице после действия.
    pub new_total: Chips,
    /// Действие съедает весь стек.
    pub is_all_in: bool,
    /// Полноценная агрессия: двигает min_raise и агрессора.
    /// Короткий олл-ин поверх ставки повышает цель колла, но прав
    /// на рейз не даёт (reopens = false).
    pub reopens: bool,
}

/// Проверить действие игрока при текущем состоянии ставок.
///
/// Не проверяет очерёдность хода — это делает движок до вызова.
pub fn validate_action(
    player: &PlayerAtTable,
    kind: ActionKind,
    betting: &BettingState,
    config: &GameConfig,
) -> Result<ValidatedAction, EngineError> {
    if matches!(player.status, PlayerStatus::Folded) {
        return Err(EngineError::AlreadyFolded);
    }
    if !player.can_act() {
        return Err(EngineError::IllegalAction);
    }

    let stack = player.stack;
    let to_call = gap_to_call(player, betting);

    match kind {
        // Фолд легален всегда (пока игрок в раздаче).
        ActionKind::Fold => Ok(ValidatedAction {
            kind,
            debit: Chips::ZERO,
            new_total: player.bet_this_street,
            is_all_in: false,
            reopens: false,
        }),

        ActionKind::Check => {
            if to_call.is_zero() {
                Ok(ValidatedAction {
                    kind,
                    debit: Chips::ZERO,
                    new_total: player.bet_this_street,
                    is_all_in: false,
                    reopens: false,
                })
            } else {
                Err(EngineError::CannotCheck(to_call))
            }
        }

        ActionKind::Call => {
            if to_call.is_zero() {
                return Err(EngineError::CannotCall);
            }
            // Колл короче стека автоматически становится олл-ином,
            // "недостаточно фишек" для колла не бывает.
            let debit = to_call.min(stack);
            Ok(ValidatedAction {
                kind,
                debit,
                new_total: player.bet_this_street + debit,
                is_all_in: debit == stack,
                reopens: false,
            })
        }

        ActionKind::Bet(amount) => {
            if !betting.current_bet.is_zero() {
                // При живой ставке это raise, а не bet.
                return Err(EngineError::IllegalAction);
            }
            if amount.is_zero() {
                return Err(EngineError::IllegalAction);
            }
            if amount > stack {
                return Err(EngineError::NotEnoughChips {
                    need: amount,
                    stack,
                });
            }
            // Нижняя граница первого бета — большой блайнд;
            // исключение — олл-ин на весь стек меньше минимума.
            let floor = config.big_blind;
            let is_all_in = amount == stack;
            if amount < floor && !is_all_in {
                return Err(EngineError::BetTooSmall {
                    bet: amount,
                    min: floor,
                });
            }
            Ok(ValidatedAction {
                kind,
                debit: amount,
                new_total: player.bet_this_street + amount,
                is_all_in,
                reopens: true,
            })
        }

        ActionKind::Raise(total_bet) => {
            if betting.current_bet.is_zero() {
                // Без живой ставки это bet, а не raise.
                return Err(EngineError::IllegalAction);
            }
            if total_bet <= betting.current_bet {
                return Err(EngineError::IllegalAction);
            }

            let debit = total_bet.checked_sub(player.bet_this_street).ok_or(
                EngineError::IllegalAction,
            )?;
            if debit > stack {
                return Err(EngineError::NotEnoughChips { need: debit, stack });
            }

            let raise_size = total_bet - betting.current_bet;
            let is_all_in = debit == stack;
            if raise_size < betting.min_raise && !is_all_in {
                return Err(EngineError::RaiseTooSmall {
                    raise: raise_size,
                    min: betting.min_raise,
                });
            }

            Ok(ValidatedAction {
                kind,
                debit,
                new_total: total_bet,
                is_all_in,
                reopens: raise_size >= betting.min_raise,
            })
        }

        ActionKind::AllIn => {
            if stack.is_zero() {
                return Err(EngineError::IllegalAction);
            }
            let new_total = player.bet_this_street + stack;
            let raise_size = new_total.saturating_sub(betting.current_bet);
            Ok(ValidatedAction {
                kind,
                debit: stack,
                new_total,
                is_all_in: true,
                // Олл-ин агрессивен, только если повышает ставку на
                // полный мин-рейз (или открывает улицу на bet и выше).
                reopens: if betting.current_bet.is_zero() {
                    true
                } else {
                    raise_size >= betting.min_raise
                },
            })
        }

        // Блайнды постит только движок.
        ActionKind::SmallBlind | ActionKind::BigBlind => Err(EngineError::BlindNotPostable),
    }
}

/// Набор легальных типов действий игрока в текущем состоянии.
pub fn legal_actions(player: &PlayerAtTable, betting: &BettingState) -> Vec<ActionKind> {
    if !player.can_act() {
        return Vec::new();
    }

    let to_call = gap_to_call(player, betting);
    let mut actions = vec![ActionKind::Fold];

    if to_call.is_zero() {
        actions.push(ActionKind::Check);
        // Короткий стек открывает улицу только олл-ином "за сколько есть".
        let open = betting.min_raise.max(Chips(1)).min(player.stack);
        actions.push(ActionKind::Bet(open));
    } else {
        actions.push(ActionKind::Call);
        // Рейз возможен, только если стек больше, чем цена колла.
        // Предлагаемая сумма не превышает доступного максимума
        // (уже поставленное + стек): короткому стеку — олл-ин недорейзом.
        if player.stack > to_call {
            let full = betting.current_bet + betting.min_raise;
            let cap = player.bet_this_street + player.stack;
            actions.push(ActionKind::Raise(full.min(cap)));
        }
    }

    if !player.stack.is_zero() {
        actions.push(ActionKind::AllIn);
    }

    actions
}

/// Сколько фишек не хватает игроку до текущей ставки улицы.
fn gap_to_call(player: &PlayerAtTable, betting: &BettingState) -> Chips {
    betting.current_bet.saturating_sub(player.bet_this_street)
}

/// Новый min_raise после полноценной агрессии, по выбранному хаус-рулу.
pub fn next_min_raise(config: &GameConfig, raise_size: Chips) -> Chips {
    if config.fixed_min_raise {
        config.big_blind
    } else {
        raise_size.max(config.big_blind)
    }
}
