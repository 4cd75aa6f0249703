//! Снапшот игры для внешнего хранилища.
//!
//! Плоская сериализуемая структура, зеркалящая GameState: карты — в виде
//! двухсимвольных кодов (`Ah`, `Td`), множества претендентов сайд-потов —
//! простые массивы. Восстановление (`to_state`) валидирует коды карт и
//! уникальность всех 52 карт раздачи.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Card, Chips, Deck, GameConfig, GameId, HandId, HandState, PlayerAtTable, PlayerId,
    PlayerStatus, SeatIndex, Street, Table,
};
use crate::engine::actions::AppliedAction;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::pot::Pot;
use crate::engine::side_pots::compute_side_pots;
use crate::engine::state::{GameState, GameStatus};

/// Игрок в снапшоте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub player_id: PlayerId,
    pub seat: u8,
    pub stack: u64,
    pub bet_this_street: u64,
    pub total_committed: u64,
    pub status: PlayerStatus,
    /// Коды карт ("As", "Td"); пусто вне раздачи.
    pub hole_cards: Vec<String>,
}

/// Сайд-пот в снапшоте: претенденты — простой массив мест.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePotSnapshot {
    pub amount: u64,
    pub eligible: Vec<u8>,
    pub cap: u64,
}

/// Пер-хендовая часть снапшота.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSnapshot {
    pub hand_no: HandId,
    pub street: Street,
    pub board: Vec<String>,
    /// Остаток колоды — нужен для резюмирования раздачи.
    pub deck: Vec<String>,
    pub seed: String,
}

/// Полный снапшот игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub status: GameStatus,
    pub paused_from: Option<GameStatus>,
    pub config: GameConfig,
    pub version: u64,
    pub bank: u64,

    pub dealer: Option<u8>,
    pub small_blind: Option<u8>,
    pub big_blind: Option<u8>,
    pub players: Vec<PlayerSnapshot>,

    pub hand: Option<HandSnapshot>,
    pub betting: BettingState,
    pub history: Vec<AppliedAction>,
    pub hands_played: HandId,

    pub pot_total: u64,
    pub contributions: Vec<(u8, u64)>,
    /// Детализация банка на момент снапшота.
    pub side_pots: Vec<SidePotSnapshot>,

    pub to_act: Option<u8>,
}

impl GameSnapshot {
    /// Снять снапшот с состояния.
    pub fn from_state(state: &GameState) -> Self {
        let players = state
            .table
            .seats
            .iter()
            .enumerate()
            .filter_map(|(idx, seat)| {
                seat.as_ref().map(|p| PlayerSnapshot {
                    player_id: p.player_id,
                    seat: idx as u8,
                    stack: p.stack.0,
                    bet_this_street: p.bet_this_street.0,
                    total_committed: p.total_committed.0,
                    status: p.status,
                    hole_cards: p.hole_cards.iter().map(|c| c.to_string()).collect(),
                })
            })
            .collect();

        let side_pots = compute_side_pots(&state.pot.contributions)
            .into_iter()
            .map(|sp| SidePotSnapshot {
                amount: sp.amount.0,
                eligible: sp.eligible_seats.iter().map(|s| s.0).collect(),
                cap: sp.cap.0,
            })
            .collect();

        Self {
            game_id: state.id,
            status: state.status,
            paused_from: state.paused_from,
            config: state.config.clone(),
            version: state.version,
            bank: state.bank.0,
            dealer: state.table.dealer.map(|s| s.0),
            small_blind: state.table.small_blind.map(|s| s.0),
            big_blind: state.table.big_blind.map(|s| s.0),
            players,
            hand: state.hand.as_ref().map(|h| HandSnapshot {
                hand_no: h.hand_no,
                street: h.street,
                board: h.board.iter().map(|c| c.to_string()).collect(),
                deck: h.deck.cards.iter().map(|c| c.to_string()).collect(),
                seed: h.seed.clone(),
            }),
            betting: state.betting.clone(),
            history: state.history.clone(),
            hands_played: state.hands_played,
            pot_total: state.pot.total.0,
            contributions: state
                .pot
                .contributions
                .iter()
                .map(|(seat, chips)| (seat.0, chips.0))
                .collect(),
            side_pots,
            to_act: state.to_act.map(|s| s.0),
        }
    }

    /// Восстановить состояние из снапшота.
    pub fn to_state(&self) -> Result<GameState, EngineError> {
        self.config
            .validate()
            .map_err(EngineError::MalformedSnapshot)?;

        let mut table = Table::new(self.config.max_players);
        table.dealer = self.dealer.map(SeatIndex);
        table.small_blind = self.small_blind.map(SeatIndex);
        table.big_blind = self.big_blind.map(SeatIndex);

        let mut seen_cards: Vec<Card> = Vec::with_capacity(52);

        for ps in &self.players {
            let seat = SeatIndex(ps.seat);
            if seat.index() >= table.seats.len() {
                return Err(EngineError::MalformedSnapshot(format!(
                    "место {} вне диапазона стола",
                    ps.seat
                )));
            }
            if table.seats[seat.index()].is_some() {
                return Err(EngineError::MalformedSnapshot(format!(
                    "место {} встречается дважды",
                    ps.seat
                )));
            }

            let hole_cards = parse_cards(&ps.hole_cards, &mut seen_cards)?;
            table.seats[seat.index()] = Some(PlayerAtTable {
                player_id: ps.player_id,
                stack: Chips(ps.stack),
                bet_this_street: Chips(ps.bet_this_street),
                total_committed: Chips(ps.total_committed),
                status: ps.status,
                hole_cards,
            });
        }

        let hand = match &self.hand {
            Some(hs) => {
                let board = parse_cards(&hs.board, &mut seen_cards)?;
                let deck_cards = parse_cards(&hs.deck, &mut seen_cards)?;
                Some(HandState {
                    hand_no: hs.hand_no,
                    street: hs.street,
                    board,
                    deck: Deck { cards: deck_cards },
                    seed: hs.seed.clone(),
                })
            }
            None => None,
        };

        let mut pot = Pot::new();
        for &(seat, amount) in &self.contributions {
            pot.add_contribution(SeatIndex(seat), Chips(amount));
        }
        if pot.total != Chips(self.pot_total) {
            return Err(EngineError::MalformedSnapshot(format!(
                "сумма вкладов {} не сходится с банком {}",
                pot.total, self.pot_total
            )));
        }

        let state = GameState {
            id: self.game_id,
            status: self.status,
            paused_from: self.paused_from,
            config: self.config.clone(),
            table,
            hand,
            betting: self.betting.clone(),
            pot,
            to_act: self.to_act.map(SeatIndex),
            history: self.history.clone(),
            hands_played: self.hands_played,
            version: self.version,
            bank: Chips(self.bank),
        };

        state.audit_chips()?;
        Ok(state)
    }
}

/// Распарсить список кодов карт, проверяя уникальность в рамках раздачи.
fn parse_cards(codes: &[String], seen: &mut Vec<Card>) -> Result<Vec<Card>, EngineError> {
    let mut cards = Vec::with_capacity(codes.len());
    for code in codes {
        let card: Card = code
            .parse()
            .map_err(|e| EngineError::MalformedSnapshot(format!("{e}")))?;
        if seen.contains(&card) {
            return Err(EngineError::MalformedSnapshot(format!(
                "дубликат карты {card}"
            )));
        }
        seen.push(card);
        cards.push(card);
    }
    Ok(cards)
}
