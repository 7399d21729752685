//! Crazy Eights turn engine.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::agents::{Agent, GameView};
use crate::cards::{fresh_deck, validate, Behavior, Card};
use crate::core::{EngineError, EventRecord, GameConfig, GameRng, PlayerId, TurnEvent};
use crate::rules::{GameResult, Phase, PhaseEvent};
use crate::zones::Piles;

/// Hands rarely grow past eight cards.
type Hand = SmallVec<[Card; 8]>;

/// A player at the table: identity, decision-maker, and private hand.
struct Seat {
    id: PlayerId,
    agent: Box<dyn Agent>,
    hand: Hand,
}

/// The Crazy Eights engine.
///
/// Owns the roster, every hand, both piles, the seating order, and the
/// phase. Agents are called synchronously and only ever receive hand
/// snapshots and a `GameView`.
///
/// ## Example
///
/// ```
/// use crazy_eights::agents::RandomAgent;
/// use crazy_eights::games::crazy_eights::CrazyEightsBuilder;
///
/// let mut game = CrazyEightsBuilder::new()
///     .seed(7)
///     .player(Box::new(RandomAgent::new("alice", 1)))
///     .player(Box::new(RandomAgent::new("bob", 2)))
///     .build();
///
/// let result = game.start().unwrap().expect("round was played");
/// assert_eq!(game.hand_len(result.winner), Some(0));
/// assert!(!game.is_game_active());
/// ```
pub struct CrazyEights {
    config: GameConfig,
    rng: GameRng,
    /// Seating order; reversed in place by an Ace.
    seats: Vec<Seat>,
    /// Index into `seats` of the player to act.
    current: usize,
    next_id: u8,
    phase: Phase,
    piles: Piles,
    turn: u32,
    events: Vector<EventRecord>,
}

/// Builder for creating a `CrazyEights` engine.
#[derive(Default)]
pub struct CrazyEightsBuilder {
    config: GameConfig,
    agents: Vec<Box<dyn Agent>>,
}

impl CrazyEightsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial_hand_size(mut self, size: usize) -> Self {
        self.config.initial_hand_size = size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn reprompt_limit(mut self, limit: u32) -> Self {
        self.config.reprompt_limit = Some(limit);
        self
    }

    /// Seat a player; players are seated in the order added.
    pub fn player(mut self, agent: Box<dyn Agent>) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn build(self) -> CrazyEights {
        let mut game = CrazyEights::new(self.config);
        for agent in self.agents {
            game.add_player(agent);
        }
        game
    }
}

impl CrazyEights {
    /// Create an engine with no players.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            seats: Vec::new(),
            current: 0,
            next_id: 0,
            phase: Phase::Inactive,
            piles: Piles::new(),
            turn: 0,
            events: Vector::new(),
        }
    }

    // === Roster ===

    /// Seat a new player at the end of the table.
    ///
    /// Ignored (returns `None`) while a round is in progress or once 255
    /// ids have been handed out.
    pub fn add_player(&mut self, agent: Box<dyn Agent>) -> Option<PlayerId> {
        if self.phase.is_active() {
            debug!("add_player ignored: round in progress");
            return None;
        }
        if self.next_id == u8::MAX {
            warn!("add_player ignored: player ids exhausted");
            return None;
        }

        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        debug!(player = %id, agent = agent.name(), "player joined");
        self.seats.push(Seat {
            id,
            agent,
            hand: Hand::new(),
        });
        Some(id)
    }

    /// Remove a player and their hand.
    ///
    /// Returns `false` if a round is in progress or the player is unknown.
    pub fn remove_player(&mut self, player: PlayerId) -> bool {
        if self.phase.is_active() {
            debug!(player = %player, "remove_player ignored: round in progress");
            return false;
        }
        match self.seat_of(player) {
            Some(idx) => {
                self.seats.remove(idx);
                self.current = 0;
                true
            }
            None => false,
        }
    }

    // === Round control ===

    /// Deal a shuffled deck and play the round until a hand empties.
    ///
    /// Returns `Ok(None)` without doing anything if there are no players
    /// or a round is already in progress. If a draw finds both piles empty
    /// the round is abandoned and `DrawPileExhausted` is returned.
    pub fn start(&mut self) -> Result<Option<GameResult>, EngineError> {
        if !self.deal()? {
            return Ok(None);
        }
        self.run().map(Some)
    }

    /// Like `start`, but deals `deck` in the given order (first card on
    /// top) instead of shuffling.
    pub fn start_stacked(&mut self, deck: Vec<Card>) -> Result<Option<GameResult>, EngineError> {
        if !self.deal_stacked(deck)? {
            return Ok(None);
        }
        self.run().map(Some)
    }

    /// Set up a round from a freshly shuffled deck without playing it.
    ///
    /// Returns `false` if the call was ignored. Drive the round with
    /// `play_turn`.
    pub fn deal(&mut self) -> Result<bool, EngineError> {
        if !self.can_start() {
            return Ok(false);
        }
        self.config.validate(self.seats.len())?;

        self.begin(fresh_deck(), true)?;
        Ok(true)
    }

    /// Set up a round from a caller-ordered deck without playing it.
    pub fn deal_stacked(&mut self, deck: Vec<Card>) -> Result<bool, EngineError> {
        if !self.can_start() {
            return Ok(false);
        }
        self.config.validate(self.seats.len())?;
        validate(&deck)?;

        self.begin(deck, false)?;
        Ok(true)
    }

    /// Play a single turn.
    ///
    /// Returns the result if this turn ended the round. Does nothing
    /// outside the `Playing` phase.
    pub fn play_turn(&mut self) -> Result<Option<GameResult>, EngineError> {
        if self.phase != Phase::Playing {
            return Ok(None);
        }

        self.turn += 1;
        let outcome = self.take_turn().map(|()| self.check_end());
        if outcome.is_err() {
            self.abort();
        }
        outcome
    }

    fn can_start(&self) -> bool {
        if self.phase.is_active() {
            debug!("start ignored: round already in progress");
            return false;
        }
        if self.seats.is_empty() {
            debug!("start ignored: no players");
            return false;
        }
        true
    }

    fn begin(&mut self, deck: Vec<Card>, shuffle: bool) -> Result<(), EngineError> {
        self.phase = self.phase.on(PhaseEvent::Start);
        self.events = Vector::new();
        self.turn = 0;
        self.current = 0;
        self.piles.reset(deck);
        if shuffle {
            self.piles.shuffle(&mut self.rng);
        }
        for seat in &mut self.seats {
            seat.hand.clear();
        }

        let dealt = self.deal_hands();
        if dealt.is_err() {
            self.abort();
        }
        dealt
    }

    fn deal_hands(&mut self) -> Result<(), EngineError> {
        for idx in 0..self.seats.len() {
            for _ in 0..self.config.initial_hand_size {
                let card = self.piles.deal_one().ok_or(EngineError::DrawPileExhausted)?;
                self.seats[idx].hand.push(card);
            }
            let player = self.seats[idx].id;
            let cards = self.seats[idx].hand.to_vec();
            info!(player = %player, hand = ?cards, "dealt");
            self.log(TurnEvent::Dealt { player, cards });
        }

        let starter = self.piles.flip_starter().ok_or(EngineError::DrawPileExhausted)?;
        info!(card = %starter, "top card");
        self.log(TurnEvent::Flipped { card: starter });
        Ok(())
    }

    fn run(&mut self) -> Result<GameResult, EngineError> {
        loop {
            if let Some(result) = self.play_turn()? {
                return Ok(result);
            }
        }
    }

    fn abort(&mut self) {
        warn!(turn = self.turn, "round aborted");
        self.phase = self.phase.on(PhaseEvent::Abort);
    }

    // === Turn flow ===

    fn take_turn(&mut self) -> Result<(), EngineError> {
        let idx = self.current;
        let player = self.seats[idx].id;

        match self.request_card(idx)? {
            None => {
                info!(player = %player, "declines");
                self.log(TurnEvent::Declined { player });
                self.draw_cards(idx, 1)?;
                self.advance();
            }
            Some(card) => {
                let hand = &mut self.seats[idx].hand;
                if let Some(pos) = hand.iter().position(|c| *c == card) {
                    hand.remove(pos);
                }
                info!(player = %player, card = %card, "plays");
                self.log(TurnEvent::Played { player, card });
                self.discard(card);
                self.apply_effect(card.behavior())?;
            }
        }
        Ok(())
    }

    /// Ask the agent at `idx` for a card until it names one it holds that
    /// fits the top card, or declines.
    fn request_card(&mut self, idx: usize) -> Result<Option<Card>, EngineError> {
        let player = self.seats[idx].id;
        let mut rejected = 0u32;

        loop {
            let view = self.view().ok_or(EngineError::MissingTopCard)?;
            let snapshot = self.seats[idx].hand.to_vec();

            self.phase = self.phase.on(PhaseEvent::AwaitDecision);
            let answer = self.seats[idx].agent.choose_card(&snapshot, view);
            self.phase = self.phase.on(PhaseEvent::DecisionMade);

            let card = match answer {
                None => return Ok(None),
                Some(card) => card,
            };
            if self.seats[idx].hand.contains(&card) && self.is_legal(&card) {
                return Ok(Some(card));
            }

            warn!(player = %player, card = %card, top = %view.top_card(), "invalid choice");
            self.log(TurnEvent::InvalidChoice { player, card });
            rejected += 1;
            if let Some(limit) = self.config.reprompt_limit {
                if rejected > limit {
                    debug!(player = %player, rejected, "reprompt limit reached, forcing a draw");
                    return Ok(None);
                }
            }
        }
    }

    fn apply_effect(&mut self, behavior: Behavior) -> Result<(), EngineError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }

        match behavior {
            Behavior::PassTurn | Behavior::Inert => self.advance(),
            Behavior::ReverseOrder => {
                self.reverse();
                self.advance();
            }
            Behavior::ForceDraw(count) => {
                self.advance();
                let victim = self.current;
                self.draw_cards(victim, usize::from(count))?;
                self.skip_current();
            }
            Behavior::SkipNext => {
                self.advance();
                self.skip_current();
            }
            Behavior::WildChooseSuit => {
                self.select_suit()?;
                self.advance();
            }
        }
        Ok(())
    }

    /// Let the current player name a suit; the top card is replaced by a
    /// stand-in of that suit and the same rank.
    fn select_suit(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }

        let idx = self.current;
        let view = self.view().ok_or(EngineError::MissingTopCard)?;
        let snapshot = self.seats[idx].hand.to_vec();

        self.phase = self.phase.on(PhaseEvent::AwaitDecision);
        let suit = self.seats[idx].agent.choose_suit(&snapshot, view);
        self.phase = self.phase.on(PhaseEvent::DecisionMade);

        let rank = view.top_card().rank();
        self.piles.set_effective_top(Card::synthetic_wild(suit, rank));

        let player = self.seats[idx].id;
        info!(player = %player, suit = %suit, "changes suit");
        self.log(TurnEvent::SuitChosen { player, suit });
        Ok(())
    }

    fn discard(&mut self, card: Card) {
        if self.phase == Phase::Playing {
            self.piles.discard(card);
        }
    }

    /// Draw `count` cards into the hand at `idx`.
    fn draw_cards(&mut self, idx: usize, count: usize) -> Result<(), EngineError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }

        let player = self.seats[idx].id;
        for _ in 0..count {
            let draw = self.piles.draw_one(&mut self.rng)?;
            if draw.recycled > 0 {
                self.log(TurnEvent::Recycled {
                    cards: draw.recycled,
                });
            }
            self.seats[idx].hand.push(draw.card);
            info!(player = %player, card = %draw.card, "draws");
            self.log(TurnEvent::Drew {
                player,
                card: draw.card,
            });
        }
        Ok(())
    }

    /// Pass the turn one seat along.
    fn advance(&mut self) {
        if self.phase == Phase::Playing && !self.seats.is_empty() {
            self.current = (self.current + 1) % self.seats.len();
        }
    }

    /// The current player loses their turn.
    fn skip_current(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let player = self.seats[self.current].id;
        info!(player = %player, "is skipped");
        self.log(TurnEvent::Skipped { player });
        self.advance();
    }

    /// Reverse the seating order, keeping the same player current.
    fn reverse(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.seats.reverse();
        self.current = self.seats.len() - 1 - self.current;
        info!("order reversed");
        self.log(TurnEvent::Reversed);
    }

    fn check_end(&mut self) -> Option<GameResult> {
        let winner = self.seats.iter().find(|s| s.hand.is_empty())?.id;

        self.phase = self.phase.on(PhaseEvent::RoundOver);
        info!(winner = %winner, turns = self.turn, "round over");
        self.log(TurnEvent::RoundOver { winner });
        Some(GameResult {
            winner,
            turns: self.turn,
        })
    }

    fn log(&mut self, event: TurnEvent) {
        self.events.push_back(EventRecord::new(self.turn, event));
    }

    fn seat_of(&self, player: PlayerId) -> Option<usize> {
        self.seats.iter().position(|s| s.id == player)
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a round is in progress.
    #[must_use]
    pub fn is_game_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Card that decides legality, once a round has been dealt.
    #[must_use]
    pub fn top_of_discard(&self) -> Option<Card> {
        self.piles.top()
    }

    /// Whether `card` may be played on the current top card.
    #[must_use]
    pub fn is_legal(&self, card: &Card) -> bool {
        self.piles.top().is_some_and(|top| card.is_playable_on(&top))
    }

    /// The read-only view agents receive.
    #[must_use]
    pub fn view(&self) -> Option<GameView> {
        self.piles.top().map(GameView::new)
    }

    /// Snapshot of a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<Vec<Card>> {
        self.seat_of(player).map(|idx| self.seats[idx].hand.to_vec())
    }

    #[must_use]
    pub fn hand_len(&self, player: PlayerId) -> Option<usize> {
        self.seat_of(player).map(|idx| self.seats[idx].hand.len())
    }

    /// Player to act (the first seat when no round is running).
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.seats.get(self.current).map(|s| s.id)
    }

    /// Players in current seating order.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        self.seats.iter().map(|s| s.id).collect()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.piles.draw_len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.piles.discard_len()
    }

    /// Physical cards across hands and piles; 52 for any dealt round.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.piles.physical_count() + self.seats.iter().map(|s| s.hand.len()).sum::<usize>()
    }

    /// Turns played in the current (or last) round.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Event log of the current (or last) round. O(1) to clone.
    #[must_use]
    pub fn events(&self) -> &Vector<EventRecord> {
        &self.events
    }
}

impl std::fmt::Debug for CrazyEights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrazyEights")
            .field("phase", &self.phase)
            .field("players", &self.players())
            .field("current", &self.current_player())
            .field("top", &self.piles.top())
            .field("turn", &self.turn)
            .finish()
    }
}
