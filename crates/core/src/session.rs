use crate::{
    draw_winner, filter_eligible, merge, parse_roster, Category, DrawError, Event, EventBus, Mode,
    Participant, RngState,
};

/// Owning state object for one raffle: master roster, derived eligible pool,
/// winners drawn since the pool was last recomputed, and the active mode.
/// All mutation flows through here; callers persist and render afterwards.
#[derive(Debug)]
pub struct Session {
    roster: Vec<Participant>,
    eligible: Vec<Participant>,
    winners: Vec<String>,
    mode: Option<Mode>,
    rng: RngState,
}

impl Session {
    pub fn new(rng: RngState) -> Self {
        Self::restore(Vec::new(), Some(Mode::Normal), rng)
    }

    /// Rebuild from persisted state. The eligible pool is derived on the spot
    /// and winners always start empty.
    pub fn restore(roster: Vec<Participant>, mode: Option<Mode>, rng: RngState) -> Self {
        let eligible = filter_eligible(&roster, mode);
        Self {
            roster,
            eligible,
            winners: Vec::new(),
            mode,
            rng,
        }
    }

    /// Parses and merges one uploaded list. Returns how many records were new.
    pub fn import(&mut self, text: &str, category: Category, events: &mut EventBus) -> usize {
        self.import_records(&parse_roster(text, category), events)
    }

    pub fn import_records(&mut self, incoming: &[Participant], events: &mut EventBus) -> usize {
        let merged = merge(&self.roster, incoming);
        let added = merged.len() - self.roster.len();
        self.roster = merged;
        self.refilter();
        events.push(Event::RosterImported {
            added,
            total: self.roster.len(),
        });
        added
    }

    pub fn set_mode(&mut self, mode: Option<Mode>, events: &mut EventBus) {
        self.mode = mode;
        self.refilter();
        events.push(Event::ModeChanged {
            mode,
            eligible: self.eligible.len(),
        });
    }

    pub fn draw(&mut self, events: &mut EventBus) -> Result<Participant, DrawError> {
        let winner = draw_winner(&mut self.eligible, &mut self.rng)?;
        self.winners.push(winner.name.clone());
        events.push(Event::WinnerDrawn {
            name: winner.name.clone(),
            weight: winner.weight,
            remaining: self.eligible.len(),
        });
        Ok(winner)
    }

    /// Clears every pool. The mode selection survives; persisted state is the
    /// caller's to clear.
    pub fn reset(&mut self, events: &mut EventBus) {
        self.roster.clear();
        self.eligible.clear();
        self.winners.clear();
        events.push(Event::RosterCleared);
    }

    // Every recomputation of the eligible pool invalidates the winners list.
    fn refilter(&mut self) {
        self.eligible = filter_eligible(&self.roster, self.mode);
        self.winners.clear();
    }

    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    pub fn eligible(&self) -> &[Participant] {
        &self.eligible
    }

    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn total_weight(&self) -> u64 {
        self.eligible.iter().map(|entry| u64::from(entry.weight)).sum()
    }
}

/// Draw probability of one entry, as a percentage of the pool's total weight.
/// Rounding for display is the presentation layer's business.
pub fn chance_percent(weight: u32, total_weight: u64) -> f64 {
    if total_weight == 0 {
        return 0.0;
    }
    f64::from(weight) * 100.0 / total_weight as f64
}
