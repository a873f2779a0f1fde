//! Interactive sell/restock session.
//!
//! A session reads one line at a time from any `BufRead` and writes the text
//! protocol to any `Write`, so scripted input can drive it end to end. Every
//! rejected input is reported and control returns to the command prompt;
//! only `Exit` (or end of input) ends the loop.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cli::parser::{parse_number, parse_selection, Command};
use crate::config::AppConfig;
use crate::{InventoryService, Product};

const PROMPT: &str = "Welcome, would you like to process an order? Please choose: Sell, Restock, or Exit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCommand,
    Selling,
    Restocking,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transaction {
    Sell,
    Restock,
}

impl Transaction {
    fn verb(self) -> &'static str {
        match self { Self::Sell => "sell", Self::Restock => "restock" }
    }
    fn past_tense(self) -> &'static str {
        match self { Self::Sell => "Sold", Self::Restock => "Restocked" }
    }
}

/// Running totals over the successful transactions of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionCounters {
    pub sell_operations: u64,
    pub units_sold: u64,
    pub restock_operations: u64,
    pub units_restocked: u64,
}

impl SessionCounters {
    fn record(&mut self, kind: Transaction, units: i64) {
        let units = units.unsigned_abs();
        match kind {
            Transaction::Sell => {
                self.sell_operations += 1;
                self.units_sold = self.units_sold.saturating_add(units);
            }
            Transaction::Restock => {
                self.restock_operations += 1;
                self.units_restocked = self.units_restocked.saturating_add(units);
            }
        }
    }
}

#[derive(Serialize)]
struct SessionSummary<'a> {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    #[serde(flatten)]
    counters: &'a SessionCounters,
}

pub struct Session<R, W> {
    id: Uuid,
    started_at: DateTime<Utc>,
    input: R,
    output: W,
    inventory: Vec<Product>,
    service: InventoryService,
    counters: SessionCounters,
    state: SessionState,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, inventory: Vec<Product>, config: AppConfig) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            input,
            output,
            inventory,
            service: InventoryService::new(),
            counters: SessionCounters::default(),
            state: SessionState::AwaitingCommand,
            config,
        }
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn state(&self) -> SessionState { self.state }
    pub fn counters(&self) -> SessionCounters { self.counters }
    pub fn inventory(&self) -> &[Product] { &self.inventory }

    /// Drive the session until it exits and return the final counters.
    pub fn run(mut self) -> io::Result<SessionCounters> {
        let span = tracing::info_span!("session", id = %self.id);
        let _guard = span.enter();
        while self.state != SessionState::Exiting {
            self.step()?;
        }
        self.output.flush()?;
        Ok(self.counters)
    }

    /// Perform one transition of the state machine.
    pub fn step(&mut self) -> io::Result<SessionState> {
        self.state = match self.state {
            SessionState::AwaitingCommand => self.await_command()?,
            SessionState::Selling => self.transact(Transaction::Sell)?,
            SessionState::Restocking => self.transact(Transaction::Restock)?,
            SessionState::Exiting => SessionState::Exiting,
        };
        Ok(self.state)
    }

    fn await_command(&mut self) -> io::Result<SessionState> {
        writeln!(self.output, "{PROMPT}")?;
        let Some(line) = self.read_line()? else {
            return self.finish();
        };
        match line.parse::<Command>() {
            Ok(Command::Sell) => Ok(SessionState::Selling),
            Ok(Command::Restock) => Ok(SessionState::Restocking),
            Ok(Command::Exit) => self.finish(),
            Err(e) => {
                debug!(input = %line.trim(), "rejected command");
                writeln!(self.output, "Error: {e}")?;
                Ok(SessionState::AwaitingCommand)
            }
        }
    }

    fn transact(&mut self, kind: Transaction) -> io::Result<SessionState> {
        let verb = kind.verb();
        writeln!(self.output, "Processing {verb}...")?;
        writeln!(self.output, "Which product would you like to {verb}? Enter the Product number:")?;
        self.display_inventory()?;

        let Some(line) = self.read_line()? else {
            return self.finish();
        };
        let Some(index) = parse_selection(&line, self.inventory.len()) else {
            debug!(input = %line.trim(), "rejected product selection");
            writeln!(self.output, "Invalid product selection.")?;
            return Ok(SessionState::AwaitingCommand);
        };

        writeln!(self.output, "How many would you like to {verb}?")?;
        let Some(line) = self.read_line()? else {
            return self.finish();
        };
        let quantity = match parse_number(&line) {
            Ok(n) if n > 0 => n,
            Ok(_) => {
                writeln!(self.output, "Error: Quantity must be greater than 0.")?;
                return Ok(SessionState::AwaitingCommand);
            }
            Err(e) => {
                debug!(input = %line.trim(), error = %e, "rejected quantity");
                writeln!(self.output, "Please enter a valid quantity.")?;
                return Ok(SessionState::AwaitingCommand);
            }
        };

        let result = match kind {
            Transaction::Sell => self.service.sell_product(self.inventory.get_mut(index), quantity),
            Transaction::Restock => self.service.restock_product(self.inventory.get_mut(index), quantity),
        };
        match result {
            Ok(()) => {
                let product = &mut self.inventory[index];
                for event in product.take_events() {
                    debug!(?event, "domain event");
                }
                writeln!(self.output, "{} {} of {}.", kind.past_tense(), quantity, product.name())?;
                writeln!(self.output, "{} remaining in stock.", product.quantity_in_stock())?;
                self.counters.record(kind, quantity);
            }
            Err(e) => {
                info!(product = index + 1, quantity, error = %e, "transaction rejected");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(SessionState::AwaitingCommand)
    }

    fn display_inventory(&mut self) -> io::Result<()> {
        for (i, product) in self.inventory.iter().enumerate() {
            writeln!(self.output, "No: {}\tProduct: {}\tStock: {}", i + 1, product.name(), product.quantity_in_stock())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<SessionState> {
        let c = self.counters;
        writeln!(self.output, "Goodbye!")?;
        writeln!(self.output, "Thank you for using {} service: Here is a summary of your usage today", self.config.service_name)?;
        writeln!(self.output, "Number of sell operations: {}", c.sell_operations)?;
        writeln!(self.output, "Total number of units sold: {}", c.units_sold)?;
        writeln!(self.output, "Number of restock operations: {}", c.restock_operations)?;
        writeln!(self.output, "Total number of units restocked: {}", c.units_restocked)?;
        writeln!(self.output, "Have a nice day! :)")?;

        let summary = SessionSummary { session_id: self.id, started_at: self.started_at, ended_at: Utc::now(), counters: &c };
        match serde_json::to_string(&summary) {
            Ok(json) => info!(summary = %json, "session finished"),
            Err(e) => warn!(error = %e, "could not encode session summary"),
        }
        Ok(SessionState::Exiting)
    }

    /// `None` at end of input. Bytes that are not UTF-8 are replaced, so a
    /// garbled line is rejected by the normal parsers instead of ending the loop.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            warn!("input closed, ending session");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
