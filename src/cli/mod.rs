//! Interactive command loop
pub mod parser;
pub mod session;

pub use parser::{parse_number, parse_selection, Command, ParseCommandError, ParseNumberError};
pub use session::{Session, SessionCounters, SessionState};
