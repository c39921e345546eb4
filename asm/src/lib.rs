mod assemble;
mod error;
mod msg;
mod parser;
mod symbols;
mod util;

pub use assemble::{assemble, collect_labels, encode, Redefinition};
pub use error::Error;
pub use msg::Msg;
pub use parser::{Line, Stmt, Value};
pub use symbols::Symbols;
pub use util::print_listing;
