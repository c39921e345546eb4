use arch::ram::{Ram, PREDEFINED};
use indexmap::IndexMap;

/// Symbol name to address map, seeded with the architecture's predefined
/// symbols. One fresh table per assembly run.
pub struct Symbols {
    table: IndexMap<String, u16>,
    next_var: u16,
}

impl Symbols {
    pub fn new() -> Self {
        Symbols {
            table: PREDEFINED.iter().cloned().collect(),
            next_var: Ram::VAR_BASE,
        }
    }

    /// Bind a label to a program address. Returns the previous binding if
    /// the name was already taken.
    pub fn define(&mut self, name: &str, addr: u16) -> Option<u16> {
        self.table.insert(name.to_string(), addr)
    }

    /// Address of `name`, allocating the next free variable cell on first
    /// sight of an unbound name.
    pub fn resolve(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.table.get(name) {
            return *addr;
        }
        let addr = self.next_var;
        self.table.insert(name.to_string(), addr);
        self.next_var += 1;
        addr
    }

    /// Lookup without allocation.
    pub fn get(&self, name: &str) -> Option<u16> {
        self.table.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined() {
        let symbols = Symbols::new();
        assert_eq!(symbols.get("R0"), Some(0));
        assert_eq!(symbols.get("R15"), Some(15));
        assert_eq!(symbols.get("SP"), Some(0));
        assert_eq!(symbols.get("LCL"), Some(1));
        assert_eq!(symbols.get("ARG"), Some(2));
        assert_eq!(symbols.get("THIS"), Some(3));
        assert_eq!(symbols.get("THAT"), Some(4));
        assert_eq!(symbols.get("SCREEN"), Some(16384));
        assert_eq!(symbols.get("KBD"), Some(24576));
        assert_eq!(symbols.get("loop"), None);
    }

    #[test]
    fn variable_allocation() {
        let mut symbols = Symbols::new();
        assert_eq!(symbols.resolve("first"), 16);
        assert_eq!(symbols.resolve("second"), 17);
        assert_eq!(symbols.resolve("first"), 16);
        assert_eq!(symbols.resolve("third"), 18);
    }

    #[test]
    fn labels_win_over_allocation() {
        let mut symbols = Symbols::new();
        symbols.define("END", 7);
        assert_eq!(symbols.resolve("END"), 7);
        assert_eq!(symbols.resolve("var"), 16);
    }

    #[test]
    fn redefinition_returns_previous() {
        let mut symbols = Symbols::new();
        assert_eq!(symbols.define("X", 3), None);
        assert_eq!(symbols.define("X", 9), Some(3));
        assert_eq!(symbols.get("X"), Some(9));
    }
}
