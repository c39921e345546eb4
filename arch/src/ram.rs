use once_cell::sync::Lazy;

/// Well-known RAM addresses.
pub struct Ram;

impl Ram {
    pub const SP: u16 = 0;
    pub const LCL: u16 = 1;
    pub const ARG: u16 = 2;
    pub const THIS: u16 = 3;
    pub const THAT: u16 = 4;
    pub const SCREEN: u16 = 16384;
    pub const KBD: u16 = 24576;

    /// First cell handed out to user variables.
    pub const VAR_BASE: u16 = 16;
}

/// Symbols every program can reference without declaring them.
pub static PREDEFINED: Lazy<Vec<(String, u16)>> = Lazy::new(|| {
    let mut symbols: Vec<(String, u16)> = (0..16).map(|n| (format!("R{n}"), n)).collect();
    for (name, addr) in [
        ("SP", Ram::SP),
        ("LCL", Ram::LCL),
        ("ARG", Ram::ARG),
        ("THIS", Ram::THIS),
        ("THAT", Ram::THAT),
        ("SCREEN", Ram::SCREEN),
        ("KBD", Ram::KBD),
    ] {
        symbols.push((name.to_string(), addr));
    }
    symbols
});
