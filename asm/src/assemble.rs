use arch::inst::Inst;
use indexmap::IndexMap;

use crate::parser::{Line, Stmt, Value};
use crate::symbols::Symbols;

/// A label bound more than once. The later definition wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redefinition {
    pub name: String,
    /// Line index of the overridden definition.
    pub prev_idx: usize,
    /// Line index of the redefinition.
    pub line_idx: usize,
}

/// Pass 1: bind every label to the address of the instruction that follows
/// it. Labels do not advance the program counter.
pub fn collect_labels(lines: &[Line], symbols: &mut Symbols) -> Vec<Redefinition> {
    let mut redefs = vec![];
    let mut sites: IndexMap<String, usize> = IndexMap::new();
    let mut pc: u16 = 0;
    for line in lines {
        match line.stmt() {
            Some(Stmt::Label(name)) => {
                if let Some(prev_idx) = sites.insert(name.clone(), line.idx()) {
                    redefs.push(Redefinition {
                        name: name.clone(),
                        prev_idx,
                        line_idx: line.idx(),
                    });
                }
                symbols.define(name, pc);
            }
            Some(_) => pc += 1,
            None => {}
        }
    }
    redefs
}

/// Pass 2: allocate variables in first-use order and emit one 16-bit word
/// per instruction, in source order. Labels emit nothing.
pub fn encode(lines: &[Line], symbols: &mut Symbols) -> Vec<String> {
    let mut words = vec![];
    for line in lines {
        let inst = match line.stmt() {
            Some(Stmt::At(Value::Literal(value))) => Inst::A(*value),
            Some(Stmt::At(Value::Symbol(name))) => Inst::A(symbols.resolve(name)),
            Some(Stmt::Comp { dest, comp, jump }) => Inst::C {
                dest: *dest,
                comp: *comp,
                jump: *jump,
            },
            Some(Stmt::Label(_)) | None => continue,
        };
        words.push(format!("{:016b}", inst.to_bin()));
    }
    words
}

/// Two sequential passes over one immutable line sequence, sharing a fresh
/// symbol table. All labels must be bound before the first variable is
/// allocated, so a forward reference never turns into a spurious variable.
/// On a duplicate label the later definition wins; use [`collect_labels`]
/// directly to report redefinitions.
pub fn assemble(lines: &[Line]) -> Vec<String> {
    let mut symbols = Symbols::new();
    collect_labels(lines, &mut symbols);
    encode(lines, &mut symbols)
}
