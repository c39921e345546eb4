use arch::{
    comp::Comp,
    dest::Dest,
    inst::{Inst, ADDR_MAX},
    jump::Jump,
};

use crate::{error::Error, symbols::Symbols};

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    comment: Option<String>,
    stmt: Option<Stmt>,
}

impl Line {
    pub fn parse(path: &str, idx: usize, raw: &str) -> (Line, Vec<Error>) {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code, Some(comment.to_string())),
            None => (raw, None),
        };
        let (stmt, errs) = Stmt::parse(code);
        let line = Line {
            path: path.to_string(),
            idx,
            raw: raw.to_string(),
            comment,
            stmt,
        };
        (line, errs)
    }

    pub fn stmt(&self) -> Option<&Stmt> {
        self.stmt.as_ref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn pos(&self) -> String {
        format!("{}:{:0>4}", self.path, self.idx + 1)
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `@value`: address instruction.
    At(Value),
    /// `(name)`: binds `name` to the address of the next instruction.
    Label(String),
    /// `dest=comp;jump`: compute instruction.
    Comp { dest: Dest, comp: Comp, jump: Jump },
}

impl Stmt {
    fn parse(code: &str) -> (Option<Stmt>, Vec<Error>) {
        // One instruction per line, nothing after the first word
        let Some(word) = code.split_whitespace().next() else {
            return (None, vec![]);
        };

        let result = if let Some(sym) = word.strip_prefix('@') {
            Value::parse(sym).map(Stmt::At)
        } else if let Some(inner) = word.strip_prefix('(') {
            match inner.strip_suffix(')') {
                Some(name) => check_symbol(name).map(|()| Stmt::Label(name.to_string())),
                None => Err(Error::UnclosedLabel(word.to_string())),
            }
        } else {
            Self::parse_comp(word)
        };

        match result {
            Ok(stmt) => (Some(stmt), vec![]),
            Err(err) => (None, vec![err]),
        }
    }

    fn parse_comp(word: &str) -> Result<Stmt, Error> {
        let (dest, rest) = match word.split_once('=') {
            Some((dest, rest)) => {
                let dest =
                    Dest::parse(dest).ok_or_else(|| Error::UnknownDest(dest.to_string()))?;
                (dest, rest)
            }
            None => (Dest::Null, word),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => {
                let jump =
                    Jump::parse(jump).ok_or_else(|| Error::UnknownJump(jump.to_string()))?;
                (comp, jump)
            }
            None => (rest, Jump::Null),
        };
        if comp.is_empty() {
            return Err(Error::EmptyComp);
        }
        let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComp(comp.to_string()))?;
        Ok(Stmt::Comp { dest, comp, jump })
    }

    /// Lookup-only resolution to a concrete instruction. `None` for labels
    /// and for symbols that are not bound yet.
    pub fn resolve(&self, symbols: &Symbols) -> Option<Inst> {
        match self {
            Stmt::At(Value::Literal(value)) => Some(Inst::A(*value)),
            Stmt::At(Value::Symbol(name)) => symbols.get(name).map(Inst::A),
            Stmt::Comp { dest, comp, jump } => Some(Inst::C {
                dest: *dest,
                comp: *comp,
                jump: *jump,
            }),
            Stmt::Label(_) => None,
        }
    }
}

// ----------------------------------------------------------------------------
// Address value

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Literal(u16),
    Symbol(String),
}

impl Value {
    fn parse(s: &str) -> Result<Value, Error> {
        if s.is_empty() {
            return Err(Error::EmptySymbol);
        }
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            return match s.parse::<u32>() {
                Ok(v) if v <= ADDR_MAX as u32 => Ok(Value::Literal(v as u16)),
                Ok(v) => Err(Error::AddressOutOfRange(v)),
                Err(_) => Err(Error::BadSymbol(s.to_string())),
            };
        }
        check_symbol(s)?;
        Ok(Value::Symbol(s.to_string()))
    }
}

fn check_symbol(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptySymbol);
    }
    let valid = !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':'));
    if !valid {
        return Err(Error::BadSymbol(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stmt(code: &str) -> Stmt {
        let (line, errs) = Line::parse("test.asm", 0, code);
        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        line.stmt().expect("no statement").clone()
    }

    fn err(code: &str) -> Error {
        let (_, mut errs) = Line::parse("test.asm", 0, code);
        errs.pop().expect("no error")
    }

    #[test]
    fn address_literal() {
        assert_eq!(stmt("@2"), Stmt::At(Value::Literal(2)));
        assert_eq!(stmt("@32767"), Stmt::At(Value::Literal(32767)));
    }

    #[test]
    fn address_symbol() {
        assert_eq!(stmt("@sum"), Stmt::At(Value::Symbol("sum".to_string())));
        assert_eq!(
            stmt("@loop$exit.0:x"),
            Stmt::At(Value::Symbol("loop$exit.0:x".to_string()))
        );
    }

    #[test]
    fn label() {
        assert_eq!(stmt("(LOOP)"), Stmt::Label("LOOP".to_string()));
    }

    #[test]
    fn compute_full() {
        assert_eq!(
            stmt("AMD=D|M;JNE"),
            Stmt::Comp {
                dest: Dest::AMD,
                comp: Comp::DOrM,
                jump: Jump::JNE,
            }
        );
    }

    #[test]
    fn compute_without_dest() {
        assert_eq!(
            stmt("0;JMP"),
            Stmt::Comp {
                dest: Dest::Null,
                comp: Comp::Zero,
                jump: Jump::JMP,
            }
        );
    }

    #[test]
    fn compute_without_jump() {
        assert_eq!(
            stmt("M=M+1"),
            Stmt::Comp {
                dest: Dest::M,
                comp: Comp::MPlusOne,
                jump: Jump::Null,
            }
        );
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(Line::parse("test.asm", 0, "").0.stmt(), None);
        assert_eq!(Line::parse("test.asm", 0, "   ").0.stmt(), None);
        assert_eq!(Line::parse("test.asm", 0, "// comment").0.stmt(), None);
    }

    #[test]
    fn trailing_comment() {
        assert_eq!(
            stmt("D=A // load the address"),
            Stmt::Comp {
                dest: Dest::D,
                comp: Comp::A,
                jump: Jump::Null,
            }
        );
        assert_eq!(stmt("@i//inline"), Stmt::At(Value::Symbol("i".to_string())));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(stmt("   @5  "), Stmt::At(Value::Literal(5)));
    }

    #[test]
    fn malformed() {
        assert!(matches!(err("@"), Error::EmptySymbol));
        assert!(matches!(err("D="), Error::EmptyComp));
        assert!(matches!(err(";JMP"), Error::EmptyComp));
        assert!(matches!(err("@32768"), Error::AddressOutOfRange(32768)));
        assert!(matches!(err("@1foo"), Error::BadSymbol(_)));
        assert!(matches!(err("@a-b"), Error::BadSymbol(_)));
        assert!(matches!(err("(LOOP"), Error::UnclosedLabel(_)));
        assert!(matches!(err("F=D"), Error::UnknownDest(_)));
        assert!(matches!(err("D=X"), Error::UnknownComp(_)));
        assert!(matches!(err("0;JXX"), Error::UnknownJump(_)));
    }
}
