use color_print::cformat;

use crate::parser::{Line, Stmt, Value};
use crate::symbols::Symbols;

/// Print an assembly listing: program counter, binary word, statement and
/// comment for every source line.
pub fn print_listing(path: &str, lines: &[Line], symbols: &Symbols) {
    println!("{}+------[{}]", "-".repeat(24), path);
    let mut pc: u16 = 0;
    for line in lines {
        let comment = match line.comment() {
            Some(comment) => cformat!("<dim>//{}</>", comment),
            None => String::new(),
        };
        let body = match line.stmt() {
            None => format!("{:24}| {:>4}: {}", "", line.no(), comment),
            Some(Stmt::Label(name)) => {
                let label = cformat!("<green>({})</>", name);
                format!("{:24}| {:>4}: {} {}", "", line.no(), label, comment)
            }
            Some(stmt) => {
                let bin = match stmt.resolve(symbols) {
                    Some(inst) => format!("{:016b}", inst.to_bin()),
                    None => "?".repeat(16),
                };
                let body = format!(
                    "[{:04X}] {} | {:>4}:   {} {}",
                    pc,
                    bin,
                    line.no(),
                    stmt_cformat(stmt, symbols),
                    comment
                );
                pc += 1;
                body
            }
        };
        println!("{}", body);
    }
    println!("{}+{}", "-".repeat(24), "-".repeat(40));
}

fn stmt_cformat(stmt: &Stmt, symbols: &Symbols) -> String {
    match stmt {
        Stmt::At(Value::Literal(value)) => cformat!("<red>@</><yellow>{}</>", value),
        Stmt::At(Value::Symbol(name)) => match symbols.get(name) {
            Some(addr) => cformat!("<red>@</><green>{}(0x{:04X})</>", name, addr),
            None => cformat!("<red>@</><red,underline>{}</>", name),
        },
        Stmt::Comp { dest, comp, jump } => {
            cformat!("<blue>{:<4}</><red>{:<4}</> <blue>{}</>", dest, comp, jump)
        }
        Stmt::Label(_) => String::new(),
    }
}
