use clap::Parser;
use color_print::cprintln;
use hackasm::{collect_labels, encode, print_listing, Error, Line, Msg, Symbols};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: PathBuf,

    /// Output file (defaults to the input with a .hack extension)
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    let args = Args::parse();
    println!("Hack Assembler");

    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        if let Some(cause) = std::error::Error::source(&err) {
            cprintln!("<red,bold>cause</>: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let path = args.input.display().to_string();
    if args.input.extension().and_then(|ext| ext.to_str()) != Some("asm") {
        return Err(Error::NotAsm(path));
    }

    println!("1. Read Source and Parse Lines");
    println!("  < {}", path);
    let file = File::open(&args.input).map_err(|err| Error::FileOpen(path.clone(), err))?;
    let mut lines = vec![];
    let mut errors = 0;
    for (idx, raw) in BufReader::new(file).lines().enumerate() {
        let raw = raw.map_err(Error::FileRead)?;
        let (line, errs) = Line::parse(&path, idx, &raw);
        for err in errs {
            Msg::Error(err.to_string()).diag(&line);
            errors += 1;
        }
        lines.push(line);
    }

    println!("2. Collect Labels");
    let mut symbols = Symbols::new();
    for redef in collect_labels(&lines, &mut symbols) {
        Msg::Warn(format!("Re-defined label: `{}`", redef.name)).diag(&lines[redef.line_idx]);
        Msg::Note("Already defined here. The value has been overridden.".to_string())
            .diag(&lines[redef.prev_idx]);
    }

    if errors > 0 {
        return Err(Error::Aborted(errors));
    }

    println!("3. Resolve Symbols and Generate Binary");
    let words = encode(&lines, &mut symbols);
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("hack"));
    let out = out_path.display().to_string();
    println!("  > {}", out);
    let mut file = File::create(&out_path).map_err(|err| Error::FileCreate(out.clone(), err))?;
    for word in &words {
        writeln!(file, "{}", word).map_err(|err| Error::FileWrite(out.clone(), err))?;
    }

    if args.dump {
        print_listing(&path, &lines, &symbols);
    }
    Ok(())
}
