use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

use crate::{Interpreter, Options, Value};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [PROGRAM]\n\
         \n\
         PROGRAM: transformation expression. When omitted, use --program-file.\n\
         The input document is read from stdin unless --input is given and\n\
         must be a JSON object at the top level.\n\
         \n\
         Options:\n\
           -i, --input FILE         Read the input JSON document from FILE\n\
           -f, --program-file FILE  Read the program from FILE\n\
           -o, --output FILE        Write output to FILE (default stdout)\n\
               --validate           Check the program instead of transforming\n\
               --pretty             Pretty-print the transformed output\n\
               --timing             Report execution time on stderr\n\
               --max-depth N        Evaluation depth limit (default 256)\n\
               --functions          List builtin functions and exit\n\
           -h, --help               Show this help\n",
        prog = program
    );
}

struct CliMode {
    program: Option<String>,
    program_file: Option<String>,
    input: Option<String>,
    output: Option<String>,
    validate: bool,
    pretty: bool,
    timing: bool,
    list_functions: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jslt-lite".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut mode = CliMode {
        program: None,
        program_file: None,
        input: None,
        output: None,
        validate: false,
        pretty: false,
        timing: false,
        list_functions: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program_name);
                std::process::exit(0);
            }
            "-i" | "--input" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --input");
                    std::process::exit(2);
                }
                mode.input = Some(args[i].clone());
            }
            "-f" | "--program-file" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --program-file");
                    std::process::exit(2);
                }
                mode.program_file = Some(args[i].clone());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "--validate" => {
                mode.validate = true;
            }
            "--pretty" => {
                mode.pretty = true;
            }
            "--timing" => {
                mode.timing = true;
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --max-depth");
                    std::process::exit(2);
                }
                match args[i].parse::<usize>() {
                    Ok(n) if n > 0 => opts.max_depth = n,
                    _ => {
                        eprintln!("Invalid depth: {}", args[i]);
                        std::process::exit(2);
                    }
                }
            }
            "--functions" => {
                mode.list_functions = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            text => {
                mode.program = Some(text.to_string());
            }
        }
        i += 1;
    }

    (opts, mode)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();
    let interp = Interpreter::with_options(opts);

    if mode.list_functions {
        for function in interp.functions() {
            println!("{:<10} {}", format!("{}()", function.name()), function.description());
        }
        return Ok(());
    }

    let program = match (&mode.program, &mode.program_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            eprintln!("Missing PROGRAM (or --program-file)");
            std::process::exit(2);
        }
    };

    let mut out: Box<dyn Write> = match &mode.output {
        Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    if mode.validate {
        let report = interp.validate(&program);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        out.flush()?;
        if !report.valid {
            std::process::exit(1);
        }
        return Ok(());
    }

    let raw = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let document: serde_json::Value = serde_json::from_str(&raw)?;
    if !document.is_object() {
        eprintln!("Input document must be a JSON object");
        std::process::exit(2);
    }

    let outcome = interp.transform(&Value::from(document), &program);
    if mode.timing {
        eprintln!("execution_time_ms: {:.3}", outcome.execution_time_ms);
    }
    match (outcome.success, outcome.output) {
        (true, Some(output)) => {
            let rendered = if mode.pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            writeln!(out, "{rendered}")?;
            out.flush()?;
            Ok(())
        }
        _ => {
            eprintln!(
                "transform failed: {}",
                outcome.error.as_deref().unwrap_or("unknown error")
            );
            std::process::exit(1);
        }
    }
}
