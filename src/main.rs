use mensura::{Dimension, EN, culture, parse_in};
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match parse_in(&config.input, config.dimension, config.culture) {
        Ok(quantity) => {
            let base = mensura::catalog()
                .base_unit(config.dimension)
                .map(|u| u.name)
                .unwrap_or("base units");
            println!("{} {}", quantity.base_value(), base);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input: String,
    dimension: Dimension,
    culture: &'static mensura::Culture,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut dimension = Dimension::Length;
    let mut selected = &EN;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("mensura {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-d" | "--dimension" => {
                let value = args.next().ok_or_else(|| "error: --dimension expects a value".to_string())?;
                dimension = parse_dimension(&value)?;
            }
            "-c" | "--culture" => {
                let value = args.next().ok_or_else(|| "error: --culture expects a value".to_string())?;
                selected = parse_culture(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--dimension=") => {
                dimension = parse_dimension(arg.trim_start_matches("--dimension="))?;
            }
            _ if arg.starts_with("--culture=") => {
                selected = parse_culture(arg.trim_start_matches("--culture="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, dimension, culture: selected })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_dimension(value: &str) -> Result<Dimension, String> {
    Dimension::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
        format!("error: unknown dimension '{value}' (expected one of: {})", names.join(", "))
    })
}

fn parse_culture(value: &str) -> Result<&'static mensura::Culture, String> {
    culture(value).ok_or_else(|| format!("error: unknown culture '{value}' (expected en, de or sv)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "mensura {version}

Culture-aware quantity parser CLI. Prints the parsed value in the
dimension's base unit.

Usage:
  mensura [OPTIONS] [--] <input...>
  mensura [OPTIONS] --input <text>

Options:
  -i, --input <text>        Quantity text to parse (e.g. \"2.5 kg\", \"2' 4\\\"\").
                            If omitted, reads remaining args or stdin.
  -d, --dimension <name>    Dimension to parse as. Default: length.
  -c, --culture <id>        Culture for numbers and abbreviations (en, de, sv).
                            Default: en.
  -h, --help                Show this help message.
  -V, --version             Print version information.

Exit codes:
  0  Success.
  1  Parse failure.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
