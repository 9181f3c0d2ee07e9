use anyhow::Context;
use qigua_core::{decode_codes, divine, Board, Catalog, Reading, RngState, Selection, Slot};
use qigua_data::{assets_dir, load_catalog};
use std::fmt;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiLocale {
    EnUs,
    ZhCn,
}

impl UiLocale {
    fn from_opt(value: Option<&str>) -> Self {
        match value.map(|v| v.to_ascii_lowercase().replace('-', "_")) {
            Some(code) if code.starts_with("zh") => Self::ZhCn,
            _ => Self::EnUs,
        }
    }

    fn text<'a>(self, en: &'a str, zh: &'a str) -> &'a str {
        if matches!(self, Self::ZhCn) {
            zh
        } else {
            en
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Catalog,
    Board { seed: Option<u64> },
    Divine { codes: Vec<String> },
    Draw { seed: Option<u64>, picks: Vec<usize> },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    json: bool,
    locale: UiLocale,
}

#[derive(Debug)]
struct UsageError(String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

fn usage(message: impl Into<String>) -> anyhow::Error {
    UsageError(message.into()).into()
}

const HELP: &str = "\
usage: qigua <command> [options]

commands:
  catalog                         list the 32 pieces
  board [--seed N]                print a shuffled board
  divine CODE CODE CODE CODE CODE read five pieces given as codes (e.g. RK BA RE BR RP)
  draw --picks i,j,k,l,m [--seed N]
                                  shuffle a board and read the picked positions

options:
  --json                          print JSON instead of text
  --locale en_US|zh_CN            heading language";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qigua=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = parse_cli_options(&args).and_then(|options| run(&options)) {
        eprintln!("error: {err:#}");
        let code = if err.downcast_ref::<UsageError>().is_some() {
            eprintln!("{HELP}");
            2
        } else {
            1
        };
        std::process::exit(code);
    }
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut json = false;
    let mut locale = None;
    let mut seed = None;
    let mut picks = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--locale" => locale = Some(next_value(&mut iter, "--locale")?),
            "--seed" => {
                let raw = next_value(&mut iter, "--seed")?;
                seed = Some(
                    raw.parse::<u64>()
                        .map_err(|_| usage(format!("invalid seed {raw:?}")))?,
                );
            }
            "--picks" => {
                let raw = next_value(&mut iter, "--picks")?;
                picks = Some(parse_picks(&raw)?);
            }
            "-h" | "--help" => positional.insert(0, "help".to_string()),
            other if other.starts_with("--") => {
                return Err(usage(format!("unknown option {other}")));
            }
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None | Some("help") => Command::Help,
        Some("catalog") => Command::Catalog,
        Some("board") => Command::Board { seed },
        Some("divine") => Command::Divine {
            codes: positional.by_ref().collect(),
        },
        Some("draw") => Command::Draw {
            seed,
            picks: picks.ok_or_else(|| usage("draw needs --picks"))?,
        },
        Some(other) => return Err(usage(format!("unknown command {other}"))),
    };
    Ok(CliOptions {
        command,
        json,
        locale: UiLocale::from_opt(locale.as_deref()),
    })
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> anyhow::Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| usage(format!("{flag} needs a value")))
}

fn parse_picks(raw: &str) -> anyhow::Result<Vec<usize>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| usage(format!("invalid pick {part:?}")))
        })
        .collect()
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let catalog = load_catalog(&assets_dir()).context("load catalog")?;
    let locale = options.locale;
    match &options.command {
        Command::Help => println!("{HELP}"),
        Command::Catalog => {
            if options.json {
                print_json(&catalog.get_all())?;
            } else {
                println!("{}", render_catalog(&catalog, locale));
            }
        }
        Command::Board { seed } => {
            let board = shuffle(&catalog, *seed);
            if options.json {
                print_json(&board)?;
            } else {
                println!("{}", render_board(&board, locale));
            }
        }
        Command::Divine { codes } => {
            let decoded = decode_codes(codes.iter().map(String::as_str), &catalog)?;
            for code in &decoded.dropped {
                warn!(code = %code, "dropping malformed piece code");
            }
            let count = decoded.tokens.len();
            let selection = Selection::new(decoded.tokens).map_err(|_| {
                usage(format!("divine needs exactly 5 valid piece codes, got {count}"))
            })?;
            print_reading(&divine(&selection), options)?;
        }
        Command::Draw { seed, picks } => {
            let board = shuffle(&catalog, *seed);
            let selection = board.select(picks).map_err(|err| usage(err.to_string()))?;
            if !options.json {
                println!("{}", render_board(&board, locale));
            }
            print_reading(&divine(&selection), options)?;
        }
    }
    Ok(())
}

fn shuffle(catalog: &Catalog, seed: Option<u64>) -> Board {
    let mut rng = seed.map(RngState::from_seed).unwrap_or_else(RngState::from_entropy);
    debug!(seed = rng.seed(), "shuffling board");
    Board::shuffled(catalog, &mut rng)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_reading(reading: &Reading, options: &CliOptions) -> anyhow::Result<()> {
    if options.json {
        print_json(reading)
    } else {
        println!("{}", render_reading(reading, options.locale));
        Ok(())
    }
}

fn render_catalog(catalog: &Catalog, locale: UiLocale) -> String {
    let header = locale.text(
        "code  piece  kind      color  points  element",
        "代碼  棋子  種類      顏色   分數  五行",
    );
    let mut out = vec![header.to_string()];
    for token in catalog.get_all() {
        out.push(format!(
            "{:<5} {:<5} {:<9} {:<6} {:>6}  {}",
            token.code(),
            token.label(),
            locale.text(token.kind.id(), token.kind.name()),
            locale.text(token.color.id(), token.color.name()),
            token.points,
            locale.text(token.element.id(), token.element.name())
        ));
    }
    out.join("\n")
}

fn render_board(board: &Board, locale: UiLocale) -> String {
    let mut out = vec![format!(
        "{} (seed {})",
        locale.text("Board", "棋盤"),
        board.seed
    )];
    for (row, pieces) in board.pieces.chunks(8).enumerate() {
        let cells: Vec<String> = pieces
            .iter()
            .enumerate()
            .map(|(col, token)| {
                let index = row * 8 + col;
                format!("{index:>2}:{}{}", token.label(), token.code())
            })
            .collect();
        out.push(cells.join("  "));
    }
    out.join("\n")
}

fn render_reading(reading: &Reading, locale: UiLocale) -> String {
    let mut out = Vec::new();
    let placed: Vec<String> = Slot::ALL
        .iter()
        .map(|slot| {
            let token = reading.positions.get(*slot);
            let slot = locale.text(slot.id(), slot.name());
            format!("{} {}({})", slot, token.label(), token.code())
        })
        .collect();
    out.push(format!(
        "{}: {}",
        locale.text("Pieces", "棋子"),
        placed.join("  ")
    ));
    out.push(format!(
        "{}: {} ({})",
        locale.text("Balance", "陰陽"),
        if reading.balanced {
            locale.text("balanced", "平衡")
        } else {
            locale.text("unbalanced", "失衡")
        },
        reading.balance_score
    ));
    let missing: Vec<&str> = reading.missing_talents.iter().map(|t| t.name()).collect();
    out.push(format!(
        "{}: {}",
        locale.text("Missing talents", "缺失三才"),
        none_if_empty(&missing, locale)
    ));
    let patterns: Vec<&str> = reading.patterns.iter().map(|p| p.name()).collect();
    out.push(format!(
        "{}: {}",
        locale.text("Patterns", "格局"),
        none_if_empty(&patterns, locale)
    ));
    out.push(String::new());
    out.push(format!("[{}]", locale.text("State", "呈現狀態")));
    out.push(reading.analysis.state.clone());
    out.push(format!("[{}]", locale.text("Interaction", "互動關係")));
    out.push(reading.analysis.interaction.clone());
    out.push(format!("[{}]", locale.text("Give and take", "付出與收穫")));
    out.push(reading.analysis.give_and_take.clone());
    out.push(format!("[{}]", locale.text("Health", "健康")));
    out.push(reading.health.clone());
    out.push(format!("[{}]", locale.text("Suggestions", "建議")));
    for (idx, suggestion) in reading.suggestions.iter().enumerate() {
        out.push(format!("{}. {}", idx + 1, suggestion));
    }
    out.join("\n")
}

fn none_if_empty(items: &[&str], locale: UiLocale) -> String {
    if items.is_empty() {
        locale.text("none", "無").to_string()
    } else {
        items.join(locale.text(", ", "、"))
    }
}
