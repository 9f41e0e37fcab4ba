//! Inspect glyph fixtures: reconstructed lines, selections, and search hits.
//!
//! Fixtures are JSON files deserializing into `StaticGlyphSource`, one array
//! of glyph records per page.
//!
//! Usage:
//!   cargo run --bin glyph_probe -- lines fixture.json [--page N]
//!   cargo run --bin glyph_probe -- select fixture.json --start X,Y --end X,Y [--page N] [--mode word]
//!   cargo run --bin glyph_probe -- search fixture.json NEEDLE [--case-sensitive] [--max N] [--page N]

use pdf_select::{
    GlyphSource, LineAssembler, Point, SearchOptions, SelectionMode, StaticGlyphSource, TextEngine,
};
use std::process;

enum Command {
    Lines,
    Select,
    Search,
}

struct ProbeConfig {
    command: Command,
    fixture: String,
    needle: String,
    page: Option<usize>,
    start: Point,
    end: Point,
    mode: SelectionMode,
    case_sensitive: bool,
    max_results: usize,
}

impl ProbeConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        if args.len() < 3 {
            return Err("missing command or fixture path".to_string());
        }

        let command = match args[1].as_str() {
            "lines" => Command::Lines,
            "select" => Command::Select,
            "search" => Command::Search,
            other => return Err(format!("unknown command: {}", other)),
        };
        let fixture = args[2].clone();

        let mut needle = String::new();
        let mut page = None;
        let mut start = None;
        let mut end = None;
        let mut mode = SelectionMode::Character;
        let mut case_sensitive = false;
        let mut max_results = 0;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--page" => {
                    i += 1;
                    if i < args.len() {
                        page = Some(parse_number(&args[i], "page")?);
                    }
                },
                "--start" => {
                    i += 1;
                    if i < args.len() {
                        start = Some(parse_point(&args[i])?);
                    }
                },
                "--end" => {
                    i += 1;
                    if i < args.len() {
                        end = Some(parse_point(&args[i])?);
                    }
                },
                "--mode" => {
                    i += 1;
                    if i < args.len() {
                        mode = parse_mode(&args[i])?;
                    }
                },
                "--case-sensitive" => {
                    case_sensitive = true;
                },
                "--max" => {
                    i += 1;
                    if i < args.len() {
                        max_results = parse_number(&args[i], "max results")?;
                    }
                },
                other if !other.starts_with("--") && needle.is_empty() => {
                    needle = other.to_string();
                },
                _ => {},
            }
            i += 1;
        }

        let (start, end) = match command {
            Command::Select => match (start, end) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err("select requires --start X,Y and --end X,Y".to_string()),
            },
            _ => (Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
        };
        if matches!(command, Command::Search) && needle.is_empty() {
            return Err("search requires a needle".to_string());
        }

        Ok(Self {
            command,
            fixture,
            needle,
            page,
            start,
            end,
            mode,
            case_sensitive,
            max_results,
        })
    }
}

fn parse_number(raw: &str, what: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("bad {} value: {}", what, raw))
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", raw))?;
    let x = x
        .trim()
        .parse()
        .map_err(|_| format!("bad x coordinate: {}", x))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| format!("bad y coordinate: {}", y))?;
    Ok(Point::new(x, y))
}

fn parse_mode(raw: &str) -> Result<SelectionMode, String> {
    // A bare number is treated as a click count
    if let Ok(clicks) = raw.parse::<u32>() {
        return Ok(SelectionMode::for_click_count(clicks));
    }
    match raw {
        "character" | "char" => Ok(SelectionMode::Character),
        "word" => Ok(SelectionMode::Word),
        "line" => Ok(SelectionMode::Line),
        other => Err(format!("unknown selection mode: {}", other)),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  glyph_probe lines <fixture.json> [--page N]");
    eprintln!("  glyph_probe select <fixture.json> --start X,Y --end X,Y [--page N] [--mode character|word|line|CLICKS]");
    eprintln!("  glyph_probe search <fixture.json> <needle> [--case-sensitive] [--max N] [--page N]");
}

fn print_lines(source: &StaticGlyphSource, page: usize) -> Result<(), Box<dyn std::error::Error>> {
    let assembler = LineAssembler::new();
    let index = assembler.assemble(page, source.glyph_records(page)?)?;

    println!("Page {}: {} lines", page, index.line_count());
    for (i, line) in index.lines().iter().enumerate() {
        println!(
            "  [{:>3}] top {:8.2}  bottom {:8.2}  {:>3} glyphs  {:?}",
            i,
            line.top(),
            line.bottom(),
            line.glyphs().len(),
            line.text()
        );
    }
    Ok(())
}

fn print_selection(
    engine: &TextEngine<StaticGlyphSource>,
    config: &ProbeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = config.page.unwrap_or(0);
    match engine.select(page, config.start, config.end, config.mode)? {
        Some(selection) => {
            println!("Selected on page {} ({:?} mode):", page, config.mode);
            println!("{:?}", selection.text);
            println!();
            println!("Markers:");
            for marker in &selection.markers {
                println!(
                    "  x {:8.2}  y {:8.2}  w {:8.2}  h {:8.2}",
                    marker.x, marker.y, marker.width, marker.height
                );
            }
        },
        None => println!("No text under the gesture"),
    }
    Ok(())
}

fn print_search(
    engine: &TextEngine<StaticGlyphSource>,
    config: &ProbeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = SearchOptions::new()
        .with_case_insensitive(!config.case_sensitive)
        .with_max_results(config.max_results);

    let results = match config.page {
        Some(page) => engine.search_page(page, &config.needle, &options)?,
        None => engine.search(&config.needle, &options)?,
    };

    println!("{} results for {:?}", results.len(), config.needle);
    for hit in &results {
        println!(
            "  page {:>3}  y {:8.2}  {:?}",
            hit.page,
            hit.marker.top(),
            hit.snippet
        );
    }
    Ok(())
}

fn run(config: &ProbeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(&config.fixture)?;
    let source: StaticGlyphSource = serde_json::from_str(&json)?;

    println!(
        "Glyph fixture: {} ({} pages)",
        config.fixture,
        source.page_count()
    );
    println!();

    match config.command {
        Command::Lines => print_lines(&source, config.page.unwrap_or(0)),
        Command::Select => print_selection(&TextEngine::new(source), config),
        Command::Search => print_search(&TextEngine::new(source), config),
    }
}

fn main() {
    env_logger::init();

    let config = match ProbeConfig::from_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            process::exit(1);
        },
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
