use anyhow::{Context, Result, bail};
use markdown_fmtkeys_config::Keymap;
use markdown_fmtkeys_engine::{BufferEditor, FormatCommand, FormatPlugin, HostEditor, Position};
use std::{env, fs, process};

const USAGE: &str = "\
Usage: markdown-fmtkeys <command-id> <file> [lines] [--write] [--keymap <path>]
       markdown-fmtkeys list [--keymap <path>]

lines   1-based line span to act on: `7` places the caret on line 7,
        `3:9` selects lines 3 through 9. Omitted means the whole file.
--write rewrite the file in place instead of printing to stdout

Command ids: toggle-checklist, toggle-blockquote, toggle-unordered-list,
toggle-ordered-list, remove-formatting, apply-heading-1..6,
increase-heading-level, decrease-heading-level.";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

struct Args {
    command: String,
    file: Option<String>,
    lines: Option<String>,
    write: bool,
    keymap: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut write = false;
    let mut keymap = None;

    let mut raw = env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--write" => write = true,
            "--keymap" => {
                keymap = Some(raw.next().context("--keymap needs a path")?);
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(command) = positional.next() else {
        bail!("missing command id\n\n{USAGE}");
    };

    Ok(Args {
        command,
        file: positional.next(),
        lines: positional.next(),
        write,
        keymap,
    })
}

fn load_keymap(path: Option<&str>) -> Result<Keymap> {
    match path {
        Some(path) => Keymap::load_from_path(path)?
            .with_context(|| format!("keymap file not found: {path}")),
        None => Ok(Keymap::defaults()),
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let keymap = load_keymap(args.keymap.as_deref())?;
    let plugin = FormatPlugin::with_bindings(keymap.bindings);

    if args.command == "list" {
        for binding in plugin.bindings() {
            println!(
                "{:24} {:16} {}",
                binding.command.id(),
                binding.hotkey.to_string(),
                binding.command.name()
            );
        }
        return Ok(());
    }

    if FormatCommand::from_id(&args.command).is_none() {
        bail!("unknown command id `{}` (try `list`)", args.command);
    }
    let Some(file) = args.file else {
        bail!("missing file argument\n\n{USAGE}");
    };

    let text = fs::read_to_string(&file).with_context(|| format!("failed to read {file}"))?;
    let mut editor = BufferEditor::new(&text);
    position_editor(&mut editor, args.lines.as_deref())?;

    plugin.start();
    plugin.dispatch(&args.command, Some(&mut editor));
    plugin.stop();

    let updated = editor.text();
    if args.write {
        fs::write(&file, &updated).with_context(|| format!("failed to write {file}"))?;
        log::info!("rewrote {file}");
    } else {
        print!("{updated}");
    }
    Ok(())
}

/// Point the editor at the requested lines: a single line places the caret
/// at its end, a `from:to` span selects it, and no spec selects the whole
/// document (minus a trailing empty line left by a final newline).
fn position_editor(editor: &mut BufferEditor, lines: Option<&str>) -> Result<()> {
    let count = editor.line_count();

    let (from, to) = match lines {
        None => {
            let mut last = count - 1;
            if last > 0 && editor.line(last).is_empty() {
                last -= 1;
            }
            (0, last)
        }
        Some(spec) => {
            let (from, to) = match spec.split_once(':') {
                Some((from, to)) => (parse_line(from, count)?, parse_line(to, count)?),
                None => {
                    let line = parse_line(spec, count)?;
                    editor.place_caret(Position::new(line, editor.line(line).len()));
                    return Ok(());
                }
            };
            if from > to {
                bail!("line span starts after it ends: {spec}");
            }
            (from, to)
        }
    };

    let end = Position::new(to, editor.line(to).len());
    editor.select(Position::new(from, 0), end);
    Ok(())
}

/// Parse a 1-based line number and convert it to a 0-based index.
fn parse_line(spec: &str, count: usize) -> Result<usize> {
    let line: usize = spec
        .trim()
        .parse()
        .with_context(|| format!("invalid line number `{spec}`"))?;
    if line == 0 || line > count {
        bail!("line {line} is outside the document (1-{count})");
    }
    Ok(line - 1)
}
