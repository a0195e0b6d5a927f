use anyhow::Result;
use linedit_config::Config;
use linedit_engine::{Editor, LoadMode};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

const MENU: &str = "\
Commands:
  1  append text            8  delete range
  2  add empty line         9  cut
  3  print lines           10  copy
  4  save to file          11  paste
  5  load from file        12  undo
  6  search substring      13  redo
  7  insert at position     0  quit";

fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let load_mode = match config.load_mode {
        linedit_config::LoadMode::Replace => LoadMode::Replace,
        linedit_config::LoadMode::Append => LoadMode::Append,
    };
    let mut editor = Editor::with_undo_streak_limit(config.undo_streak_limit);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut editor, load_mode, stdin.lock(), stdout.lock())
}

/// The numeric-menu loop: read a command code, prompt for its
/// parameters, dispatch to the editor, print the outcome. Engine errors
/// are printed and the session continues; only EOF or the quit command
/// end the loop.
fn run_shell<R: BufRead, W: Write>(
    editor: &mut Editor,
    load_mode: LoadMode,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{MENU}")?;

    loop {
        write!(output, "Write command 0-13: ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };

        let command: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "Not a command number: {}", line.trim())?;
                continue;
            }
        };

        match command {
            0 => return Ok(()),
            1 => {
                let Some(text) = prompt(&mut input, &mut output, "Write text to append: ")? else {
                    return Ok(());
                };
                editor.append_text(&text);
            }
            2 => {
                editor.add_empty_line();
            }
            3 => {
                for (i, line) in editor.lines().iter().enumerate() {
                    writeln!(output, "{}: {}", i + 1, line)?;
                }
            }
            4 => {
                let Some(name) = prompt(&mut input, &mut output, "Write file name to SAVE: ")?
                else {
                    return Ok(());
                };
                match editor.save(Path::new(name.trim())) {
                    Ok(()) => writeln!(output, "Buffer saved to {}", name.trim())?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            5 => {
                let Some(name) = prompt(&mut input, &mut output, "Write file name to LOAD: ")?
                else {
                    return Ok(());
                };
                match editor.load(Path::new(name.trim()), load_mode) {
                    Ok(read) => writeln!(output, "Loaded {read} line(s) from {}", name.trim())?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            6 => {
                let Some(pattern) =
                    prompt(&mut input, &mut output, "Enter the substring to search for: ")?
                else {
                    return Ok(());
                };
                let matches = editor.find(pattern.trim());
                if matches.is_empty() {
                    writeln!(output, "Substring not found in any line.")?;
                } else {
                    for m in matches {
                        writeln!(output, "Found in line {}, position {}", m.line, m.position)?;
                    }
                }
            }
            7 => {
                let Some((line, position)) = prompt_line_and_position(&mut input, &mut output)?
                else {
                    return Ok(());
                };
                let Some(text) = prompt(&mut input, &mut output, "Enter substring to insert: ")?
                else {
                    return Ok(());
                };
                if let Err(e) = editor.insert_at(line, position, &text) {
                    writeln!(output, "{e}")?;
                }
            }
            8 => {
                let Some((line, position, length)) =
                    prompt_range(&mut input, &mut output)?
                else {
                    return Ok(());
                };
                match editor.delete_range(line, position, length) {
                    Ok(removed) => writeln!(output, "Deleted \"{removed}\"")?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            9 => {
                let Some((line, position, length)) =
                    prompt_range(&mut input, &mut output)?
                else {
                    return Ok(());
                };
                match editor.cut(line, position, length) {
                    Ok(removed) => writeln!(output, "Cut \"{removed}\"")?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            10 => {
                let Some((line, position, length)) =
                    prompt_range(&mut input, &mut output)?
                else {
                    return Ok(());
                };
                match editor.copy(line, position, length) {
                    Ok(()) => writeln!(output, "Copied \"{}\"", editor.clipboard().get())?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            11 => {
                let Some((line, position)) = prompt_line_and_position(&mut input, &mut output)?
                else {
                    return Ok(());
                };
                if let Err(e) = editor.paste(line, position) {
                    writeln!(output, "{e}")?;
                }
            }
            12 => {
                if !editor.undo() {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            13 => {
                if !editor.redo() {
                    writeln!(output, "Nothing to redo.")?;
                }
            }
            _ => {
                writeln!(output, "The command is not implemented.")?;
            }
        }
    }
}

/// One raw input line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    read_line(input)
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<usize>> {
    loop {
        let Some(line) = prompt(input, output, message)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(output, "Not a number: {}", line.trim())?,
        }
    }
}

fn prompt_line_and_position<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<(usize, usize)>> {
    let Some(line) = prompt_number(input, output, "Enter line index: ")? else {
        return Ok(None);
    };
    let Some(position) = prompt_number(input, output, "Enter position: ")? else {
        return Ok(None);
    };
    Ok(Some((line, position)))
}

fn prompt_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<(usize, usize, usize)>> {
    let Some((line, position)) = prompt_line_and_position(input, output)? else {
        return Ok(None);
    };
    let Some(length) = prompt_number(input, output, "Enter length: ")? else {
        return Ok(None);
    };
    Ok(Some((line, position, length)))
}
