use hexent::{Action, Input, TextEncoding, demo, encode, write_output};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tokio::sync::mpsc;

const EXIT_WORDS: &[&str] = &["quit", "exit", "q"];
const PROMPT: &str = "Enter text: ";
const FAREWELL: &str = "Goodbye!";

#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Quit,
    Skip,
    Show(String),
}

fn respond(line: &str) -> Reply {
    let line = line.trim();

    if EXIT_WORDS
        .iter()
        .any(|word| line.eq_ignore_ascii_case(word))
    {
        return Reply::Quit;
    }
    if line.is_empty() {
        return Reply::Skip;
    }

    Reply::Show(format!(
        "HTML Entities: {}\nCharacter Mapping:\n{}\n",
        encode(line),
        demo(line)
    ))
}

pub fn transform(
    action: Action,
    input: Option<&str>,
    file: Option<&Path>,
    output: Option<&Path>,
    encoding: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = TextEncoding::from_label(encoding)?;
    let content = Input::select(input, file).read(encoding)?;

    log::debug!("running {action} over {} characters", content.chars().count());
    let result = action.apply(&content);

    match output {
        Some(path) => {
            write_output(path, &result, encoding)?;
            writeln!(out, "Output written to '{}'", path.display())?;
        }
        None => writeln!(out, "{result}")?,
    }

    Ok(())
}

pub async fn interactive() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();

    writeln!(stdout, "HTML Hex Entity Encoder")?;
    writeln!(stdout, "{}", "=".repeat(30))?;
    writeln!(stdout, "Convert characters to &#xHH; format")?;
    writeln!(stdout, "Type 'quit' to exit\n")?;

    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();

    // stdin is read on a plain thread, outside the runtime.
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        return;
                    }
                }
                Err(error) => {
                    eprintln!("Input error: {error}");
                    return;
                }
            }
        }
    });

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                writeln!(stdout, "\n{FAREWELL}")?;
                break;
            }
            line = line_rx.recv() => {
                let Some(line) = line else {
                    writeln!(stdout, "\n{FAREWELL}")?;
                    break;
                };

                match respond(&line) {
                    Reply::Quit => {
                        writeln!(stdout, "{FAREWELL}")?;
                        break;
                    }
                    Reply::Skip => continue,
                    Reply::Show(text) => writeln!(stdout, "{text}")?,
                }
            }
        }
    }

    writeln!(stdout, "\nCommand-line usage examples:")?;
    writeln!(stdout, "  hexent encode -i 'Hello'")?;
    writeln!(stdout, "  hexent demo -i 'S'")?;
    writeln!(stdout, "  hexent decode -i '&#x48;&#x65;&#x6C;&#x6C;&#x6F;'")?;

    Ok(())
}
