use crate::runner;
use std::io::{self, Write};

/// Interactive loop. A blank line (or end of input) quits; `#showTree`
/// toggles the tree dump and `#cls` clears the terminal.
pub fn start(mut show_tree: bool) -> io::Result<()> {
    println!("dacalc v0.1.0");
    println!("Enter an expression, or a blank line to quit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF reached (Ctrl+D or piped input ended)
            println!();
            break;
        }

        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            break;
        }

        match line.trim() {
            "#showTree" => {
                show_tree = !show_tree;
                println!(
                    "{}",
                    if show_tree {
                        "Showing parse trees."
                    } else {
                        "Not showing parse trees."
                    }
                );
            }
            "#cls" => {
                print!("\x1B[2J\x1B[1;1H");
                io::stdout().flush()?;
            }
            _ => {
                runner::run(line, show_tree);
            }
        }
    }

    Ok(())
}
