use std::io::{self, BufRead, Write};

use crate::command::CommandTable;
use crate::define::keyword::Keyword;
use tracing::{debug, info};

pub const PROMPT: &str = "ccon> ";

pub struct Console {
    table: CommandTable,
}

impl Console {
    pub fn new() -> Self {
        Self {
            table: CommandTable::new(),
        }
    }

    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        write!(output, "{}", PROMPT)?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            debug!("Received input: {}", line);

            let mut words = line.split_whitespace();
            let word = match words.next() {
                Some(word) => word,
                None => {
                    write!(output, "{}", PROMPT)?;
                    output.flush()?;
                    continue;
                }
            };

            match Keyword::from(word) {
                Some(Keyword::Add) => match words.next() {
                    Some(name) => {
                        self.table.push(name, vec![]);
                    }
                    None => writeln!(output, "Error reading command. Try again.")?,
                },
                Some(Keyword::Remove) => match words.next() {
                    Some(name) => {
                        if self.table.remove(name).is_none() {
                            writeln!(output, "There is no command named '{}'.", name)?;
                        }
                    }
                    None => info!("Command name argument is null."),
                },
                Some(Keyword::List) => self.list(&mut output)?,
                Some(Keyword::Relink) => self.table.relink(),
                Some(Keyword::Size) => writeln!(output, "List size is {}.", self.table.len())?,
                Some(Keyword::Quit) => break,
                None => writeln!(output, "Command unrecognized.")?,
            }

            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }
        writeln!(output, "Quit")?;
        Ok(())
    }

    fn list(&self, output: &mut impl Write) -> io::Result<()> {
        for entry in self.table.entries() {
            writeln!(output, "Command id {} named '{}'", entry.id, entry.key)?;
        }
        Ok(())
    }
}
