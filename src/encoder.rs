use crate::command::CommandTable;
use crate::define::delimiter;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EncodeError {
    #[error("Improper formatting: Found too many '>'s")]
    BadSegment(String),
    #[error("Improper formatting: Argument is missing a ':'")]
    BadArgument(String),
}

pub struct Encoder {
    table: CommandTable,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            table: CommandTable::new(),
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    // Output references table ids in place of keys. The table is append-only
    // and lives as long as the encoder, so ids keep incrementing across calls.
    pub fn compress(&mut self, notation: &str) -> Result<String, EncodeError> {
        let mut compressed = String::new();
        for segment in notation.split(delimiter::SEGMENT) {
            let pieces: Vec<&str> = segment.split(delimiter::ENTRY).collect();
            if pieces.len() != 2 {
                return Err(EncodeError::BadSegment(segment.to_string()));
            }
            let key = pieces[0];
            let arguments: Vec<String> = pieces[1]
                .split(delimiter::ARGUMENT)
                .map(|token| token.to_string())
                .collect();

            let id = self.table.push(key, arguments);
            compressed.push_str(&id.to_string());
            compressed.push(delimiter::ENTRY);

            let entry = &self.table.entries()[id];
            for (position, token) in entry.arguments.iter().enumerate() {
                // Element 1 of the split, not the whole remainder: "b:x:y"
                // compacts to "x".
                let value = token
                    .split(delimiter::VALUE)
                    .nth(1)
                    .ok_or_else(|| EncodeError::BadArgument(token.clone()))?;
                if position > 0 {
                    compressed.push(delimiter::ARGUMENT);
                }
                compressed.push_str(&position.to_string());
                compressed.push(delimiter::VALUE);
                compressed.push_str(value);
            }
            compressed.push(delimiter::SEGMENT);
            debug!("Compressed segment with key '{}' as command id {}.", key, id);
        }
        Ok(compressed)
    }
}
