use tracing::{debug, info};

#[derive(Debug, PartialEq, Clone)]
pub struct CommandEntry {
    pub id: usize,
    pub key: String,
    pub arguments: Vec<String>,
}

pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    // The id handed out always equals the entry's position at insertion time.
    pub fn push(&mut self, key: &str, arguments: Vec<String>) -> usize {
        let id = self.entries.len();
        self.entries.push(CommandEntry {
            id,
            key: key.to_string(),
            arguments,
        });
        debug!("Command id {} named '{}' added; table size is {}.", id, key, self.entries.len());
        id
    }

    pub fn get(&self, id: usize) -> Option<&CommandEntry> {
        self.entries.get(id)
    }

    pub fn remove(&mut self, key: &str) -> Option<CommandEntry> {
        let position = self.entries.iter().position(|entry| entry.key == key)?;
        let removed = self.entries.remove(position);
        debug!("Command to remove: '{}' was found at {}.", removed.key, removed.id);
        self.relink();
        Some(removed)
    }

    // Walks the table and pulls every id back in line with its position.
    pub fn relink(&mut self) {
        for (id, entry) in self.entries.iter_mut().enumerate() {
            if entry.id != id {
                info!("Command {} at incorrect id {}. Reassigning id {}.", entry.key, entry.id, id);
                entry.id = id;
            } else {
                info!("Command {} at correct id {}.", entry.key, entry.id);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_positional_ids() {
        let mut table = CommandTable::new();
        assert_eq!(table.push("Apple", vec![]), 0);
        assert_eq!(table.push("Banana", vec![]), 1);
        assert_eq!(table.push("Cantaloupe", vec![]), 2);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(1).unwrap().key, "Banana");
        assert!(table.get(3).is_none());
    }

    #[test]
    fn remove_relinks_the_remainder() {
        fn check(table: &CommandTable, expected: &[&str]) {
            assert_eq!(table.len(), expected.len());
            for (id, key) in expected.iter().enumerate() {
                let entry = table.get(id).unwrap();
                assert_eq!(entry.id, id);
                assert_eq!(entry.key, *key);
            }
        }

        let mut table = CommandTable::new();
        for &key in ["Apple", "Banana", "Cantaloupe", "Dates", "Eggplant", "Fruit"].iter() {
            table.push(key, vec![]);
        }

        assert_eq!(table.remove("Cantaloupe").unwrap().key, "Cantaloupe");
        check(&table, &["Apple", "Banana", "Dates", "Eggplant", "Fruit"]);

        assert_eq!(table.remove("Apple").unwrap().id, 0);
        check(&table, &["Banana", "Dates", "Eggplant", "Fruit"]);

        assert!(table.remove("Zucchini").is_none());
        check(&table, &["Banana", "Dates", "Eggplant", "Fruit"]);
    }

    #[test]
    fn remove_takes_the_first_match() {
        let mut table = CommandTable::new();
        table.push("Apple", vec![]);
        table.push("Apple", vec![]);
        assert_eq!(table.remove("Apple").unwrap().id, 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn relink_on_an_empty_table_is_a_no_op() {
        let mut table = CommandTable::new();
        table.relink();
        assert!(table.is_empty());
    }
}
