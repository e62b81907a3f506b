pub const ADD: &str = "add";
pub const REMOVE: &str = "remove";
pub const REMOVE_SHORT: &str = "rm";
pub const LIST: &str = "list";
pub const LIST_SHORT: &str = "ls";
pub const RELINK: &str = "relink";
pub const SIZE: &str = "size";
pub const QUIT: &str = "quit";
pub const QUIT_SHORT: &str = "q";
pub const EXIT: &str = "exit";

pub enum Keyword {
    Add,
    Remove,
    List,
    Relink,
    Size,
    Quit,
}

impl Keyword {
    pub fn from(word: &str) -> Option<Self> {
        Some(match word {
            ADD => Self::Add,
            REMOVE | REMOVE_SHORT => Self::Remove,
            LIST | LIST_SHORT => Self::List,
            RELINK => Self::Relink,
            SIZE => Self::Size,
            QUIT | QUIT_SHORT | EXIT => Self::Quit,
            _ => return None,
        })
    }
}
