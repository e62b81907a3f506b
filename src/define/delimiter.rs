pub const SEGMENT: char = '<';
pub const ENTRY: char = '>';
pub const ARGUMENT: char = ',';
pub const VALUE: char = ':';
