pub struct Hyperlink;

impl Hyperlink {
    pub const TEXT_OPEN: char = '[';
    pub const TEXT_CLOSE: char = ']';
    pub const URI_OPEN: char = '(';
    pub const URI_CLOSE: char = ')';
}
