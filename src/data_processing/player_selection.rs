/// A player choice typed at the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// 1-based position in the player menu.
    Index(usize),
    /// Exact player name.
    Name(&'a str),
}

impl<'a> Selection<'a> {
    /// Surrounding whitespace is ignored. Only all-digit tokens are indexes.
    pub fn parse(token: &'a str) -> Self {
        let token = token.trim();
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = token.parse() {
                return Selection::Index(index);
            }
        }
        Selection::Name(token)
    }
}
