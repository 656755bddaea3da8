/// Approximate number of terminal columns a word occupies.
///
/// Counts the bytes that do not continue a UTF-8 sequence (top bits other
/// than `10`), i.e. roughly one per code point. Wide and combining
/// characters are not accounted for.
pub fn display_width(word: &[u8]) -> usize {
    word.iter().filter(|&&byte| byte & 0xc0 != 0x80).count()
}
