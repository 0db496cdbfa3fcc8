// WHY: Split candidates inside bullet items or open parentheses must be rejected
// Offsets are byte positions; anything outside the text is simply "not inside"

use crate::text::starts_with_bullet_marker;

/// True when the line containing `position` is a bullet item
pub fn is_position_in_bullet_line(text: &str, position: usize) -> bool {
    if position >= text.len() {
        return false;
    }
    let bytes = text.as_bytes();
    let line_start = bytes[..position]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let line_end = bytes[position..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(text.len(), |i| position + i);
    starts_with_bullet_marker(text[line_start..line_end].trim())
}

/// True when more `(` than `)` precede `position` (closers never drive the count negative)
pub fn is_position_inside_parentheses(text: &str, position: usize) -> bool {
    if position >= text.len() {
        return false;
    }
    let open = text.as_bytes()[..position]
        .iter()
        .fold(0usize, |open, &b| match b {
            b'(' => open + 1,
            b')' => open.saturating_sub(1),
            _ => open,
        });
    open > 0
}
