//! Per-line trigger bits.
//!
//! Before the scanner runs any regex against a line it computes a handful of
//! cheap features. The repeat-marker patterns only run when a line has both
//! digits and a repeat operator, and bracket balance is only counted when a
//! bracket bit is set. Results are identical to running every check.

/// Characters that open a repeat group. The three families are interchangeable.
pub(crate) const OPEN_BRACKETS: [char; 3] = ['(', '[', '{'];
/// Characters that close a repeat group.
pub(crate) const CLOSE_BRACKETS: [char; 3] = [')', ']', '}'];

bitflags::bitflags! {
    /// Coarse features of one line (or of a collected group).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineTriggers: u8 {
        const HAS_DIGITS = 1 << 0;
        const OPENS      = 1 << 1;
        const CLOSES     = 1 << 2;
        const REPEAT_OP  = 1 << 3;
    }
}

impl LineTriggers {
    pub fn scan(text: &str) -> Self {
        let mut triggers = LineTriggers::empty();
        for c in text.chars() {
            match c {
                '0'..='9' => triggers |= LineTriggers::HAS_DIGITS,
                '(' | '[' | '{' => triggers |= LineTriggers::OPENS,
                ')' | ']' | '}' => triggers |= LineTriggers::CLOSES,
                'x' | '×' | '*' => triggers |= LineTriggers::REPEAT_OP,
                _ => {}
            }
        }
        triggers
    }

    /// Whether the line could be a repeat marker such as `4x` or `4x (`.
    pub fn may_be_repeat_marker(self) -> bool {
        self.contains(LineTriggers::HAS_DIGITS | LineTriggers::REPEAT_OP)
    }

    /// Opening minus closing brackets in `text` (negative when it closes more).
    pub fn bracket_balance(self, text: &str) -> i64 {
        if !self.intersects(LineTriggers::OPENS | LineTriggers::CLOSES) {
            return 0;
        }
        text.chars().fold(0, |depth, c| {
            if OPEN_BRACKETS.contains(&c) {
                depth + 1
            } else if CLOSE_BRACKETS.contains(&c) {
                depth - 1
            } else {
                depth
            }
        })
    }
}
