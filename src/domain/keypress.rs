/// A single key read from the terminal in raw mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keypress {
    Enter,
    Char(char),
    /// Ctrl-C; raw mode swallows SIGINT so it shows up as a key.
    Interrupt,
    Other,
}

/// What the confirmation loop does with a proposed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Edit,
    Abort,
    Interrupt,
}

impl Keypress {
    pub fn decision(self) -> Decision {
        match self {
            Keypress::Enter | Keypress::Char('\r') | Keypress::Char('\n') => Decision::Accept,
            Keypress::Char('e') | Keypress::Char('E') => Decision::Edit,
            Keypress::Interrupt => Decision::Interrupt,
            Keypress::Char(_) | Keypress::Other => Decision::Abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_keys_to_decisions() {
        assert_eq!(Keypress::Enter.decision(), Decision::Accept);
        assert_eq!(Keypress::Char('\r').decision(), Decision::Accept);
        assert_eq!(Keypress::Char('e').decision(), Decision::Edit);
        assert_eq!(Keypress::Char('E').decision(), Decision::Edit);
        assert_eq!(Keypress::Char('q').decision(), Decision::Abort);
        assert_eq!(Keypress::Char(' ').decision(), Decision::Abort);
        assert_eq!(Keypress::Other.decision(), Decision::Abort);
        assert_eq!(Keypress::Interrupt.decision(), Decision::Interrupt);
    }
}
