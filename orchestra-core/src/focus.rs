//! Transient highlight for the card the user asked to jump to.

/// Identifies one call to [`FocusMarker::focus`] so its delayed clear can tell
/// whether it is still the latest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct FocusMarker {
    current: Option<(String, FocusTicket)>,
    issued: u64,
}

impl FocusMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self, id: impl Into<String>) -> FocusTicket {
        self.issued += 1;
        let ticket = FocusTicket(self.issued);
        self.current = Some((id.into(), ticket));
        ticket
    }

    /// Clear the marker if `ticket` is still the one that set it.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: FocusTicket) -> bool {
        match &self.current {
            Some((_, current)) if *current == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.current.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused() == Some(id)
    }
}

/// Zero-based board position for the `1`..`9` quick-focus keys.
pub fn quick_focus_index(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || digit == 0 {
        return None;
    }
    Some(digit as usize - 1)
}
