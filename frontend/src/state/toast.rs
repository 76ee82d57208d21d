/// Identifies one `show` call so a superseded hide timer can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>) -> Ticket {
        self.generation += 1;
        self.message = message.into();
        self.visible = true;
        Ticket(self.generation)
    }

    /// Hides the toast only if `ticket` belongs to the latest `show`.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_timer_hides_toast() {
        let mut toast = ToastState::default();
        let ticket = toast.show("Saved");
        assert!(toast.visible);
        assert!(toast.expire(ticket));
        assert!(!toast.visible);
        assert_eq!(toast.message, "Saved");
    }

    #[test]
    fn superseded_timer_leaves_newer_toast_visible() {
        let mut toast = ToastState::default();
        let first = toast.show("first");
        let second = toast.show("second");

        assert!(!toast.expire(first));
        assert!(toast.visible);
        assert_eq!(toast.message, "second");

        assert!(toast.expire(second));
        assert!(!toast.visible);
    }

    #[test]
    fn expiring_twice_is_harmless() {
        let mut toast = ToastState::default();
        let ticket = toast.show("once");
        assert!(toast.expire(ticket));
        assert!(!toast.expire(ticket));
    }
}
