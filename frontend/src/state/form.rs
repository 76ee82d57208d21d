pub const CONFIRMATION: &str =
    "Thank you for your message! This is a demo form, nothing was sent.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Sending,
}

impl Submission {
    /// Starts a mock submit; false if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if *self == Self::Sending {
            return false;
        }
        *self = Self::Sending;
        true
    }

    /// Ends the simulated delay and hands back the cleared fields.
    pub fn finish(&mut self) -> ContactDraft {
        *self = Self::Idle;
        ContactDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_cycle_resets_fields() {
        let mut submission = Submission::default();
        assert!(submission.begin());
        assert_eq!(submission, Submission::Sending);
        assert_eq!(submission.finish(), ContactDraft::default());
        assert_eq!(submission, Submission::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut submission = Submission::default();
        assert!(submission.begin());
        assert!(!submission.begin());
        submission.finish();
        assert!(submission.begin());
    }
}
