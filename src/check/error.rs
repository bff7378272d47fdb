/// Every way a check can end without an answer. All of them are terminal
/// for the check that produced them and render as `Status::Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    EmptyInput,
    InvalidFormat,
    UnexpectedStatus(u16),
    Transport(String),
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CheckError::EmptyInput => write!(f, "Please enter a nickname."),
            CheckError::InvalidFormat => write!(
                f,
                "Invalid nickname! Use 3-16 characters (letters, numbers and _)."
            ),
            CheckError::UnexpectedStatus(_) => {
                write!(f, "Something went wrong while checking. Please try again.")
            }
            // Detail goes to the log only
            CheckError::Transport(_) => write!(f, "Could not connect to the lookup server."),
        }
    }
}

impl std::error::Error for CheckError {}
