use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A law of cosines argument fell outside `[-1, 1]`.
    ///
    /// The triangle sides formed by the actuator state cannot close,
    /// which means the state lies outside the physically reachable
    /// configuration space or the linkage table is misconfigured. The
    /// wrapped value is the offending cosine argument.
    CosineDomain(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CosineDomain(argument) => {
                write!(f, "cosine argument {} outside [-1, 1]", argument)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
