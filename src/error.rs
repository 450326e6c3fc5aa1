#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CBOR error ({0})")]
    Cbor(#[from] dcbor::Error),

    #[error("not an infinity: {0}")]
    NotAnInfinity(f64),

    #[error("not a signed NaN marker")]
    NotANanMarker,

    #[error("unrecognized NaN marker bits: h'{0}'")]
    UnrecognizedNanBits(String),

    #[error("neither an infinity nor a signed NaN marker")]
    NotAnExtreme,
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}

impl From<Error> for dcbor::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Cbor(err) => err,
            _ => dcbor::Error::msg(err),
        }
    }
}
