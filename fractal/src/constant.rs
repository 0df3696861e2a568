use std::fmt::{Display, Formatter};

/// Where the fractal pattern is anchored on the torus.
///
/// The two variants share one code path; the only structural difference is
/// the coordinate offset applied during wrapping and periodic projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Corner,
    Centre,
}

impl Origin {
    /// Offset added to both coordinates before the modulo-N wrap.
    pub fn offset(self, order: i64) -> i64 {
        match self {
            Self::Corner => 0,
            Self::Centre => order / 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Corner => "corner",
            Self::Centre => "centre",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParamError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "corner" => Ok(Self::Corner),
            "centre" | "center" => Ok(Self::Centre),
            _ => Err(ParamError::InvalidOrigin(value.to_string())),
        }
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum ParamError {
    InvalidOrder(i64),
    InvalidKatz(f64),
    InvalidTolerance(i64),
    InvalidOrigin(String),
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

pub struct Const;

impl Const {
    pub const DEFAULT_ORDER: i64 = 257;
    pub const DEFAULT_KATZ: f64 = 0.1;

    // Dashboard slider bounds; callers clamp interactive input against these.
    pub const MIN_UI_ORDER: i64 = 50;
    pub const MAX_UI_ORDER: i64 = 1000;
    pub const MAX_UI_KATZ: f64 = 5.0;
}

impl Display for ParamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrder(v) => write!(f, "invalid farey order: {v}"),
            Self::InvalidKatz(v) => write!(f, "invalid katz threshold: {v}"),
            Self::InvalidTolerance(v) => write!(f, "invalid rounding tolerance: {v}"),
            Self::InvalidOrigin(v) => write!(f, "invalid origin: {v}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Yaml(e) => write!(f, "yaml error: {e}"),
        }
    }
}

impl std::error::Error for ParamError {}

impl From<std::io::Error> for ParamError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_yaml::Error> for ParamError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
    }
}
