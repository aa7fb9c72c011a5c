use std::fmt;

/// Sequence context of a cytosine call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DinucleotideContext {
    CG,
    CHG,
    CHH,
    Other(String),
}

impl DinucleotideContext {
    pub fn parse(context: &str) -> Self {
        match context {
            "CG" => DinucleotideContext::CG,
            "CHG" => DinucleotideContext::CHG,
            "CHH" => DinucleotideContext::CHH,
            other => DinucleotideContext::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DinucleotideContext::CG => "CG",
            DinucleotideContext::CHG => "CHG",
            DinucleotideContext::CHH => "CHH",
            DinucleotideContext::Other(s) => s,
        }
    }

    pub fn is_cg(&self) -> bool {
        *self == DinucleotideContext::CG
    }
}

impl fmt::Display for DinucleotideContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
