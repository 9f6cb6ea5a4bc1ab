use derive_more::{Display, From};

pub const METADATA: &str = "Metadata";
pub const LOLUPD_1P: &str = "LOLUPD(1P)";
pub const FIRST_PASS_EXECUTED: &str = "1P Executed";
pub const LOLUPD_2P: &str = "LOLUPD(2P)";
pub const SECOND_PASS_EXECUTED: &str = "2P Executed";
pub const OUTPUT_SENT: &str = "Output Sent";

/// Stages shown in the statistics strip, in production order.
pub const KNOWN_STAGES: [(&str, Tone); 6] = [
    (METADATA, Tone::Positive),
    (LOLUPD_1P, Tone::Positive),
    (FIRST_PASS_EXECUTED, Tone::Positive),
    (LOLUPD_2P, Tone::Positive),
    (SECOND_PASS_EXECUTED, Tone::Warning),
    (OUTPUT_SENT, Tone::Critical),
];

/// A campaign's position in the print production workflow.
///
/// The vocabulary is open ended, any label is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct Stage(String);

impl Stage {
    /// The stage every newly created campaign starts in.
    pub fn initial() -> Self {
        Self(METADATA.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tone of this stage if it is one of the known stages.
    pub fn tone(&self) -> Option<Tone> {
        KNOWN_STAGES
            .iter()
            .find(|(label, _)| *label == self.0)
            .map(|(_, tone)| *tone)
    }
}

impl From<&str> for Stage {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// How a count or badge should be emphasised when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub stage: &'static str,
    pub count: usize,
    pub tone: Tone,
}

/// Totals shown above the campaign table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub stages: Vec<StageCount>,
}
