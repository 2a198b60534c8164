/// Amount in Korean won.
pub type Won = u64;

/// What a price is charged for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceUnit {
    #[default]
    PerJob,
    PerHour,
    PerWeek,
}

impl PriceUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerJob => "건",
            Self::PerHour => "시간",
            Self::PerWeek => "주",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub amount: Won,
    pub unit: PriceUnit,
}

impl Price {
    pub const fn new(amount: Won, unit: PriceUnit) -> Self {
        Self { amount, unit }
    }
}
