/// Page order of the flipbook.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn from_rtl(rtl: bool) -> Self {
        match rtl {
            true => Self::Rtl,
            false => Self::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }

    /// Label for the button that switches away from this direction.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Rtl => "Switch to LTR",
            Self::Ltr => "Switch to RTL",
        }
    }
}
