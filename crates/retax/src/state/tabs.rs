/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    Schedule,
    Sale,
    Exchange,
    Segmentation,
    CashFlow,
}

impl TabId {
    pub const ALL: [TabId; 6] = [
        TabId::Overview,
        TabId::Schedule,
        TabId::Sale,
        TabId::Exchange,
        TabId::Segmentation,
        TabId::CashFlow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Schedule => "Schedule",
            TabId::Sale => "Sale & Tax",
            TabId::Exchange => "1031 Exchange",
            TabId::Segmentation => "Segmentation",
            TabId::CashFlow => "Cash Flow",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::Schedule => 1,
            TabId::Sale => 2,
            TabId::Exchange => 3,
            TabId::Segmentation => 4,
            TabId::CashFlow => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        TabId::ALL.get(index).copied()
    }
}
