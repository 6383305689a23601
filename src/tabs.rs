//! Tab controller for the dashboard panels
//!
//! A fixed set of tabs, each tagged with the panel it shows. Selecting a tab
//! deactivates every tab and panel, then activates the selected tab and the
//! panel matching its tag, so exactly one pair is active at any time. The
//! controller knows nothing about the data shown in the panels.

/// Identifier of a content panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Timeline,
    Statistics,
    Patterns,
    Categories,
    Forecast,
}

impl Panel {
    /// All panels in display order
    pub const ALL: [Panel; 5] = [
        Panel::Timeline,
        Panel::Statistics,
        Panel::Patterns,
        Panel::Categories,
        Panel::Forecast,
    ];
}

/// A clickable tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Timeline,
    Statistics,
    Patterns,
    Categories,
    Forecast,
}

impl Tab {
    /// All tabs in tab-bar order
    pub const ALL: [Tab; 5] = [
        Tab::Timeline,
        Tab::Statistics,
        Tab::Patterns,
        Tab::Categories,
        Tab::Forecast,
    ];

    /// Title shown in the tab bar
    pub fn title(self) -> &'static str {
        match self {
            Tab::Timeline => "Timeline",
            Tab::Statistics => "Statistics",
            Tab::Patterns => "Patterns",
            Tab::Categories => "AQI Scale",
            Tab::Forecast => "Forecast",
        }
    }

    /// The panel this tab shows
    pub fn target(self) -> Panel {
        match self {
            Tab::Timeline => Panel::Timeline,
            Tab::Statistics => Panel::Statistics,
            Tab::Patterns => Panel::Patterns,
            Tab::Categories => Panel::Categories,
            Tab::Forecast => Panel::Forecast,
        }
    }

    /// Position in the tab bar
    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Parses a tab name from the command line
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "timeline" | "history" => Some(Tab::Timeline),
            "stats" | "statistics" | "trend" => Some(Tab::Statistics),
            "patterns" | "pattern" => Some(Tab::Patterns),
            "categories" | "scale" | "legend" => Some(Tab::Categories),
            "forecast" | "24h" => Some(Tab::Forecast),
            _ => None,
        }
    }
}

/// Tracks which tab and panel carry the active marker
#[derive(Debug, Clone)]
pub struct TabController {
    tabs: [(Tab, bool); Tab::ALL.len()],
    panels: [(Panel, bool); Panel::ALL.len()],
}

impl TabController {
    /// Creates a controller with `initial` active
    pub fn new(initial: Tab) -> Self {
        let mut controller = Self {
            tabs: Tab::ALL.map(|t| (t, false)),
            panels: Panel::ALL.map(|p| (p, false)),
        };
        controller.select(initial);
        controller
    }

    /// Activates `tab` and its panel, deactivating everything else.
    ///
    /// Selecting the already-active tab re-applies the same state.
    pub fn select(&mut self, tab: Tab) {
        for (_, active) in self.tabs.iter_mut() {
            *active = false;
        }
        for (_, active) in self.panels.iter_mut() {
            *active = false;
        }

        if let Some(entry) = self.tabs.iter_mut().find(|(t, _)| *t == tab) {
            entry.1 = true;
        }
        let target = tab.target();
        if let Some(entry) = self.panels.iter_mut().find(|(p, _)| *p == target) {
            entry.1 = true;
        }
    }

    /// Selects the tab at `index`, ignoring out-of-range positions
    pub fn select_index(&mut self, index: usize) {
        if let Some(tab) = Tab::ALL.get(index) {
            self.select(*tab);
        }
    }

    /// Moves to the next tab, wrapping at the end
    pub fn next(&mut self) {
        let index = (self.active_tab().index() + 1) % Tab::ALL.len();
        self.select_index(index);
    }

    /// Moves to the previous tab, wrapping at the start
    pub fn previous(&mut self) {
        let count = Tab::ALL.len();
        let index = (self.active_tab().index() + count - 1) % count;
        self.select_index(index);
    }

    /// The currently active tab
    pub fn active_tab(&self) -> Tab {
        self.tabs
            .iter()
            .find(|(_, active)| *active)
            .map(|(t, _)| *t)
            .unwrap_or_default()
    }

    /// The currently active panel
    pub fn active_panel(&self) -> Panel {
        self.panels
            .iter()
            .find(|(_, active)| *active)
            .map(|(p, _)| *p)
            .unwrap_or(Panel::Timeline)
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.tabs.iter().any(|(t, active)| *t == tab && *active)
    }

    pub fn is_panel_active(&self, panel: Panel) -> bool {
        self.panels.iter().any(|(p, active)| *p == panel && *active)
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}
