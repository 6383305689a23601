//! AQI sparkline widget for the timeline panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::data::AqiCategory;

/// Block characters for different AQI levels (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A one-row sparkline of daily AQI values, each bar coloured by its category
pub struct AqiSparkline<'a> {
    /// AQI values, oldest first
    values: &'a [u32],
    /// Value mapped to the tallest block
    max_value: u32,
    /// Index of a value to emphasise
    highlight: Option<usize>,
}

impl<'a> AqiSparkline<'a> {
    pub fn new(values: &'a [u32], max_value: u32) -> Self {
        Self {
            values,
            max_value: max_value.max(1),
            highlight: None,
        }
    }

    pub fn highlight(mut self, index: usize) -> Self {
        self.highlight = Some(index);
        self
    }

    fn value_to_block(&self, value: u32) -> char {
        let normalized = (f64::from(value) / f64::from(self.max_value)).clamp(0.0, 1.0);
        let index = ((normalized * 7.0).round() as usize).min(7);
        BLOCKS[index]
    }
}

impl<'a> Widget for AqiSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Keep the newest values when the area is narrower than the series
        let width = area.width as usize;
        let skip = self.values.len().saturating_sub(width);

        for (i, value) in self.values.iter().enumerate().skip(skip) {
            let block = self.value_to_block(*value);
            let x = area.x + (i - skip) as u16;

            let mut style = Style::default().fg(AqiCategory::from_aqi(*value).color());
            if self.highlight == Some(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }

            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(block).set_style(style);
            }
        }
    }
}
