pub mod config;
pub mod date;
pub mod layout;
pub mod reader;
pub mod record;
pub mod sample;
pub mod theme;
pub mod writer;

// Export input model
pub use date::{format_date_range, YearMonth, MONTH_NAMES};
pub use record::{TimelineData, TimelineRecord, TrackKind};

// Export layout engine
pub use config::LayoutConfig;
pub use layout::{
    layout_timeline, LayoutEngine, PositionedItem, TimelineLayout, TrackLayout,
    ProjectedItem, WidenedItem, estimate_text_width
};

// Export document I/O
pub use reader::{TimelineReader, JsonTimelineReader, parse_timeline, parse_timeline_str};
pub use writer::{TimelineWriter, write_timeline};
pub use sample::{SampleTimelineReader, sample_timeline};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness};
