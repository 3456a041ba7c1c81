pub mod bar_chart;
pub mod date_range_picker;
pub mod rank_badge;
pub mod sortable_header_cell;
pub mod stat_card;

pub use bar_chart::BarChart;
pub use date_range_picker::DateRangePicker;
pub use rank_badge::RankBadge;
pub use sortable_header_cell::SortableHeaderCell;
pub use stat_card::StatCard;
