mod category_chart;
mod company_cards;
mod header;
mod layout;
mod recent_expenses;
mod section;
mod sidebar;
mod stat_cards;

pub use category_chart::CategoryChart;
pub use company_cards::CompanyCards;
pub use header::Header;
pub use layout::DashboardLayout;
pub use recent_expenses::RecentExpenses;
pub use section::Section;
pub use sidebar::Sidebar;
pub use stat_cards::StatCards;
