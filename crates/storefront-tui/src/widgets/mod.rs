//! Widget components for the storefront TUI

pub mod filter_sidebar;
pub mod footer;
pub mod header;
pub mod pagination;
pub mod product_card;
pub mod product_detail;
pub mod product_grid;
pub mod toast;

pub use filter_sidebar::{FilterSidebar, FilterSummary};
pub use footer::Footer;
pub use header::MainHeader;
pub use pagination::{page_items, PageItem, PaginationBar};
pub use product_card::{ProductCard, SkeletonCard};
pub use product_detail::ProductDetailView;
pub use product_grid::ProductGrid;
pub use toast::ToastStack;
