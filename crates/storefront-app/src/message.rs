//! Message types for the application (TEA pattern)

use storefront_core::{FilterChange, Product, ProductListResponse, Route};

use crate::input_key::InputKey;
use crate::request::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Visit a location, pushing it onto the history
    Navigate(Route),
    /// Browser-style back
    HistoryBack,
    /// Browser-style forward
    HistoryForward,
    /// Leave the detail page for the catalog with its current filters
    BackToProducts,
    /// Re-issue the fetch for the current location
    Reload,

    // ─────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────
    /// Merge a filter change (always back to page 1)
    ApplyFilter(FilterChange),
    /// Reset search and price bounds to their defaults
    ClearFilters,
    GoToPage(u32),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    SelectNextProduct,
    SelectPreviousProduct,
    OpenSelectedProduct,

    // ─────────────────────────────────────────────────────────
    // Filter Sidebar
    // ─────────────────────────────────────────────────────────
    FocusSidebar,
    /// Replace the search text being edited
    SidebarInput { text: String },
    SidebarFocusNext,
    SidebarFocusPrev,
    /// Move the focused price bound by this many steps
    SidebarAdjust(i64),
    /// Enter on the focused field
    SidebarSubmit,
    /// Reset the form to its limits and apply
    SidebarReset,
    /// Discard edits and leave the sidebar
    SidebarCancel,

    // ─────────────────────────────────────────────────────────
    // Detail Page
    // ─────────────────────────────────────────────────────────
    ContactSupplier,
    StartOrder,

    // ─────────────────────────────────────────────────────────
    // Fetch Results
    // ─────────────────────────────────────────────────────────
    ProductsLoaded {
        request_id: RequestId,
        response: ProductListResponse,
    },
    ProductsFailed {
        request_id: RequestId,
        error: String,
    },
    ProductLoaded {
        request_id: RequestId,
        product: Box<Product>,
    },
    ProductFailed {
        request_id: RequestId,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // UI Context
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    DismissToast,
}
