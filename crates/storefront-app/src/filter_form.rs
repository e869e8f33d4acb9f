//! Filter sidebar form state
//!
//! Edits are local until applied. Applying yields a [`FilterChange`]; the
//! listing then navigates to page 1 of the new result set.

use storefront_core::{FilterChange, FilterState};

/// Focusable fields of the sidebar, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Search,
    MinPrice,
    MaxPrice,
    Apply,
    Reset,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Search => FormField::MinPrice,
            FormField::MinPrice => FormField::MaxPrice,
            FormField::MaxPrice => FormField::Apply,
            FormField::Apply => FormField::Reset,
            FormField::Reset => FormField::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Search => FormField::Reset,
            FormField::MinPrice => FormField::Search,
            FormField::MaxPrice => FormField::MinPrice,
            FormField::Apply => FormField::MaxPrice,
            FormField::Reset => FormField::Apply,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub search: String,
    pub min_price: i64,
    pub max_price: i64,
    pub focus: FormField,
    /// Slider bounds
    pub limit_min: i64,
    pub limit_max: i64,
    pub step: i64,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self::new(&FilterState::default(), 10)
    }
}

impl FilterForm {
    /// Form limits are the price bounds of `defaults`
    pub fn new(defaults: &FilterState, step: i64) -> Self {
        let limit_min = defaults.min_price.min(defaults.max_price);
        let limit_max = defaults.min_price.max(defaults.max_price);
        Self {
            search: defaults.search.clone(),
            min_price: limit_min,
            max_price: limit_max,
            focus: FormField::Search,
            limit_min,
            limit_max,
            step: step.max(1),
        }
    }

    /// Load the current filter values into the form
    pub fn sync_from(&mut self, filters: &FilterState) {
        self.search = filters.search.clone();
        self.min_price = filters.min_price;
        self.max_price = filters.max_price;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Move the focused price bound by `steps` slider steps, within the limits
    pub fn adjust(&mut self, steps: i64) {
        let delta = steps * self.step;
        match self.focus {
            FormField::MinPrice => {
                self.min_price = (self.min_price + delta).clamp(self.limit_min, self.limit_max);
            }
            FormField::MaxPrice => {
                self.max_price = (self.max_price + delta).clamp(self.limit_min, self.limit_max);
            }
            _ => {}
        }
    }

    /// Reset every field to the limits
    pub fn reset(&mut self) {
        self.search.clear();
        self.min_price = self.limit_min;
        self.max_price = self.limit_max;
    }

    /// Search is set or the range is narrower than the limits
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.min_price != self.limit_min || self.max_price != self.limit_max
    }

    /// The change to apply; a reversed range is swapped
    pub fn to_change(&self) -> FilterChange {
        let (min, max) = if self.min_price > self.max_price {
            (self.max_price, self.min_price)
        } else {
            (self.min_price, self.max_price)
        };
        FilterChange {
            search: Some(self.search.trim().to_string()),
            min_price: Some(min),
            max_price: Some(max),
        }
    }
}
